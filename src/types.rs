//! Core data types

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Invoice identifier
///
/// Callers send either strings or numbers. Identity is plain value equality,
/// so `"42"` and `42` are distinct identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceId {
    Text(String),
    Number(serde_json::Number),
    Other(Value),
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceId::Text(s) => f.write_str(s),
            InvoiceId::Number(n) => write!(f, "{}", n),
            InvoiceId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Invoice submitted for processing
///
/// Only `id` is inspected; every other field is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Invoice {
    /// Build an invoice from a parsed JSON body.
    ///
    /// The body must be an object carrying a non-null `id`.
    pub fn from_json(body: Value) -> Result<Self> {
        let has_id = body
            .as_object()
            .and_then(|obj| obj.get("id"))
            .is_some_and(|id| !id.is_null());

        if !has_id {
            return Err(Error::InvalidInvoice);
        }

        Ok(serde_json::from_value(body)?)
    }
}

/// Result reported by an invoice processor
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOutcome {
    pub success: bool,
    pub message: String,
    pub optimized_payment_date: DateTime<Utc>,
}

/// Body of a successful `POST /invoices`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub optimized_payment_date: DateTime<Utc>,
}

impl From<ProcessingOutcome> for SubmissionResponse {
    fn from(outcome: ProcessingOutcome) -> Self {
        Self {
            message: outcome.message,
            optimized_payment_date: outcome.optimized_payment_date,
        }
    }
}

/// Processing status of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceStatus {
    pub status: String,
    pub message: String,
}

impl InvoiceStatus {
    /// Fixed status reported until invoice state is tracked
    pub fn processed() -> Self {
        Self {
            status: "Processed".to_string(),
            message: "Payment scheduled for 2023-10-15".to_string(),
        }
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2023-10-15T09:30:00.000Z`
fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_invoice_accepts_string_and_numeric_ids() {
        let text = Invoice::from_json(json!({"id": "abc123"})).unwrap();
        assert_eq!(text.id, InvoiceId::Text("abc123".to_string()));

        let number = Invoice::from_json(json!({"id": 999})).unwrap();
        assert_eq!(number.id, InvoiceId::Number(999.into()));
        assert_eq!(number.id.to_string(), "999");

        // Same digits, different type
        assert_ne!(text.id, number.id);
        let quoted = Invoice::from_json(json!({"id": "999"})).unwrap();
        assert_ne!(quoted.id, number.id);
    }

    #[test]
    fn test_invoice_keeps_extra_fields() {
        let invoice = Invoice::from_json(json!({
            "id": "inv-1",
            "amount": 120.5,
            "vendor": {"name": "Acme"}
        }))
        .unwrap();

        assert_eq!(invoice.fields.len(), 2);
        assert_eq!(invoice.fields["amount"], json!(120.5));
        assert_eq!(invoice.fields["vendor"]["name"], json!("Acme"));
        assert!(!invoice.fields.contains_key("id"));
    }

    #[test]
    fn test_invoice_rejects_missing_or_null_id() {
        for body in [
            json!({}),
            json!({"id": null}),
            json!({"amount": 10}),
            json!(null),
            json!([{"id": 1}]),
            json!("id"),
        ] {
            let err = Invoice::from_json(body.clone()).unwrap_err();
            assert!(
                matches!(err, Error::InvalidInvoice),
                "expected InvalidInvoice for {body}"
            );
        }
    }

    #[test]
    fn test_submission_response_shape() {
        let outcome = ProcessingOutcome {
            success: true,
            message: "ok".to_string(),
            optimized_payment_date: Utc.with_ymd_and_hms(2023, 10, 15, 9, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(SubmissionResponse::from(outcome)).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "ok",
                "optimizedPaymentDate": "2023-10-15T09:30:00.000Z"
            })
        );
    }
}
