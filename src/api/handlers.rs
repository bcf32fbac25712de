//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{ApiError, AppState};
use crate::types::{Invoice, InvoiceStatus, SubmissionResponse};
use crate::Error;

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Submit an invoice for processing
///
/// Bodies without a JSON content type, and empty bodies, are treated as an
/// empty record and fail validation. Malformed JSON is rejected by the
/// extractor with its own response.
pub async fn submit_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let payload = parse_body(&headers, &body)?;

    let invoice = Invoice::from_json(payload).map_err(|e| {
        tracing::debug!("Invoice validation failed: {}", e);
        Error::InvalidInvoice
    })?;

    let outcome = state.processor.process(&invoice).await?;

    if !outcome.success {
        tracing::warn!(invoice_id = %invoice.id, "Processor declined invoice");
        return Err(Error::ProcessingFailed.into());
    }

    tracing::info!(
        invoice_id = %invoice.id,
        optimized_payment_date = %outcome.optimized_payment_date,
        "Invoice processed"
    );

    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// Report the processing status of an invoice
///
/// No invoice state is kept, so every identifier reports the same status.
pub async fn invoice_status(Path(id): Path<String>) -> Json<InvoiceStatus> {
    tracing::debug!(invoice_id = %id, "Status requested");
    Json(InvoiceStatus::processed())
}

fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let Json(value) = Json::<Value>::from_bytes(body)?;
    Ok(value)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers_with("Application/JSON")));
        assert!(!is_json_content_type(&headers_with("application/vnd.api+json")));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn test_empty_or_untyped_body_becomes_empty_record() {
        let empty = parse_body(&headers_with("application/json"), &Bytes::from_static(b"  \n")).unwrap();
        assert_eq!(empty, Value::Object(Map::new()));

        let untyped = parse_body(&HeaderMap::new(), &Bytes::from_static(br#"{"id": 1}"#)).unwrap();
        assert_eq!(untyped, Value::Object(Map::new()));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let result = parse_body(&headers_with("application/json"), &Bytes::from_static(b"{\"id\":"));
        assert!(matches!(result, Err(ApiError::Rejected(_))));
    }
}
