//! Mapping of service errors onto HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::Error;

const PROCESSING_ERROR: &str = "An error occurred while processing the invoice";

/// Error returned from API handlers
#[derive(Debug)]
pub enum ApiError {
    /// Error raised while validating or processing an invoice
    Service(Error),
    /// Body rejected by the JSON extractor before reaching handler logic
    Rejected(JsonRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    fn new(error: String) -> Self {
        Self {
            error,
            details: None,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::Rejected(rejection) => {
                tracing::warn!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
                return rejection.into_response();
            }
            ApiError::Service(err) => err,
        };

        let (status, body) = match &err {
            Error::InvalidInvoice => (StatusCode::BAD_REQUEST, ErrorBody::new(err.to_string())),
            Error::ProcessingFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(err.to_string()),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: PROCESSING_ERROR.to_string(),
                    details: Some(other.details()),
                },
            ),
        };

        if status.is_client_error() {
            tracing::warn!(%status, error = %err, "Request failed");
        } else {
            tracing::error!(%status, error = %err, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}
