//! Error types for invoicer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid invoice data")]
    InvalidInvoice,

    #[error("Invoice processing failed")]
    ProcessingFailed,

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn processing(msg: impl Into<String>) -> Self {
        Error::Processing(msg.into())
    }

    /// Message text without the variant prefix, suitable for client-facing details
    pub fn details(&self) -> String {
        match self {
            Error::Processing(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
