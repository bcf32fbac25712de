//! API server state

use std::sync::Arc;

use crate::processor::{InvoiceProcessor, StubProcessor};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Processor invoked for every submitted invoice
    pub processor: Arc<dyn InvoiceProcessor>,
}

impl AppState {
    pub fn new(processor: Arc<dyn InvoiceProcessor>) -> Self {
        Self { processor }
    }

    /// State backed by the placeholder [`StubProcessor`]
    pub fn with_stub() -> Self {
        Self::new(Arc::new(StubProcessor::new()))
    }
}
