//! Invoice processing
//!
//! The [`InvoiceProcessor`] trait is the seam between the HTTP layer and
//! whatever decides when an invoice gets paid.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::types::{Invoice, ProcessingOutcome};
use crate::Result;

/// Days between submission and the scheduled payment
pub const PAYMENT_OFFSET_DAYS: i64 = 3;

const PROCESSED_MESSAGE: &str = "Invoice processed successfully.";

/// Source of the current time
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Invoice processor trait
#[async_trait]
pub trait InvoiceProcessor: Send + Sync {
    /// Process an invoice and report the scheduled payment date.
    ///
    /// `Ok` with `success == false` means the processor declined the invoice;
    /// `Err` means processing itself broke down.
    async fn process(&self, invoice: &Invoice) -> Result<ProcessingOutcome>;
}

/// Placeholder processor that schedules every invoice a fixed number of days out
#[derive(Clone)]
pub struct StubProcessor {
    clock: Clock,
}

impl StubProcessor {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Create a processor reading time from `clock`
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for StubProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceProcessor for StubProcessor {
    async fn process(&self, invoice: &Invoice) -> Result<ProcessingOutcome> {
        let now = (self.clock)();
        let optimized_payment_date = now + Duration::days(PAYMENT_OFFSET_DAYS);

        tracing::debug!(
            invoice_id = %invoice.id,
            %optimized_payment_date,
            "Scheduled invoice payment"
        );

        Ok(ProcessingOutcome {
            success: true,
            message: PROCESSED_MESSAGE.to_string(),
            optimized_payment_date,
        })
    }
}
