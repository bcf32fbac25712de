//! Invoicer - an invoice submission service
//!
//! Invoices are accepted over HTTP and handed to an [`processor::InvoiceProcessor`],
//! which decides when the invoice should be paid. The bundled
//! [`processor::StubProcessor`] schedules payment three days after submission.
//!
//! - `POST /invoices` submits an invoice
//! - `GET /invoices/:id/status` reports processing status
//! - `GET /health` reports liveness

pub mod api;
pub mod config;
pub mod error;
pub mod processor;
pub mod types;

pub use error::{Error, Result};
