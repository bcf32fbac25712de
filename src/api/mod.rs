//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/invoices", post(handlers::submit_invoice))
        .route("/invoices/:id/status", get(handlers::invoice_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for deployments using the placeholder processor
pub fn create_stub_router() -> Router {
    create_router(AppState::with_stub())
}
