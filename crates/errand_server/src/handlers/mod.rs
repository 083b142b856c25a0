//! HTTP request handlers

use axum::{
    Router,
    routing::{get, post},
};

pub mod fulfillment;
pub mod health;
pub mod tasks;

use crate::state::AppState;

/// Build all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Liveness probe answered by the webhook host
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // All fulfillment events arrive on one endpoint
        .route("/fulfillment", post(fulfillment::fulfill))
}
