//! Fulfillment event dispatch

use axum::{Json, extract::State, http::HeaderMap};

use errand_api::{ApiError, FulfillmentRequest, FulfillmentResponse};

use super::tasks;
use crate::state::AppState;

/// Spoken fallback for handler names this webhook does not register
const UNKNOWN_HANDLER_MESSAGE: &str = "Sorry, I can't help with that yet.";

/// Dispatch an inbound fulfillment event to its intent handler
pub async fn fulfill(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<FulfillmentRequest>,
) -> Result<Json<FulfillmentResponse>, ApiError> {
    tracing::debug!(handler = %event.handler.name, "fulfillment event received");

    match event.handler.name.as_str() {
        "add_task" => tasks::handle_add_task(&state, &headers, &event).await,
        "list_tasks" => tasks::handle_list_tasks(&state, &headers, &event).await,
        other => {
            tracing::warn!(handler = %other, "no handler registered for event");
            Ok(Json(FulfillmentResponse::speech(UNKNOWN_HANDLER_MESSAGE)))
        }
    }
}
