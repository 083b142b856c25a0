//! Task intake and listing handlers
//!
//! Each request runs the same sequence: decode identity, validate the
//! task text, persist, then render the owner's current collection. No
//! store access happens before authentication succeeds, and failed store
//! calls are never retried here.

use axum::{Json, http::HeaderMap};

use errand_api::{ApiError, FulfillmentRequest, FulfillmentResponse, ImageSource};
use errand_core::db::ops::TaskStoreExt;
use errand_core::{TaskContent, project};

use crate::auth;
use crate::state::AppState;

const LIST_TITLE: &str = "Your tasks";

/// Default artwork attached to rendered items
fn placeholder_image() -> ImageSource {
    ImageSource {
        url: "https://developers.google.com/assistant/assistant_96.png".to_string(),
        alt: "Errand logo".to_string(),
    }
}

/// Intake flow for the add-task intent.
pub async fn handle_add_task(
    state: &AppState,
    headers: &HeaderMap,
    event: &FulfillmentRequest,
) -> Result<Json<FulfillmentResponse>, ApiError> {
    let owner = auth::authenticate(headers, &state.jwt_decoding_key)?;

    let raw = event.param("task").unwrap_or_default();
    let content = TaskContent::parse(raw)?;

    let record = state.db.create_task(&owner, content.as_str()).await?;
    tracing::info!(task = %record.id, "task created");

    // Read-after-write: the rendered view must include the new record
    let tasks = state.db.list_tasks(&owner).await?;
    let items = project(&tasks, Some(&placeholder_image()));

    Ok(Json(
        FulfillmentResponse::speech(format!("Added {}.", content.as_str()))
            .with_list(LIST_TITLE, items),
    ))
}

/// Render the owner's task collection.
pub async fn handle_list_tasks(
    state: &AppState,
    headers: &HeaderMap,
    event: &FulfillmentRequest,
) -> Result<Json<FulfillmentResponse>, ApiError> {
    let owner = auth::authenticate(headers, &state.jwt_decoding_key)?;

    let tasks = state.db.list_tasks(&owner).await?;
    if tasks.is_empty() {
        return Ok(Json(FulfillmentResponse::speech(
            "You don't have any tasks yet. Try adding one.",
        )));
    }

    let items = project(&tasks, Some(&placeholder_image()));
    let speech = format!(
        "You have {} task{}.",
        tasks.len(),
        if tasks.len() == 1 { "" } else { "s" }
    );

    // The browse surface picks the collection shape via a session param
    let response = match event.session_param("display") {
        Some("collection") => FulfillmentResponse::speech(speech).with_collection(LIST_TITLE, items),
        _ => FulfillmentResponse::speech(speech).with_list(LIST_TITLE, items),
    };

    Ok(Json(response))
}
