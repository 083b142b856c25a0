//! Liveness and health endpoints

use axum::{Json, extract::State};

use errand_api::responses::{ComponentStatus, HealthResponse, HealthStatus};
use errand_core::db::client;

use crate::state::AppState;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Errand fulfillment webhook" }))
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_status = match client::health_check(&state.db).await {
        Ok(()) => ComponentStatus::Ok,
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            ComponentStatus::Error
        }
    };

    let status = match database_status {
        ComponentStatus::Ok => HealthStatus::Healthy,
        ComponentStatus::Error => HealthStatus::Degraded,
    };

    Json(HealthResponse {
        status,
        version: errand_api::API_VERSION.to_string(),
        database_status,
    })
}
