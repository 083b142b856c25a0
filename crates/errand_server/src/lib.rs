//! Errand fulfillment server library
//!
//! Webhook backend for the Errand conversational action: decodes the
//! caller's identity, persists tasks, and renders them for the
//! conversational UI.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use state::AppState;

/// Start the Errand fulfillment server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    use axum::Router;
    use std::net::SocketAddr;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    tracing::info!("Starting Errand fulfillment server on {}", config.bind_address);

    // Connect the store before answering any fulfillment; AppState::new
    // fails fast when the database is unreachable.
    let state = AppState::new(config.clone()).await?;

    // Build router
    let app = Router::new()
        .merge(handlers::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse address
    let addr: SocketAddr = config.bind_address.parse()?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
