//! Errand fulfillment server
//!
//! Webhook backend answering intent-fulfillment requests for the Errand
//! conversational action.

use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use errand_server::{ServerConfig, config::ConfigError, start_server};

#[tokio::main]
async fn main() -> miette::Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("errand_server=debug,errand_core=debug,errand_api=debug")
        }))
        .with_file(true)
        .with_line_number(true)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .pretty()
        .init();

    // Load config, falling back to defaults when no file exists
    let config = match ServerConfig::load_default().await {
        Ok(config) => config,
        Err(ConfigError::FileNotFound { .. }) => {
            tracing::warn!("No configuration file found, using defaults");
            ServerConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Start server
    start_server(config).await.into_diagnostic()?;

    Ok(())
}
