//! Server binary for the Mergington activities service.
//!
//! Wires the seeded activity store into the HTTP API and serves it until
//! `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (YAML file + `HOST`/`PORT` overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the activity store
//! 4. Serve the API

mod config;
mod error;

use std::sync::Arc;

use mergington_activities::ActivityStore;
use mergington_api::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat, LoggingConfig};
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    // 1. Load configuration.
    let config = AppConfig::load()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);

    info!("mergington-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        redirect_target = config.server.redirect_target,
        "Configuration loaded"
    );

    // 3. Seed the activity store.
    let store = Arc::new(ActivityStore::with_seed_data());
    info!(activities = store.len().await, "Activity store seeded");

    // 4. Serve.
    let state = Arc::new(
        AppState::new(store).with_redirect_target(config.server.redirect_target.clone()),
    );
    start_server(&config.server_config(), state).await?;

    info!("mergington-server exited cleanly");
    Ok(())
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
