//! PawMart Server: pet adoption and supplies marketplace backend.
//!
//! Main entry point that loads configuration, opens the document store,
//! and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use pawmart_core::config::{AppConfig, LoggingConfig};
use pawmart_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, fatal = e.is_fatal(), "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `PAWMART_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PAWMART_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %config.database.provider,
        "Starting PawMart"
    );

    let store = pawmart_database::open_store(&config.database).await?;
    pawmart_api::run_server(config, store).await
}
