//! Contact Manager - Main entry point
//!
//! Runs the interactive terminal contact manager over stdin/stdout. Logs go
//! to stderr so they never interleave with the rendered views.

use anyhow::Result;
use contact_manager::cli::run_session;
use contact_manager::repositories::SeedContactSource;
use contact_manager::{Config, ContactApp};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Simulated load delay: {} ms", config.load_delay_ms);

    let source = SeedContactSource::new(config.load_delay());
    let mut app = ContactApp::new();
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    run_session(&mut app, &source, input, &mut out).await?;

    info!("Contact Manager shutdown complete");
    Ok(())
}
