//! # Order Aggregator Service
//!
//! Entry point: loads `.env` if present, sets up tracing, reads [`AppConfig`]
//! from the environment, serves until Ctrl-C, then shuts down gracefully.

use order_aggregator::lifecycle::{setup_tracing, AppConfig, OrderSystem, SystemError};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    // Silent if the file does not exist; deployments inject env vars directly
    let _ = dotenvy::dotenv();

    setup_tracing();

    info!("Starting order aggregator");

    let config = AppConfig::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    let system = OrderSystem::start(config).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
