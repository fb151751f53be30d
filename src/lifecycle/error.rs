//! Error types for system startup and shutdown.

use crate::lifecycle::ConfigError;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur while starting or stopping the [`OrderSystem`](crate::lifecycle::OrderSystem).
///
/// None of these occur on the request path.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The shared product client could not be built.
    #[error("Failed to build product client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),

    /// The server task panicked or was cancelled.
    #[error("Server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
