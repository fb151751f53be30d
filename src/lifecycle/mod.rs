//! # System Lifecycle & Orchestration
//!
//! This module owns everything around the order-aggregation path: loading
//! configuration, wiring the product client into the aggregator, running the
//! HTTP server and shutting it down.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`AppConfig`] from environment variables
//! 2. **Dependency Wiring** - one shared [`HttpProductClient`](crate::clients::HttpProductClient) per process
//! 3. **Lifecycle Management** - [`OrderSystem::start`] and [`OrderSystem::shutdown`]
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Signal** - `shutdown()` fires a oneshot channel watched by the server
//! 2. **Drain** - axum stops accepting connections and finishes in-flight requests
//! 3. **Await completion** - the server task is joined and its result reported

pub mod config;
pub mod error;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use order_system::*;
pub use self::tracing::setup_tracing;
