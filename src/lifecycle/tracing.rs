//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the service.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate
//! - **Spans** on `OrderAggregator::resolve` (field `order_id`) and on the
//!   product client's `fetch` (field `product_id`)
//! - **Log levels** via the `RUST_LOG` environment variable, `info` when unset
//! - **Compact format** with module paths hidden
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request flow and provider calls
//! RUST_LOG=info cargo run
//!
//! # Full product payloads as received from the provider
//! RUST_LOG=debug cargo run
//!
//! # Only the outbound client
//! RUST_LOG=order_aggregator::clients=debug cargo run
//! ```
//!
//! ## Request Trace Example
//!
//! **With `RUST_LOG=info`**, a lookup while the provider is down:
//!
//! ```text
//! INFO Fetching order order_id=123
//! INFO resolve: Requesting product for order order_id=123 product_id=1001
//! INFO resolve:fetch: Calling external product service order_id=123 product_id=1001 url=http://localhost:9090/api/products/1001
//! ERROR resolve:fetch: Error calling product service order_id=123 product_id=1001 cause="unreachable" error=...
//! ```
//!
//! The `cause` field tells "not found" apart from "unreachable" even though the
//! response body reports both as `"product": null`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .compact()
        .init();
}
