//! # Order Aggregator
//!
//! > **Orders enriched with product details from an external product service.**
//!
//! The service exposes one endpoint, `GET /orders/{orderId}`. For each request it
//! derives the product that belongs to the order, asks the product provider for
//! it, and answers with `{ "orderId": ..., "product": ... }`.
//!
//! ## 🏗️ Design Notes
//!
//! ### Fail-Soft Product Lookup
//! The product provider is treated as untrusted and possibly unavailable. Any
//! failure to fetch the product (connection refused, timeout, 404, 5xx,
//! malformed body) is logged with its cause and reported as `"product": null`.
//! The endpoint itself always answers `200`.
//!
//! ### Pluggable Order → Product Mapping
//! There is no order store yet: every order maps to product `1001` through
//! [`FixedProductLookup`](aggregator::FixedProductLookup). The mapping sits behind
//! the [`ProductLookup`](aggregator::ProductLookup) trait so a data-backed lookup
//! can replace it without touching the aggregation logic.
//!
//! ### Concurrency Model
//! Each request runs its own resolve → fetch → compose chain on the Tokio
//! runtime. Nothing mutable is shared between requests; the only shared
//! resource is the product client's connection pool.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`aggregator`])
//! - **Key items**: [`OrderAggregator`](aggregator::OrderAggregator), [`ProductLookup`](aggregator::ProductLookup).
//!
//! ### 2. The Outbound Side ([`clients`])
//! - **Role**: Talks to the product provider and turns failures into absence.
//! - **Key items**: [`ProductGateway`](clients::ProductGateway), [`HttpProductClient`](clients::HttpProductClient),
//!   [`MockProductGateway`](clients::mock::MockProductGateway) for tests.
//!
//! ### 3. The Inbound Side ([`routes`])
//! - **Role**: Routes `GET /orders/{orderId}` to the aggregator.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Configuration, wiring, tracing setup, server start and graceful shutdown.
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem), [`AppConfig`](lifecycle::AppConfig).
//!
//! ### 5. The Data ([`model`])
//! - **Key items**: [`Order`](model::Order), [`Product`](model::Product).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! PRODUCT_SERVICE_BASE_URL=http://localhost:9090 RUST_LOG=info cargo run
//! curl http://127.0.0.1:8080/orders/123
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod aggregator;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod routes;
