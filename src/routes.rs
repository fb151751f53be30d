//! Axum router for the order endpoint.
//!
//! `build_router` is the single entry point. Middleware layers (request
//! tracing) are **not** applied here; [`OrderSystem`](crate::lifecycle::OrderSystem)
//! attaches them so tests can drive the bare router.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::aggregator::OrderAggregator;
use crate::model::{Order, OrderId};

/// Build the application router around the given aggregator.
pub fn build_router(aggregator: OrderAggregator) -> Router {
    Router::new()
        .route("/orders/:order_id", get(get_order))
        .with_state(aggregator)
}

// ---------------------------------------------------------------------------
// GET /orders/{orderId}
// ---------------------------------------------------------------------------

/// Always answers 200; a missing product is reported as `"product": null`.
pub(crate) async fn get_order(
    State(aggregator): State<OrderAggregator>,
    Path(order_id): Path<String>,
) -> Json<Order> {
    info!(%order_id, "Fetching order");
    Json(aggregator.resolve(OrderId::from(order_id)).await)
}
