//! # Order Aggregator
//!
//! Builds an [`Order`] for an order id by deriving its product through a
//! [`ProductLookup`] and fetching that product through a [`ProductGateway`].
//!
//! ## Structure
//!
//! - [`lookup`] - [`ProductLookup`] and the [`FixedProductLookup`] placeholder mapping
//! - [`OrderAggregator`] - the resolve → fetch → compose chain
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use order_aggregator::aggregator::{FixedProductLookup, OrderAggregator};
//! use order_aggregator::clients::mock::MockProductGateway;
//! use order_aggregator::model::{OrderId, Product};
//!
//! #[tokio::main]
//! async fn main() {
//!     let gateway = MockProductGateway::new();
//!     gateway.expect_fetch("1001").return_product(Product::new("1001", "Laptop"));
//!
//!     let aggregator = OrderAggregator::new(
//!         Arc::new(FixedProductLookup::default()),
//!         Arc::new(gateway.clone()),
//!     );
//!
//!     let order = aggregator.resolve(OrderId::from("123")).await;
//!     assert_eq!(order.product.unwrap().name.as_deref(), Some("Laptop"));
//! }
//! ```
//!
//! The aggregator never fails: a provider outage yields an order whose
//! `product` is `None`.

pub mod lookup;

pub use lookup::*;

use crate::clients::ProductGateway;
use crate::model::{Order, OrderId};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Stateless order enrichment. Cloning shares the same lookup and gateway.
#[derive(Clone)]
pub struct OrderAggregator {
    lookup: Arc<dyn ProductLookup>,
    gateway: Arc<dyn ProductGateway>,
}

impl OrderAggregator {
    pub fn new(lookup: Arc<dyn ProductLookup>, gateway: Arc<dyn ProductGateway>) -> Self {
        Self { lookup, gateway }
    }

    /// Aggregator using the [`FixedProductLookup`] mapping.
    pub fn with_fixed_lookup(gateway: Arc<dyn ProductGateway>) -> Self {
        Self::new(Arc::new(FixedProductLookup::default()), gateway)
    }

    /// Resolves an order and its product.
    ///
    /// The returned order always carries `order_id` unchanged. The gateway is
    /// called at most once, and `product` is exactly what it returned.
    #[instrument(skip_all, fields(order_id = %order_id))]
    pub async fn resolve(&self, order_id: OrderId) -> Order {
        let Some(product_id) = self.lookup.product_for(&order_id).await else {
            warn!("No product mapped to order");
            return Order::new(order_id, None);
        };

        info!(%product_id, "Requesting product for order");
        let product = self.gateway.fetch(&product_id).await;
        debug!(found = product.is_some(), "Product lookup finished");

        Order::new(order_id, product)
    }
}
