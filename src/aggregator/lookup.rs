//! Order → product derivation.

use crate::model::{OrderId, ProductId};
use async_trait::async_trait;

/// Product every order resolves to under [`FixedProductLookup::default`].
pub const DEFAULT_PRODUCT_ID: &str = "1001";

/// Finds the product an order refers to.
///
/// `None` means the order has no product mapping; the aggregator then answers
/// with an absent product and does not call the provider.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn product_for(&self, order_id: &OrderId) -> Option<ProductId>;
}

/// Maps every order to the same product.
///
/// There is no order store yet, so this stands in for a real lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedProductLookup {
    product_id: ProductId,
}

impl FixedProductLookup {
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

impl Default for FixedProductLookup {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_ID)
    }
}

#[async_trait]
impl ProductLookup for FixedProductLookup {
    async fn product_for(&self, _order_id: &OrderId) -> Option<ProductId> {
        Some(self.product_id.clone())
    }
}
