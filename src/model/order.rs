/// The aggregate returned by `GET /orders/{orderId}`.
///
/// An order is built per request and never stored. `product` is either the
/// full record returned by the provider or `None`; there is no partial state.
use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. Opaque; any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub product: Option<Product>,
}

impl Order {
    /// Creates a new Order.
    ///
    /// # Arguments
    /// * `order_id` - The identifier exactly as the caller supplied it
    /// * `product` - The provider's product record, or `None` if it could not be fetched
    pub fn new(order_id: OrderId, product: Option<Product>) -> Self {
        Self { order_id, product }
    }
}
