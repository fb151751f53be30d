use crate::model::{Product, ProductId};
use async_trait::async_trait;

/// Source of product records for the order aggregator.
///
/// Implementations are fail-soft: any failure to obtain the product is reported
/// as `None`, never as an error. Callers treat "present" and "absent" as the
/// only two outcomes.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use order_aggregator::clients::ProductGateway;
/// use order_aggregator::model::{Product, ProductId};
///
/// struct Catalog;
///
/// #[async_trait]
/// impl ProductGateway for Catalog {
///     async fn fetch(&self, product_id: &ProductId) -> Option<Product> {
///         (product_id.as_str() == "1001").then(|| Product::new("1001", "Laptop"))
///     }
/// }
/// ```
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetch a product by ID, or `None` if it could not be obtained for any reason.
    async fn fetch(&self, product_id: &ProductId) -> Option<Product>;
}
