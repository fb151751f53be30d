//! # Mock Product Gateway
//!
//! Utilities for testing the aggregator and the HTTP surface without a product
//! provider.
//!
//! Use [`MockProductGateway::expect_fetch`] to script what each product id
//! returns, then [`MockProductGateway::verify`] to assert every expectation was
//! consumed. Every call is recorded and available through
//! [`MockProductGateway::calls`].

use crate::clients::ProductGateway;
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A scripted response for one `fetch` call.
struct Expectation {
    product_id: ProductId,
    response: Option<Product>,
    delay: Option<Duration>,
}

/// A mock gateway with expectation tracking for fluent testing.
///
/// Expectations are matched by product id, so concurrent callers asking for
/// different products each get their own scripted answer regardless of
/// arrival order. Each expectation answers exactly one call.
///
/// # Example
/// ```ignore
/// let mock = MockProductGateway::new();
/// mock.expect_fetch("1001").return_product(Product::new("1001", "Laptop"));
/// mock.expect_fetch("2002").with_delay(Duration::from_millis(50)).return_absent();
///
/// let aggregator = OrderAggregator::new(lookup, Arc::new(mock.clone()));
/// // Use aggregator in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockProductGateway {
    expectations: Arc<Mutex<Vec<Expectation>>>,
    calls: Arc<Mutex<Vec<ProductId>>>,
}

impl MockProductGateway {
    /// Creates a new mock gateway with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch` for the given product id.
    pub fn expect_fetch(&self, product_id: impl Into<ProductId>) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            product_id: product_id.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Product ids requested so far, in call order.
    pub fn calls(&self) -> Vec<ProductId> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl ProductGateway for MockProductGateway {
    async fn fetch(&self, product_id: &ProductId) -> Option<Product> {
        self.calls.lock().unwrap().push(product_id.clone());

        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.iter()
                .position(|e| e.product_id == *product_id)
                .map(|index| exps.remove(index))
        };

        let Some(expectation) = expectation else {
            panic!("Unexpected fetch for product {}", product_id);
        };

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectationBuilder {
    product_id: ProductId,
    delay: Option<Duration>,
    expectations: Arc<Mutex<Vec<Expectation>>>,
}

impl FetchExpectationBuilder {
    /// Holds the call for `delay` before answering, simulating provider latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return the product.
    pub fn return_product(self, product: Product) {
        self.push(Some(product));
    }

    /// Sets the expectation to return no product, as after a provider failure.
    pub fn return_absent(self) {
        self.push(None);
    }

    fn push(self, response: Option<Product>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push(Expectation {
            product_id: self.product_id,
            response,
            delay: self.delay,
        });
    }
}
