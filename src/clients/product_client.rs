//! # Product Client
//!
//! HTTP implementation of [`ProductGateway`] against the product provider's
//! `GET {base_url}/api/products/{id}` endpoint.
//!
//! One client is built at startup and shared by every request. The inner
//! `reqwest::Client` pools connections and is safe to call concurrently.
use crate::clients::{ProductFetchError, ProductGateway};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Client for the external product provider.
#[derive(Clone)]
pub struct HttpProductClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductClient {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base_url}/api/products/{id}`, with the id percent-encoded as a single
    /// path segment.
    pub fn product_url(&self, product_id: &ProductId) -> Url {
        let mut url = self.base_url.clone();
        // Only cannot-be-a-base URLs (e.g. `mailto:`) refuse segments; config rejects those
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "products", product_id.as_str()]);
        }
        url
    }

    /// Fetch a product, reporting exactly why it failed.
    ///
    /// [`ProductGateway::fetch`] is built on top of this and discards the reason.
    pub async fn try_fetch(&self, product_id: &ProductId) -> Result<Product, ProductFetchError> {
        let url = self.product_url(product_id);
        info!(%url, "Calling external product service");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ProductFetchError::Unreachable)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProductFetchError::NotFound(product_id.clone()));
        }
        if !status.is_success() {
            return Err(ProductFetchError::Status(status));
        }

        let product = response.json::<Product>().await.map_err(|e| {
            if e.is_decode() {
                ProductFetchError::MalformedBody(e)
            } else {
                ProductFetchError::Unreachable(e)
            }
        })?;

        if product.id != *product_id {
            return Err(ProductFetchError::IdMismatch {
                requested: product_id.clone(),
                returned: product.id,
            });
        }

        debug!(?product, "Product received");
        Ok(product)
    }
}

#[async_trait]
impl ProductGateway for HttpProductClient {
    #[instrument(skip_all, fields(product_id = %product_id))]
    async fn fetch(&self, product_id: &ProductId) -> Option<Product> {
        match self.try_fetch(product_id).await {
            Ok(product) => Some(product),
            Err(e) if e.is_not_found() => {
                warn!(cause = e.kind(), error = %e, "Product not available");
                None
            }
            Err(e) => {
                error!(cause = e.kind(), error = %e, "Error calling product service");
                None
            }
        }
    }
}
