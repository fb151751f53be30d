//! Error types for the product provider client.

use crate::model::ProductId;
use thiserror::Error;

/// Why a product could not be fetched from the provider.
///
/// These never reach the order endpoint. [`HttpProductClient::fetch`](crate::clients::HttpProductClient)
/// logs the cause and collapses every variant to an absent product.
#[derive(Debug, Error)]
pub enum ProductFetchError {
    /// No response was received (connection refused, DNS failure, timeout).
    #[error("Product service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The provider answered 404 for the requested product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The provider answered with a non-success status other than 404.
    #[error("Product service returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded into a product.
    #[error("Invalid product response: {0}")]
    MalformedBody(#[source] reqwest::Error),

    /// The provider described a different product than the one requested.
    #[error("Product service returned product {returned} for {requested}")]
    IdMismatch {
        requested: ProductId,
        returned: ProductId,
    },
}

impl ProductFetchError {
    /// Short, stable label for the failure cause, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ProductFetchError::Unreachable(_) => "unreachable",
            ProductFetchError::NotFound(_) => "not_found",
            ProductFetchError::Status(_) => "status",
            ProductFetchError::MalformedBody(_) => "malformed_body",
            ProductFetchError::IdMismatch { .. } => "id_mismatch",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductFetchError::NotFound(_))
    }
}
