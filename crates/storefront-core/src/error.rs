//! Storefront Errors

use thiserror::Error;

/// Failure while loading the product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Server answered with a non-2xx status
    #[error("Failed to fetch products")]
    Http { status: u16 },
    #[error("Failed to fetch products: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to read product list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while writing the cart to client-local storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("cart encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
