//! Catalog Loader
//!
//! One GET of the product collection, no retry and no timeout.

use crate::error::CatalogError;
use crate::models::Product;

/// Fetch and decode the product list
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, CatalogError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Http { status: status.as_u16() });
    }
    let body = response.bytes().await?;
    parse_products(&body)
}

/// Decode a product list body
pub fn parse_products(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

/// Loading → Ready | Failed; never returns to Loading
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    /// Human-readable failure, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Loaded products; empty while loading or after a failure
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            _ => &[],
        }
    }

    /// Record the fetch outcome. Ignored once already settled.
    pub fn settle(&mut self, result: Result<Vec<Product>, CatalogError>) {
        if !self.is_loading() {
            return;
        }
        *self = match result {
            Ok(products) => {
                log::info!("[CATALOG] Loaded {} products", products.len());
                CatalogState::Ready(products)
            }
            Err(e) => {
                log::error!("[CATALOG] {:?}", e);
                CatalogState::Failed(e.to_string())
            }
        };
    }
}
