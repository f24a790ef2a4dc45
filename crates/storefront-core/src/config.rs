//! Storefront Constants
//!
//! Fixed settings. There is no runtime configuration surface; the UI reads
//! these through a `StorefrontConfig` placed in context.

/// Product listing endpoint
pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// localStorage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "shopping_cart_v1";

/// Products shown per catalog page
pub const PAGE_SIZE: usize = 12;

/// Static USD → INR multiplier used for display prices
pub const INR_PER_USD: f64 = 83.0;

/// Log records retained by the in-page ring buffer
pub const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorefrontConfig {
    pub products_url: &'static str,
    pub cart_storage_key: &'static str,
    pub page_size: usize,
    pub inr_per_usd: f64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            products_url: PRODUCTS_URL,
            cart_storage_key: CART_STORAGE_KEY,
            page_size: PAGE_SIZE,
            inr_per_usd: INR_PER_USD,
        }
    }
}
