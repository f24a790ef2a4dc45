//! Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{CatalogQuery, CatalogState, Product};

/// Catalog and view state owned by the root component
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// One-shot catalog fetch result
    pub catalog: CatalogState,
    /// Search / category / sort / page
    pub query: CatalogQuery,
    /// Product shown in the detail modal
    pub selected: Option<Product>,
    /// Whether the cart drawer is slid in
    pub cart_open: bool,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}
