//! Cart Context
//!
//! The cart store shared via the Leptos Context API. Components mutate the
//! cart only through these methods; each one persists before notifying.

use leptos::prelude::*;
use storefront_core::{CartEntry, CartStore, Product};

use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<CartStore<BrowserStorage>>,
}

impl CartContext {
    /// Hydrate from localStorage under `key`
    pub fn new(key: &'static str) -> Self {
        Self {
            store: RwSignal::new(CartStore::hydrate(BrowserStorage::new(key))),
        }
    }

    pub fn add(&self, product: &Product, qty: u32) {
        self.store.update(|s| s.add(product, qty));
    }

    pub fn update_qty(&self, id: u32, qty: i64) {
        self.store.update(|s| s.update_qty(id, qty));
    }

    pub fn clear(&self) {
        self.store.update(|s| s.clear());
    }

    /// Cart lines in display order
    pub fn lines(&self) -> Vec<CartEntry> {
        self.store.with(|s| s.cart().entries().cloned().collect())
    }

    pub fn item_count(&self) -> u64 {
        self.store.with(|s| s.cart().item_count())
    }

    /// Total in USD
    pub fn total(&self) -> f64 {
        self.store.with(|s| s.cart().total())
    }
}

/// Get the cart context
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}
