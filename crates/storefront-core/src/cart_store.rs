//! Cart Store
//!
//! Owns the cart and writes it through a `CartStorage` after every mutation.
//! Write failures are logged and swallowed; memory stays authoritative.

use crate::cart::Cart;
use crate::models::Product;
use crate::storage::CartStorage;

#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the persisted cart (best-effort) and take ownership of the storage
    pub fn hydrate(storage: S) -> Self {
        let cart = Cart::hydrate(storage.load().as_deref());
        log::debug!("[CART] Hydrated {} line(s)", cart.len());
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(&mut self, product: &Product, qty: u32) {
        if self.cart.add(product, qty) {
            self.persist();
        }
    }

    pub fn update_qty(&mut self, id: u32, qty: i64) {
        if self.cart.update_qty(id, qty) {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    fn persist(&self) {
        let result = self
            .cart
            .to_json()
            .and_then(|raw| self.storage.save(&raw));
        if let Err(e) = result {
            log::warn!("[CART] Failed to persist cart: {}", e);
        }
    }
}
