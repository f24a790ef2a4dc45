//! Cart
//!
//! Product id → (product, quantity) bookkeeping. Quantities are always ≥ 1;
//! an entry driven to zero or below is removed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::Product;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub qty: u32,
}

impl CartEntry {
    /// Line price in USD
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}

/// Persisted line shape; quantity is signed so bad blobs can be filtered
/// entry by entry instead of failing the whole cart.
#[derive(Deserialize)]
struct StoredEntry {
    product: Product,
    qty: i64,
}

/// Shopping cart, iterated in ascending product id order
///
/// Serializes as a JSON object keyed by the product id string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<u32, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` of a product, incrementing an existing line.
    /// Returns false (and does nothing) for `qty == 0`.
    pub fn add(&mut self, product: &Product, qty: u32) -> bool {
        if qty == 0 {
            return false;
        }
        self.entries
            .entry(product.id)
            .and_modify(|entry| entry.qty = entry.qty.saturating_add(qty))
            .or_insert_with(|| CartEntry { product: product.clone(), qty });
        true
    }

    /// Set a line's quantity exactly; `qty <= 0` removes the line.
    /// Returns false when `id` is not in the cart.
    pub fn update_qty(&mut self, id: u32, qty: i64) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if qty <= 0 {
            self.entries.remove(&id);
        } else {
            entry.qty = u32::try_from(qty).unwrap_or(u32::MAX);
        }
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: u32) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities
    pub fn item_count(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.qty)).sum()
    }

    /// Sum of price × quantity, in USD
    pub fn total(&self) -> f64 {
        self.entries.values().map(CartEntry::subtotal).sum()
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted cart. Lines with a non-positive quantity are dropped;
    /// lines are keyed by their product id.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let stored: BTreeMap<String, StoredEntry> = serde_json::from_str(raw)?;
        let entries = stored
            .into_values()
            .filter(|e| e.qty > 0)
            .map(|e| {
                let qty = u32::try_from(e.qty).unwrap_or(u32::MAX);
                (e.product.id, CartEntry { product: e.product, qty })
            })
            .collect();
        Ok(Self { entries })
    }

    /// Best-effort hydration: missing or unreadable data is an empty cart
    pub fn hydrate(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };
        match Self::from_json(raw) {
            Ok(cart) => cart,
            Err(e) => {
                log::warn!("[CART] Discarding unreadable stored cart: {}", e);
                Self::new()
            }
        }
    }
}
