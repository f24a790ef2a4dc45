//! Storefront Core
//!
//! Target-independent storefront logic:
//! - models: catalog entities as served by the product API
//! - pipeline: filter → sort → paginate derivation over the catalog
//! - cart / cart_store: cart bookkeeping and its persistence hook
//! - catalog: one-shot catalog fetch and its loading state

pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod pipeline;
pub mod cart;
pub mod storage;
pub mod cart_store;
pub mod catalog;

pub use config::StorefrontConfig;
pub use error::{CatalogError, StorageError};
pub use models::{Product, Rating};
pub use pipeline::{CatalogPage, CatalogQuery, SortMode, ALL_CATEGORIES};
pub use cart::{Cart, CartEntry};
pub use storage::{CartStorage, MemoryStorage};
pub use cart_store::CartStore;
pub use catalog::CatalogState;
