//! UI Components
//!
//! Storefront Leptos components.

mod cart_button;
mod filter_sidebar;
mod product_card;
mod product_grid;
mod pagination;
mod product_modal;
mod cart_drawer;

pub use cart_button::CartButton;
pub use filter_sidebar::FilterSidebar;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use pagination::Pagination;
pub use product_modal::ProductModal;
pub use cart_drawer::CartDrawer;
