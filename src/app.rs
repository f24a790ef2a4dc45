//! Storefront App
//!
//! Root component: owns shop state, loads the catalog once, derives the
//! visible page and lays out header, sidebar, grid, modal and cart drawer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use storefront_core::{catalog, pipeline, StorefrontConfig};

use crate::components::{CartButton, CartDrawer, FilterSidebar, ProductGrid, ProductModal};
use crate::context::CartContext;
use crate::store::{ShopState, ShopStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::default();
    let store = Store::new(ShopState::new());
    let cart = CartContext::new(config.cart_storage_key);

    // Provide context to all children
    provide_context(config);
    provide_context(store);
    provide_context(cart);

    // Load catalog on mount; no retry
    Effect::new(move |_| {
        log::info!("[APP] Fetching catalog from {}", config.products_url);
        spawn_local(async move {
            let result = catalog::fetch_products(config.products_url).await;
            store.catalog().write().settle(result);
        });
    });

    let page = Memo::new(move |_| {
        let catalog = store.catalog().read();
        let query = store.query().read();
        pipeline::paginate(catalog.products(), &query, config.page_size)
    });
    let categories = Memo::new(move |_| pipeline::categories(store.catalog().read().products()));

    // Fall back to page 1 when a filter change shrinks the result set
    let page_count = Memo::new(move |_| page.read().page_count);
    Effect::new(move |_| {
        let count = page_count.get();
        if store.query().read_untracked().page() > count {
            store.query().write().clamp_to(count);
        }
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-brand-light to-brand text-gray-900">
            <header class="bg-white/60 backdrop-blur-sm sticky top-0 z-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                    <div class="flex items-center gap-4">
                        <h1 class="text-xl font-bold text-brand-dark">"Shopping Platform"</h1>
                        <span class="text-sm text-brand-dark/70">"Web3 Shopping Cart"</span>
                    </div>
                    <div class="flex items-center gap-4">
                        <input
                            class="rounded-md border p-2 w-64"
                            placeholder="Search products..."
                            prop:value=move || store.query().read().text().to_string()
                            on:input=move |ev| store.query().write().set_text(event_target_value(&ev))
                        />
                        <CartButton
                            count=Signal::derive(move || cart.item_count())
                            on_click=move |_| store.cart_open().update(|open| *open = !*open)
                        />
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto p-4 lg:p-6 grid lg:grid-cols-4 gap-6">
                <FilterSidebar categories=categories />
                <ProductGrid page=page />
            </main>

            {move || store.selected().get().map(|product| view! { <ProductModal product=product /> })}

            <CartDrawer />
        </div>
    }
}
