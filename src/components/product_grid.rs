//! Product Grid Component
//!
//! Results header, loading / error panels, the current page of cards and the
//! pagination bar. The error banner replaces the grid entirely.

use leptos::prelude::*;
use storefront_core::CatalogPage;

use crate::components::{Pagination, ProductCard};
use crate::context::use_cart;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductGrid(page: Memo<CatalogPage>) -> impl IntoView {
    let store = use_shop_store();
    let cart = use_cart();

    let loading = move || store.catalog().read().is_loading();
    let error = move || store.catalog().read().error().map(str::to_string);

    view! {
        <section class="lg:col-span-3">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-brand-dark">"Products"</h2>
                <div class="text-sm text-brand-dark/70">
                    "Showing " <strong>{move || page.read().total}</strong> " results"
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <Show when=loading>
                    <div class="col-span-full p-8 bg-white rounded-xl shadow text-center">
                        "Loading products..."
                    </div>
                </Show>
                {move || error().map(|msg| view! {
                    <div class="col-span-full p-8 bg-red-50 rounded-xl shadow text-center">
                        "Error: " {msg}
                    </div>
                })}
                <Show when=move || !loading() && error().is_none()>
                    <For
                        each=move || page.get().items
                        key=|product| product.id
                        children=move |product| {
                            let viewed = product.clone();
                            let added = product.clone();
                            view! {
                                <ProductCard
                                    product=product
                                    on_view=move |_| store.selected().set(Some(viewed.clone()))
                                    on_add=move |_| cart.add(&added, 1)
                                />
                            }
                        }
                    />
                </Show>
            </div>

            <Pagination page=page />
        </section>
    }
}
