//! Product Modal Component
//!
//! Detail view for the selected product. Clicking the backdrop closes it.

use leptos::prelude::*;
use storefront_core::money::{format_inr, format_usd};
use storefront_core::Product;

use crate::context::use_cart;
use crate::store::{use_shop_store, ShopStateStoreFields};

/// "⭐ 3.9 (120)", or "⭐ — (0)" when unrated
fn rating_label(product: &Product) -> String {
    match product.rating {
        Some(rating) => format!("⭐ {} ({})", rating.rate, rating.count),
        None => "⭐ — (0)".to_string(),
    }
}

#[component]
pub fn ProductModal(product: Product) -> impl IntoView {
    let store = use_shop_store();
    let cart = use_cart();
    let close = move || store.selected().set(None);

    let rating = rating_label(&product);
    let to_add = product.clone();

    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-black/40 p-4"
            on:click=move |_| close()
        >
            <div
                class="bg-white rounded-2xl shadow-lg max-w-3xl w-full grid grid-cols-1 md:grid-cols-2 overflow-hidden"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="p-6 flex items-center justify-center">
                    <img src=product.image.clone() alt=product.title.clone() class="max-h-96 object-contain" />
                </div>
                <div class="p-6 flex flex-col">
                    <h3 class="text-xl font-semibold mb-2 text-brand-dark">{product.title.clone()}</h3>
                    <p class="text-sm text-brand-dark/70 mb-4">{product.category.clone()}</p>
                    <div class="flex items-center gap-4 mb-4">
                        <div class="text-2xl font-bold">{format_inr(product.price)}</div>
                        <div class="text-sm text-brand-dark/70">{format_usd(product.price)}</div>
                        <div class="ml-auto text-sm text-brand-dark">{rating}</div>
                    </div>
                    <p class="text-sm text-brand-dark/70 mb-6">{product.description().to_string()}</p>

                    <div class="mt-auto flex items-center gap-3">
                        <button
                            class="px-4 py-2 bg-brand text-white rounded-lg hover:bg-brand-dark transition"
                            on:click=move |_| {
                                cart.add(&to_add, 1);
                                close();
                            }
                        >
                            "Add to cart"
                        </button>
                        <button class="px-4 py-2 border rounded-lg" on:click=move |_| close()>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
