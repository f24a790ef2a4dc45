//! Cart Drawer Component
//!
//! Slide-in panel listing cart lines with quantity steppers and totals.

use leptos::prelude::*;
use storefront_core::money::{format_inr, format_usd};
use storefront_core::CartEntry;

use crate::context::use_cart;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
fn CartLine(entry: CartEntry) -> impl IntoView {
    let cart = use_cart();
    let id = entry.product.id;
    let qty = i64::from(entry.qty);

    view! {
        <div class="flex items-center gap-3">
            <img
                src=entry.product.image.clone()
                alt=entry.product.title.clone()
                class="h-16 w-16 object-contain bg-brand-light p-2 rounded"
            />
            <div class="flex-1">
                <div class="font-medium text-sm text-brand-dark">{entry.product.title.clone()}</div>
                <div class="text-xs text-brand-dark/70">{format_usd(entry.product.price)}</div>
                <div class="mt-2 flex items-center gap-2">
                    <button class="px-2 py-1 border rounded" on:click=move |_| cart.update_qty(id, qty - 1)>
                        "-"
                    </button>
                    <div class="px-2">{entry.qty}</div>
                    <button class="px-2 py-1 border rounded" on:click=move |_| cart.update_qty(id, qty + 1)>
                        "+"
                    </button>
                </div>
            </div>
            <div class="text-sm font-semibold text-brand-dark">{format_inr(entry.subtotal())}</div>
        </div>
    }
}

#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = use_shop_store();
    let cart = use_cart();

    let panel_class = move || {
        if store.cart_open().get() {
            "fixed right-0 top-0 h-full w-full sm:w-96 transform translate-x-0 transition-transform duration-300 z-50"
        } else {
            "fixed right-0 top-0 h-full w-full sm:w-96 transform translate-x-full transition-transform duration-300 z-50"
        }
    };
    let total = move || format_inr(cart.total());

    view! {
        <aside id="cart-panel" class=panel_class>
            <div class="h-full flex flex-col bg-white shadow-xl">
                <div class="p-4 border-b flex items-center justify-between">
                    <h3 class="font-semibold text-brand-dark">"Your Cart"</h3>
                    <div class="flex items-center gap-2">
                        <div class="text-sm text-brand-dark/70">"Total: " {total}</div>
                        <button class="px-2 py-1 border rounded" on:click=move |_| store.cart_open().set(false)>
                            "Close"
                        </button>
                    </div>
                </div>

                <div class="p-4 flex-1 overflow-y-auto space-y-4">
                    <Show when=move || cart.item_count() == 0>
                        <div class="text-sm text-brand-dark/70">"Cart is empty"</div>
                    </Show>
                    // Keyed by (id, qty) so a quantity change re-renders the line
                    <For
                        each=move || cart.lines()
                        key=|entry| (entry.product.id, entry.qty)
                        children=move |entry| view! { <CartLine entry=entry /> }
                    />
                </div>

                <div class="p-4 border-t">
                    <div class="flex items-center justify-between mb-3">
                        <div class="font-medium text-brand-dark">"Total"</div>
                        <div class="font-bold text-brand-dark">{total}</div>
                    </div>
                    <div class="flex gap-2">
                        <button class="px-4 py-2 border rounded-lg" on:click=move |_| cart.clear()>
                            "Clear"
                        </button>
                    </div>
                </div>
            </div>
        </aside>
    }
}
