//! Product Card Component

use leptos::prelude::*;
use storefront_core::money::{format_inr, format_usd};
use storefront_core::Product;

/// Grid card with View / Add actions
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] on_view: Callback<()>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <article class="bg-white rounded-2xl shadow-lg overflow-hidden flex flex-col border border-brand-light">
            <div class="bg-brand-light flex items-center justify-center p-4">
                <img src=product.image.clone() alt=product.title.clone() class="max-h-40 object-contain" />
            </div>
            <div class="p-4 flex-1 flex flex-col">
                <h3 class="font-medium text-sm mb-1 line-clamp-2 text-brand-dark">{product.title.clone()}</h3>
                <p class="text-xs text-brand-dark/70 mb-3 line-clamp-3">{product.category.clone()}</p>
                <div class="mt-auto flex items-center justify-between">
                    <div>
                        <div class="font-semibold text-brand-dark">{format_inr(product.price)}</div>
                        <div class="text-xs text-brand-dark/70">{format_usd(product.price)}</div>
                    </div>
                    <div class="flex gap-2">
                        <button
                            class="px-3 py-1 border rounded-lg text-sm text-brand-dark"
                            on:click=move |_| on_view.run(())
                        >
                            "View"
                        </button>
                        <button
                            class="px-3 py-1 bg-brand text-white rounded-lg text-sm hover:bg-brand-dark transition"
                            on:click=move |_| on_add.run(())
                        >
                            "Add"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}
