//! Pagination Component

use leptos::prelude::*;
use storefront_core::CatalogPage;

use crate::store::{use_shop_store, ShopStateStoreFields};

/// "Page X of Y" with clamped Prev / Next
#[component]
pub fn Pagination(page: Memo<CatalogPage>) -> impl IntoView {
    let store = use_shop_store();

    view! {
        <nav class="mt-6 flex items-center justify-between">
            <div class="text-sm text-brand-dark/70">
                {move || {
                    let page = page.read();
                    format!("Page {} of {}", page.page, page.page_count)
                }}
            </div>
            <div class="flex items-center gap-2">
                <button
                    class="px-3 py-1 border rounded"
                    on:click=move |_| store.query().write().prev_page()
                >
                    "Prev"
                </button>
                <button
                    class="px-3 py-1 border rounded"
                    on:click=move |_| {
                        let count = page.read_untracked().page_count;
                        store.query().write().next_page(count);
                    }
                >
                    "Next"
                </button>
            </div>
        </nav>
    }
}
