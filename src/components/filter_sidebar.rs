//! Filter Sidebar Component
//!
//! Category and sort selectors plus the about panel.

use leptos::prelude::*;
use storefront_core::SortMode;

use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn FilterSidebar(categories: Memo<Vec<String>>) -> impl IntoView {
    let store = use_shop_store();

    let on_sort = move |ev: web_sys::Event| {
        if let Some(mode) = SortMode::from_value(&event_target_value(&ev)) {
            store.query().write().set_sort(mode);
        }
    };

    view! {
        <section class="lg:col-span-1 space-y-4">
            <div class="bg-white p-4 rounded-2xl shadow-sm border border-brand-light">
                <label class="block text-sm font-medium mb-2 text-brand-dark">"Category"</label>
                <select
                    class="w-full rounded-md border p-2"
                    on:change=move |ev| store.query().write().set_category(event_target_value(&ev))
                >
                    <For
                        each=move || categories.get()
                        key=|c| c.clone()
                        children=move |c| {
                            let current = c.clone();
                            let value = c.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || store.query().read().category() == current
                                >
                                    {c}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="bg-white p-4 rounded-2xl shadow-sm border border-brand-light">
                <label class="block text-sm font-medium mb-2 text-brand-dark">"Sort"</label>
                <select class="w-full rounded-md border p-2" on:change=on_sort>
                    {SortMode::ALL.iter().map(|mode| {
                        let mode = *mode;
                        view! {
                            <option
                                value=mode.value()
                                selected=move || store.query().read().sort() == mode
                            >
                                {mode.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="bg-white p-4 rounded-2xl shadow-sm border border-brand-light">
                <h3 class="font-semibold mb-2 text-brand-dark">"About"</h3>
                <p class="text-sm text-brand-dark/70">
                    "This storefront consumes the FakeStore API. Prices are shown in INR at a fixed rate."
                </p>
            </div>
        </section>
    }
}
