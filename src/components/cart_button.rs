//! Cart Button Component
//!
//! Header button that toggles the cart drawer, with an item-count badge.

use leptos::prelude::*;

#[component]
pub fn CartButton(
    #[prop(into)] count: Signal<u64>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="relative px-3 py-2 border rounded flex items-center gap-2 bg-white shadow-sm"
            on:click=move |_| on_click.run(())
        >
            <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5 text-brand-dark" viewBox="0 0 20 20" fill="currentColor">
                <path d="M16 11V3H4v8H2v2h2a3 3 0 106 0h4a3 3 0 106 0h2v-2h-2z" />
            </svg>
            <span class="text-sm text-brand-dark">"Cart"</span>
            <Show when=move || { count.get() > 0 }>
                <span class="absolute -top-2 -right-2 bg-brand-dark text-white rounded-full text-xs px-2">
                    {move || count.get()}
                </span>
            </Show>
        </button>
    }
}
