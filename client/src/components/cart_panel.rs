//! Cart contents with totals and a clear action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `items`, `total`, and `item_count` from the store; never writes the
//! aggregates. Lines are keyed by id and quantity so a quantity change
//! re-renders its row.

use leptos::prelude::*;

use crate::components::cart_line::CartLine;
use crate::state::cart::{item_count_label, use_cart};
use crate::util::money::format_price;

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart = use_cart();

    let lines = move || cart.with(|store| store.items().to_vec());
    let is_empty = move || cart.with(|store| store.items().is_empty());
    let count_label = move || cart.with(|store| item_count_label(store.item_count()));
    let total = move || cart.with(|store| format_price(store.total()));
    let on_clear = move |_| cart.update(|store| store.clear());

    view! {
        <section class="cart-panel">
            <h2 class="cart-panel__title">"Your cart"</h2>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="cart-panel__empty">"Your cart is empty."</p> }
            >
                <ul class="cart-panel__lines">
                    <For
                        each=lines
                        key=|item| (item.id.clone(), item.quantity)
                        children=|item| view! { <CartLine item/> }
                    />
                </ul>
                <div class="cart-panel__summary">
                    <span class="cart-panel__count">{count_label}</span>
                    <span class="cart-panel__total">{total}</span>
                </div>
                <button class="cart-panel__clear" on:click=on_clear>"Clear cart"</button>
            </Show>
        </section>
    }
}
