//! Header link to the cart with the live item count.

use leptos::prelude::*;

use crate::state::cart::{badge_label, use_cart};

#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = use_cart();
    let label = move || badge_label(cart.with(|store| store.item_count()));

    view! {
        <a class="cart-badge" href="/cart" aria-label="View cart">
            <span class="cart-badge__text">"Cart"</span>
            <Show when=move || label().is_some()>
                <span class="cart-badge__count">{move || label().unwrap_or_default()}</span>
            </Show>
        </a>
    }
}
