//! A single cart line with quantity controls.

#[cfg(test)]
#[path = "cart_line_test.rs"]
mod cart_line_test;

use cart::CartItem;
use leptos::prelude::*;

use crate::state::cart::use_cart;
use crate::util::money::format_price;

/// Row in the cart panel. Decrementing below 1 removes the line.
#[component]
pub fn CartLine(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let quantity = i64::from(item.quantity);

    let on_decrement = {
        let id = item.id.clone();
        move |_| cart.update(|store| store.update_quantity(&id, quantity - 1))
    };
    let on_increment = {
        let id = item.id.clone();
        move |_| cart.update(|store| store.update_quantity(&id, quantity + 1))
    };
    let on_remove = {
        let id = item.id.clone();
        move |_| cart.update(|store| store.remove_item(&id))
    };

    let details = line_details(&item);
    let unit_price = format!("{} each", format_price(item.price));
    let line_total = format_price(item.line_total());

    view! {
        <li class="cart-line">
            <div class="cart-line__info">
                <span class="cart-line__name">{item.name}</span>
                <span class="cart-line__details">{details}</span>
                <span class="cart-line__unit">{unit_price}</span>
            </div>
            <div class="cart-line__quantity">
                <button on:click=on_decrement aria-label="Decrease quantity">"−"</button>
                <span class="cart-line__count">{item.quantity}</span>
                <button on:click=on_increment aria-label="Increase quantity">"+"</button>
            </div>
            <span class="cart-line__total">{line_total}</span>
            <button class="cart-line__remove" on:click=on_remove>"Remove"</button>
        </li>
    }
}

/// Secondary text for a line: category, level, and duration when present.
pub fn line_details(item: &CartItem) -> String {
    [item.category.as_deref(), item.level.as_deref(), item.duration.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}
