//! Cart store context shared by catalog and cart views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `CartStore` over browser storage, provides it as a
//! signal, and schedules hydration from an effect. Effects only run in the
//! browser after mount, so the server render and the first client render both
//! see an empty cart before the stored one is restored.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use cart::{CartItem, CartItemError, CartStore};
use leptos::prelude::*;

use crate::util::cart_storage::BrowserStorage;

/// Reactive handle to the application cart.
pub type CartSignal = RwSignal<CartStore<BrowserStorage>>;

/// Largest count shown verbatim on the cart badge.
pub const BADGE_MAX: u64 = 99;

/// Create the cart store and provide it to descendants.
pub fn provide_cart() -> CartSignal {
    let cart = RwSignal::new(CartStore::new(BrowserStorage));
    provide_context(cart);
    cart
}

/// The cart provided by [`provide_cart`].
pub fn use_cart() -> CartSignal {
    expect_context::<CartSignal>()
}

/// Restore the stored cart once the app has mounted.
pub fn install_cart_hydration(cart: CartSignal) {
    Effect::new(move || {
        cart.update(|store| {
            store.hydrate();
        });
    });
}

/// Validate `item` at the UI boundary, then add it.
///
/// # Errors
///
/// Returns the validation failure; the cart is left untouched.
pub fn add_to_cart(cart: CartSignal, item: CartItem) -> Result<(), CartItemError> {
    item.validate()?;
    cart.update(|store| store.add_item(item));
    Ok(())
}

/// Badge text for `count` items; `None` hides the badge.
pub fn badge_label(count: u64) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}

/// `"1 item"` / `"3 items"`.
pub fn item_count_label(count: u64) -> String {
    if count == 1 { "1 item".to_owned() } else { format!("{count} items") }
}
