//! Cart review page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cart_panel::CartPanel;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <Title text="Your cart"/>
        <header class="page-header">
            <a class="page-header__back" href="/">"← Continue browsing"</a>
        </header>
        <main class="cart-page">
            <CartPanel/>
        </main>
    }
}
