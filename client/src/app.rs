//! Root application component with routing and the cart context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{cart::CartPage, catalog::CatalogPage};
use crate::state::cart::{install_cart_hydration, provide_cart};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single cart store for the app and restores the persisted cart
/// after mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = provide_cart();
    install_cart_hydration(cart);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CatalogPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
            </Routes>
        </Router>
    }
}
