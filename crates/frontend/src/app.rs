use crate::routes::routes::AppRoutes;
use crate::shared::cart::CartContext;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Storefront config (brand, navigation) for the whole tree
    provide_context(load_config());

    // Cart state shared by the header, pages and the cart panel
    provide_context(CartContext::new());

    view! {
        <AppRoutes />
    }
}
