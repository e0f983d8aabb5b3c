use crate::pages::not_found::NotFound;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::product_card::ProductGrid;
use crate::shared::config::use_config;
use contracts::domain::catalog::{products_in_category, sample_catalog};
use contracts::shared::navigation::label_for_href;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Product listing for one navigation category.
#[component]
pub fn CategoryPage(#[prop(into)] href: String) -> impl IntoView {
    let config = use_config();
    let title = label_for_href(&config.navigation, &href)
        .unwrap_or(config.brand.as_str())
        .to_string();
    let products = products_in_category(&sample_catalog(), &href);

    view! {
        <PageHeader title=title />
        <ProductGrid products=products empty_text="No products in this category yet." />
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <CategoryPage href="/" /> }
}

/// `/:category` route. Paths that are not configured render the not-found page.
#[component]
pub fn CategoryRoute() -> impl IntoView {
    let config = use_config();
    let params = use_params_map();

    move || {
        let href = format!("/{}", params.with(|p| p.get("category").unwrap_or_default()));
        if label_for_href(&config.navigation, &href).is_some() {
            view! { <CategoryPage href=href /> }.into_any()
        } else {
            view! { <NotFound /> }.into_any()
        }
    }
}
