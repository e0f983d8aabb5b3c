use crate::layout::search_modal::parse_search_query;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::product_card::ProductGrid;
use contracts::domain::catalog::{sample_catalog, search_products};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn SearchPage() -> impl IntoView {
    let location = use_location();
    let catalog = sample_catalog();

    move || {
        let q = location.search.with(|search| parse_search_query(search));
        let results = search_products(&catalog, &q);
        view! {
            <PageHeader title=format!("Search results for \"{}\"", q) subtitle=format!("{} found", results.len()) />
            <ProductGrid products=results empty_text="Nothing matched your search." />
        }
    }
}
