use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageHeader title="Page not found" subtitle="The page you are looking for does not exist." />
        <a href="/" class="button button--primary">"Back to shop"</a>
    }
}
