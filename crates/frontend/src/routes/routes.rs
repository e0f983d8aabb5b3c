use crate::layout::Shell;
use crate::pages::category::{CategoryRoute, HomePage};
use crate::pages::not_found::NotFound;
use crate::pages::search::SearchPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/:category") view=CategoryRoute />
                </Routes>
            </Shell>
        </Router>
    }
}
