use crate::shared::icons::icon;
use crate::shared::modal_frame::is_direct_event;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

/// Query string of the search results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub q: String,
}

/// Href of the results page for `query`. Blank queries go nowhere.
pub fn search_href(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        return None;
    }
    let query_string = serde_qs::to_string(&SearchQuery { q: q.to_string() }).ok()?;
    Some(format!("/search?{}", query_string))
}

/// Query text from a location search string (with or without the leading `?`).
/// Missing or malformed queries read as empty.
pub fn parse_search_query(search: &str) -> String {
    serde_qs::from_str::<SearchQuery>(search.trim_start_matches('?'))
        .map(|query| query.q)
        .unwrap_or_default()
}

/// The overlay stays in the tree; a closed overlay carries `hidden`.
pub fn overlay_hidden(is_open: bool) -> bool {
    !is_open
}

/// Search overlay.
///
/// Stays mounted; `is_open` only toggles its visibility. Closes on Escape,
/// on overlay click, on the close button and after a submitted search.
#[component]
pub fn SearchModal(
    #[prop(into)]
    is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let navigate = use_navigate();

    let escape = window_event_listener(ev::keydown, move |ev| {
        if is_open.get_untracked() && ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    // Focus the input once the overlay becomes visible
    Effect::new(move |_| {
        if is_open.get() {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&query.get_untracked()) {
            log::debug!("search submit: {}", href);
            navigate(&href, Default::default());
            query.set(String::new());
            on_close.run(());
        }
    };

    let on_overlay_click = move |ev: ev::MouseEvent| {
        if is_direct_event(&ev) {
            on_close.run(());
        }
    };

    view! {
        <div
            class="search-overlay"
            class:search-overlay--open=move || is_open.get()
            hidden=move || overlay_hidden(is_open.get())
            aria-hidden=move || overlay_hidden(is_open.get()).to_string()
            on:click=on_overlay_click
        >
            <div class="search-modal" role="dialog" aria-label="Search products">
                <form class="search-modal__form" on:submit=on_submit>
                    {icon("search")}
                    <input
                        node_ref=input_ref
                        class="search-modal__input"
                        type="search"
                        placeholder="Search products..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="button button--ghost button--icon"
                        aria-label="Close search"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </form>
            </div>
        </div>
    }
}
