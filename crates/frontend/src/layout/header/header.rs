//! Header component - storefront top navigation bar.
//!
//! Contains:
//! - Brand title linking home
//! - Desktop navigation with the current route highlighted
//! - Theme switcher, search trigger, cart icon with item badge
//! - Mobile menu toggle and the stacked mobile navigation
//!
//! Local state lives in a single `HeaderState` signal; everything shown is
//! derived from it plus the cart and the current location via `render_header`.

use crate::layout::header::nav_link::NavLink;
use crate::layout::search_modal::SearchModal;
use crate::shared::cart::use_cart;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSwitcher;
use contracts::shared::header::{render_header, HeaderState};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Runs `target` once per received event, dropping the event itself.
pub fn forward_event<E: 'static>(target: Callback<()>) -> Callback<E> {
    Callback::new(move |_: E| target.run(()))
}

/// Callback applying one `HeaderState` transition.
pub fn state_callback(state: RwSignal<HeaderState>, apply: fn(&mut HeaderState)) -> Callback<()> {
    Callback::new(move |_: ()| state.update(apply))
}

#[component]
pub fn Header(
    /// Invoked with no arguments each time the cart icon is activated
    on_cart_click: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let cart = use_cart();
    let location = use_location();

    let state = RwSignal::new(HeaderState::new());

    let header_view = Memo::new(move |_| {
        let current = state.get();
        cart.lines.with(|lines| {
            location
                .pathname
                .with(|path| render_header(&config, &current, lines, path))
        })
    });

    let toggle_menu = forward_event::<MouseEvent>(state_callback(state, HeaderState::toggle_menu));

    // Any nav link closes the mobile menu; the router handles the route change
    let on_navigate = state_callback(state, HeaderState::navigate);

    let open_search = Callback::new(move |_: MouseEvent| {
        log::debug!("search opened");
        state.update(|s| s.open_search());
    });

    let close_search = state_callback(state, HeaderState::close_search);

    let cart_click = forward_event::<MouseEvent>(on_cart_click);

    let search_open = Signal::derive(move || header_view.with(|v| v.search_open));

    view! {
        <header class="header">
            <div class="header__container">
                <div class="header__bar">
                    // Brand
                    <a href="/" class="header__brand">
                        <h1 class="header__title">{move || header_view.with(|v| v.brand.clone())}</h1>
                    </a>

                    // Desktop navigation
                    <nav class="header__nav">
                        {move || {
                            header_view
                                .with(|v| v.desktop_nav.clone())
                                .into_iter()
                                .map(|link| view! { <NavLink link=link on_activate=on_navigate /> })
                                .collect_view()
                        }}
                    </nav>

                    <div class="header__actions">
                        <ThemeSwitcher />

                        <Button variant="ghost" size="icon" class="hover-scale" aria_label="Search" on_click=open_search>
                            {icon("search")}
                        </Button>

                        <Button variant="ghost" size="icon" class="header__cart hover-scale" aria_label="Cart" on_click=cart_click>
                            {icon("shopping-cart")}
                            {move || header_view.with(|v| v.cart_badge).map(|count| view! {
                                <Badge variant="destructive" class="header__cart-badge">
                                    {count.to_string()}
                                </Badge>
                            })}
                        </Button>

                        // Mobile menu toggle
                        <Button variant="ghost" size="icon" class="header__menu-toggle hover-scale" aria_label="Menu" on_click=toggle_menu>
                            {move || icon(header_view.with(|v| v.menu_glyph).icon_name())}
                        </Button>
                    </div>
                </div>

                // Mobile navigation, mounted only while the menu is open
                {move || header_view.with(|v| v.mobile_nav.clone()).map(|links| view! {
                    <nav class="header__mobile-nav">
                        <div class="header__mobile-list">
                            {links
                                .into_iter()
                                .map(|link| view! { <NavLink link=link mobile=true on_activate=on_navigate /> })
                                .collect_view()}
                        </div>
                    </nav>
                })}
            </div>
        </header>

        // Always mounted, visibility follows the flag
        <SearchModal is_open=search_open on_close=close_search />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_forward_event_runs_target_once_per_event() {
        let owner = Owner::new();
        owner.with(|| {
            let count = Arc::new(AtomicUsize::new(0));
            let counter = count.clone();
            let on_cart_click = Callback::new(move |_: ()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            let cart_click = forward_event::<u8>(on_cart_click);
            assert_eq!(count.load(Ordering::SeqCst), 0);
            cart_click.run(1);
            assert_eq!(count.load(Ordering::SeqCst), 1);
            cart_click.run(2);
            assert_eq!(count.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_navigate_callback_closes_open_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::new());
            let toggle_menu = state_callback(state, HeaderState::toggle_menu);
            let on_navigate = state_callback(state, HeaderState::navigate);

            toggle_menu.run(());
            state.update(|s| s.open_search());
            assert!(state.get_untracked().is_menu_open);

            // Desktop and mobile links share this callback
            on_navigate.run(());
            assert!(!state.get_untracked().is_menu_open);
            assert!(state.get_untracked().is_search_open);

            on_navigate.run(());
            assert!(!state.get_untracked().is_menu_open);
        });
    }

    #[test]
    fn test_close_search_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(HeaderState::new());
            let close_search = state_callback(state, HeaderState::close_search);
            close_search.run(());
            assert!(!state.get_untracked().is_search_open);
            state.update(|s| s.open_search());
            close_search.run(());
            assert!(!state.get_untracked().is_search_open);
        });
    }
}
