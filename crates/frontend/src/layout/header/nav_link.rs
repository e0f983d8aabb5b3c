use contracts::shared::header::NavLinkView;
use leptos::prelude::*;

pub fn nav_link_class(active: bool, mobile: bool) -> &'static str {
    match (mobile, active) {
        (false, true) => "header__nav-link header__nav-link--active",
        (false, false) => "header__nav-link",
        (true, true) => "header__mobile-link header__mobile-link--active",
        (true, false) => "header__mobile-link",
    }
}

/// Route link of the header navigation.
///
/// Rendered as a plain anchor: the router intercepts the click and performs
/// the client-side transition, `on_activate` only updates header state.
#[component]
pub fn NavLink(
    link: NavLinkView,
    /// Render for the stacked mobile list
    #[prop(optional)]
    mobile: bool,
    on_activate: Callback<()>,
) -> impl IntoView {
    let class = nav_link_class(link.active, mobile);
    let aria_current = link.active.then_some("page");

    view! {
        <a
            href=link.href
            class=class
            aria-current=aria_current
            on:click=move |_| on_activate.run(())
        >
            {link.name}
        </a>
    }
}
