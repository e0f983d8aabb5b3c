pub mod cart_panel;
pub mod header;
pub mod search_modal;

use cart_panel::CartPanel;
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |              page content                 |
/// +------------------------------------------+
/// ```
///
/// Owns the cart panel visibility; the header only reports cart icon clicks.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let cart_open = RwSignal::new(false);

    let on_cart_click = Callback::new(move |_: ()| {
        log::debug!("cart panel opened");
        cart_open.set(true);
    });

    let close_cart = Callback::new(move |_: ()| {
        cart_open.set(false);
    });

    view! {
        <div class="app-layout">
            <Header on_cart_click=on_cart_click />

            <main class="app-main">
                {children()}
            </main>

            <Show when=move || cart_open.get()>
                <CartPanel on_close=close_cart />
            </Show>
        </div>
    }
}
