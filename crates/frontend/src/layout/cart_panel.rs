use crate::shared::cart::use_cart;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Cart contents in a side sheet. Opened by the header's cart icon.
#[component]
pub fn CartPanel(on_close: Callback<()>) -> impl IntoView {
    let cart = use_cart();

    let clear = Callback::new(move |_: MouseEvent| cart.clear());
    let close = Callback::new(move |_: MouseEvent| on_close.run(()));

    view! {
        <ModalFrame on_close=on_close modal_class="cart-panel">
            <div class="cart-panel__header">
                <h2 class="cart-panel__title">
                    {move || format!("Your cart ({})", cart.total())}
                </h2>
                <Button variant="ghost" size="icon" aria_label="Close cart" on_click=close>
                    {icon("x")}
                </Button>
            </div>

            <Show
                when=move || cart.lines.with(|lines| !lines.is_empty())
                fallback=|| view! { <div class="cart-panel__empty">"Your cart is empty"</div> }
            >
                <ul class="cart-panel__lines">
                    <For
                        each=move || cart.lines.get()
                        key=|line| (line.product_id, line.quantity)
                        children=move |line| {
                            let product_id = line.product_id;
                            view! {
                                <li class="cart-panel__line">
                                    <span class="cart-panel__name">{line.name}</span>
                                    <span class="cart-panel__qty">{format!("× {}", line.quantity)}</span>
                                    <button
                                        class="button button--ghost button--icon"
                                        aria-label="Remove"
                                        on:click=move |_| cart.remove(product_id)
                                    >
                                        {icon("trash")}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <Button variant="outline" size="sm" on_click=clear>"Clear cart"</Button>
            </Show>
        </ModalFrame>
    }
}
