use crate::shared::cart::use_cart;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::catalog::Product;
use leptos::prelude::*;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let name = product.name.clone();
    let add = Callback::new(move |_: leptos::ev::MouseEvent| cart.add(&product));

    view! {
        <div class="product-card">
            <div class="product-card__name">{name}</div>
            <Button variant="outline" size="sm" on_click=add>
                {icon("plus")}
                "Add to cart"
            </Button>
        </div>
    }
}

/// Grid of product cards with an empty-state message.
#[component]
pub fn ProductGrid(products: Vec<Product>, #[prop(into)] empty_text: String) -> impl IntoView {
    if products.is_empty() {
        return view! { <div class="product-grid__empty">{empty_text}</div> }.into_any();
    }

    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect_view()}
        </div>
    }
    .into_any()
}
