//! Cart state provider.
//!
//! Holds the cart lines in a signal shared through context. The header only
//! reads the lines; pages and the cart panel mutate them.

use contracts::domain::cart::{add_to_lines, remove_from_lines, total_item_count, CartLine};
use contracts::domain::catalog::Product;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct CartContext {
    pub lines: RwSignal<Vec<CartLine>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            lines: RwSignal::new(vec![]),
        }
    }

    pub fn add(&self, product: &Product) {
        log::debug!("cart add: {}", product.name);
        self.lines.update(|lines| add_to_lines(lines, product, 1));
    }

    pub fn remove(&self, product_id: Uuid) {
        self.lines.update(|lines| {
            if remove_from_lines(lines, product_id) {
                log::debug!("cart remove: {}", product_id);
            }
        });
    }

    pub fn clear(&self) {
        self.lines.set(vec![]);
    }

    pub fn total(&self) -> u32 {
        self.lines.with(|lines| total_item_count(lines))
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found")
}
