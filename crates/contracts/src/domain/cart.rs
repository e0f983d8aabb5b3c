use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::Product;

/// Строка корзины
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "productId")]
    pub product_id: Uuid,
    pub name: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            quantity,
        }
    }
}

/// Sum of quantities across all lines. Recomputed by callers on every render.
pub fn total_item_count(lines: &[CartLine]) -> u32 {
    lines.iter().fold(0, |sum, line| sum.saturating_add(line.quantity))
}

/// Adds `quantity` of `product`, merging into an existing line for the same product.
pub fn add_to_lines(lines: &mut Vec<CartLine>, product: &Product, quantity: u32) {
    match lines.iter_mut().find(|line| line.product_id == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(quantity),
        None => lines.push(CartLine::for_product(product, quantity)),
    }
}

/// Removes the line for `product_id`. Returns whether a line was removed.
pub fn remove_from_lines(lines: &mut Vec<CartLine>, product_id: Uuid) -> bool {
    let before = lines.len();
    lines.retain(|line| line.product_id != product_id);
    lines.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: u32) -> CartLine {
        CartLine {
            product_id: Uuid::new_v4(),
            name: format!("item x{}", quantity),
            quantity,
        }
    }

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category_href: "/sale".to_string(),
        }
    }

    #[test]
    fn test_total_item_count() {
        assert_eq!(total_item_count(&[]), 0);
        assert_eq!(total_item_count(&[line(2), line(3)]), 5);
        assert_eq!(total_item_count(&[line(0), line(0)]), 0);
        assert_eq!(total_item_count(&[line(1), line(0), line(41)]), 42);
    }

    #[test]
    fn test_add_merges_same_product() {
        let p = product("Lamp");
        let mut lines = Vec::new();
        add_to_lines(&mut lines, &p, 1);
        add_to_lines(&mut lines, &p, 2);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].name, "Lamp");

        add_to_lines(&mut lines, &product("Chair"), 1);
        assert_eq!(lines.len(), 2);
        assert_eq!(total_item_count(&lines), 4);
    }

    #[test]
    fn test_remove_line() {
        let p = product("Lamp");
        let mut lines = vec![CartLine::for_product(&p, 2), line(1)];
        assert!(remove_from_lines(&mut lines, p.id));
        assert_eq!(lines.len(), 1);
        assert!(!remove_from_lines(&mut lines, p.id));
    }
}
