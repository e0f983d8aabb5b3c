use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Товар витрины
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Href of the navigation category the product is listed under
    #[serde(rename = "categoryHref")]
    pub category_href: String,
}

// (id, name, category)
const SAMPLE_PRODUCTS: &[(u128, &str, &str)] = &[
    (0x01, "Wireless Headphones", "/electronics"),
    (0x02, "Smart Watch", "/electronics"),
    (0x03, "Bluetooth Speaker", "/electronics"),
    (0x04, "Denim Jacket", "/fashion"),
    (0x05, "Leather Sneakers", "/fashion"),
    (0x06, "Silk Scarf", "/fashion"),
    (0x07, "Ceramic Vase", "/home"),
    (0x08, "Linen Throw Pillow", "/home"),
    (0x09, "Scented Candle Set", "/home"),
    (0x0a, "Portable Charger", "/sale"),
    (0x0b, "Wool Beanie", "/sale"),
];

/// Static demo catalog.
pub fn sample_catalog() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|(id, name, category)| Product {
            id: Uuid::from_u128(*id),
            name: name.to_string(),
            category_href: category.to_string(),
        })
        .collect()
}

/// Products of one category. `/` lists the whole catalog.
pub fn products_in_category(catalog: &[Product], category_href: &str) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| category_href == "/" || p.category_href == category_href)
        .cloned()
        .collect()
}

/// Case-insensitive substring search by product name. Blank query yields nothing.
pub fn search_products(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_ids_are_stable() {
        let a = sample_catalog();
        let b = sample_catalog();
        assert_eq!(a, b);
        assert_eq!(a[0].id, Uuid::from_u128(1));
    }

    #[test]
    fn test_products_in_category() {
        let catalog = sample_catalog();
        let fashion = products_in_category(&catalog, "/fashion");
        assert_eq!(fashion.len(), 3);
        assert!(fashion.iter().all(|p| p.category_href == "/fashion"));
        assert_eq!(products_in_category(&catalog, "/").len(), catalog.len());
        assert!(products_in_category(&catalog, "/nowhere").is_empty());
    }

    #[test]
    fn test_search_products() {
        let catalog = sample_catalog();
        let found = search_products(&catalog, "  WATCH ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Smart Watch");

        assert!(search_products(&catalog, "s").len() > 1);
        assert!(search_products(&catalog, "").is_empty());
        assert!(search_products(&catalog, "   ").is_empty());
        assert!(search_products(&catalog, "spaceship").is_empty());
    }
}
