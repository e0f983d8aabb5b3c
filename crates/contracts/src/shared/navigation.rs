use serde::{Deserialize, Serialize};

/// Number of entries in the storefront top navigation.
pub const NAVIGATION_LEN: usize = 5;

/// Пункт верхней навигации магазина
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display label
    pub name: String,
    /// Route path the link points to
    pub href: String,
}

impl NavigationItem {
    pub fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
        }
    }

    /// Exact path match. `/electronics/tv` does not activate `/electronics`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Default storefront navigation.
pub fn default_navigation() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("Home", "/"),
        NavigationItem::new("Electronics", "/electronics"),
        NavigationItem::new("Fashion", "/fashion"),
        NavigationItem::new("Home & Living", "/home"),
        NavigationItem::new("Sale", "/sale"),
    ]
}

/// Index of the item matching `current_path`, if any.
pub fn active_index(items: &[NavigationItem], current_path: &str) -> Option<usize> {
    items.iter().position(|item| item.is_active(current_path))
}

/// Label of the navigation entry for `href`, used for page titles.
pub fn label_for_href<'a>(items: &'a [NavigationItem], href: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.href == href)
        .map(|item| item.name.as_str())
}
