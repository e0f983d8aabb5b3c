//! View-state and render projection of the storefront header.
//!
//! The header owns two independent flags (mobile menu, search overlay) and
//! derives everything else from ambient state on every render: the cart
//! badge from the cart lines and link highlighting from the current path.

use crate::domain::cart::{total_item_count, CartLine};
use crate::shared::config::StorefrontConfig;
use crate::shared::navigation::{active_index, NavigationItem};

/// Local UI state of the header. Both flags start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub is_menu_open: bool,
    pub is_search_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// A navigation link was activated.
    pub fn navigate(&mut self) {
        self.close_menu();
    }

    pub fn open_search(&mut self) {
        self.is_search_open = true;
    }

    pub fn close_search(&mut self) {
        self.is_search_open = false;
    }

    pub fn menu_glyph(&self) -> MenuGlyph {
        if self.is_menu_open {
            MenuGlyph::Close
        } else {
            MenuGlyph::Open
        }
    }
}

/// Glyph of the mobile menu toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGlyph {
    /// Hamburger, menu is closed
    Open,
    /// Cross, menu is open
    Close,
}

impl MenuGlyph {
    pub fn icon_name(&self) -> &'static str {
        match self {
            MenuGlyph::Open => "menu",
            MenuGlyph::Close => "x",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Everything the header shows for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub brand: String,
    pub desktop_nav: Vec<NavLinkView>,
    /// Present only while the mobile menu is open
    pub mobile_nav: Option<Vec<NavLinkView>>,
    /// Present only when the cart holds at least one item
    pub cart_badge: Option<u32>,
    pub menu_glyph: MenuGlyph,
    pub search_open: bool,
}

/// Links with at most one marked active: the first whose href equals `current_path`.
pub fn nav_links(items: &[NavigationItem], current_path: &str) -> Vec<NavLinkView> {
    let active = active_index(items, current_path);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| NavLinkView {
            name: item.name.clone(),
            href: item.href.clone(),
            active: active == Some(i),
        })
        .collect()
}

/// Badge value for the cart icon. No capping of large counts.
pub fn cart_badge(lines: &[CartLine]) -> Option<u32> {
    match total_item_count(lines) {
        0 => None,
        total => Some(total),
    }
}

pub fn render_header(
    config: &StorefrontConfig,
    state: &HeaderState,
    cart: &[CartLine],
    current_path: &str,
) -> HeaderView {
    let links = nav_links(&config.navigation, current_path);
    let mobile_nav = state.is_menu_open.then(|| links.clone());

    HeaderView {
        brand: config.brand.clone(),
        desktop_nav: links,
        mobile_nav,
        cart_badge: cart_badge(cart),
        menu_glyph: state.menu_glyph(),
        search_open: state.is_search_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn cart(quantities: &[u32]) -> Vec<CartLine> {
        quantities
            .iter()
            .map(|q| CartLine {
                product_id: Uuid::new_v4(),
                name: "item".to_string(),
                quantity: *q,
            })
            .collect()
    }

    fn active_names(links: &[NavLinkView]) -> Vec<&str> {
        links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.name.as_str())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = HeaderState::new();
        assert!(!state.is_menu_open);
        assert!(!state.is_search_open);
        assert_eq!(state.menu_glyph(), MenuGlyph::Open);
    }

    #[test]
    fn test_badge_and_active_link() {
        let config = StorefrontConfig::default();
        let view = render_header(&config, &HeaderState::new(), &cart(&[2, 3]), "/electronics");

        assert_eq!(view.cart_badge, Some(5));
        assert_eq!(active_names(&view.desktop_nav), vec!["Electronics"]);
        assert_eq!(view.desktop_nav.len(), 5);
        assert_eq!(view.brand, "Jumehira Stores");
    }

    #[test]
    fn test_empty_cart_has_no_badge() {
        let config = StorefrontConfig::default();
        for path in ["/", "/sale", "/nowhere"] {
            let view = render_header(&config, &HeaderState::new(), &[], path);
            assert_eq!(view.cart_badge, None);
        }
        let view = render_header(&config, &HeaderState::new(), &cart(&[0, 0]), "/");
        assert_eq!(view.cart_badge, None);
    }

    #[test]
    fn test_large_count_is_not_capped() {
        assert_eq!(cart_badge(&cart(&[99, 1, 250])), Some(350));
    }

    #[test]
    fn test_unmatched_route_has_no_active_link() {
        let config = StorefrontConfig::default();
        let view = render_header(&config, &HeaderState::new(), &[], "/search");
        assert!(active_names(&view.desktop_nav).is_empty());

        let view = render_header(&config, &HeaderState::new(), &[], "/home/kitchen");
        assert!(active_names(&view.desktop_nav).is_empty());
    }

    #[test]
    fn test_single_active_link_with_duplicate_hrefs() {
        let items = vec![
            NavigationItem::new("Deals", "/sale"),
            NavigationItem::new("Sale", "/sale"),
        ];
        let links = nav_links(&items, "/sale");
        assert_eq!(active_names(&links), vec!["Deals"]);
        assert!(active_names(&nav_links(&items, "/")).is_empty());
    }

    #[test]
    fn test_home_links_are_distinct() {
        let config = StorefrontConfig::default();
        let view = render_header(&config, &HeaderState::new(), &[], "/home");
        assert_eq!(active_names(&view.desktop_nav), vec!["Home & Living"]);
        let view = render_header(&config, &HeaderState::new(), &[], "/");
        assert_eq!(active_names(&view.desktop_nav), vec!["Home"]);
    }

    #[test]
    fn test_double_toggle_restores_menu() {
        let mut state = HeaderState::new();
        state.toggle_menu();
        assert!(state.is_menu_open);
        assert_eq!(state.menu_glyph(), MenuGlyph::Close);
        state.toggle_menu();
        assert_eq!(state, HeaderState::new());
    }

    #[test]
    fn test_search_open_close() {
        let mut state = HeaderState::new();
        state.close_search();
        assert!(!state.is_search_open);
        state.open_search();
        state.open_search();
        assert!(state.is_search_open);
        state.close_search();
        assert!(!state.is_search_open);
    }

    #[test]
    fn test_menu_and_search_are_independent() {
        let mut state = HeaderState::new();
        state.toggle_menu();
        state.open_search();
        assert!(state.is_menu_open && state.is_search_open);
        state.close_search();
        assert!(state.is_menu_open);
        state.navigate();
        state.open_search();
        assert!(!state.is_menu_open && state.is_search_open);
    }

    #[test]
    fn test_mobile_menu_navigation_scenario() {
        let config = StorefrontConfig::default();
        let mut state = HeaderState::new();

        let view = render_header(&config, &state, &[], "/");
        assert!(view.mobile_nav.is_none());

        state.toggle_menu();
        let view = render_header(&config, &state, &[], "/");
        let mobile = view.mobile_nav.expect("mobile nav shown");
        assert_eq!(mobile.len(), 5);
        assert_eq!(mobile, view.desktop_nav);

        // User taps "Sale"; the router then reports the new path
        let sale = mobile.iter().find(|l| l.name == "Sale").unwrap();
        state.navigate();
        let view = render_header(&config, &state, &[], &sale.href);
        assert!(view.mobile_nav.is_none());
        assert_eq!(view.menu_glyph, MenuGlyph::Open);
        assert_eq!(active_names(&view.desktop_nav), vec!["Sale"]);
    }

    #[test]
    fn test_navigate_when_menu_closed_keeps_it_closed() {
        let mut state = HeaderState::new();
        state.navigate();
        assert!(!state.is_menu_open);
    }

    #[test]
    fn test_glyph_icon_names() {
        assert_eq!(MenuGlyph::Open.icon_name(), "menu");
        assert_eq!(MenuGlyph::Close.icon_name(), "x");
    }
}
