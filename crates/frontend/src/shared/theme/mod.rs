//! Light/dark theme switching.
//!
//! The active theme is applied as a `data-theme` attribute on `<body>` and a
//! `dark` class on `<html>`. Nothing is persisted; every page load starts light.

mod theme_switcher;

pub use theme_switcher::ThemeSwitcher;

use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as used in the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the action the switcher offers, not of the current theme.
    pub fn switch_icon(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}
