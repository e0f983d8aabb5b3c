use super::{apply_theme, Theme};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Self-contained light/dark toggle. Takes no props.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());

    Effect::new(move |_| {
        apply_theme(theme.get());
    });

    let toggle = Callback::new(move |_: leptos::ev::MouseEvent| {
        theme.update(|t| *t = t.toggled());
        log::debug!("theme switched to {}", theme.get_untracked().as_str());
    });

    view! {
        <Button variant="ghost" size="icon" class="hover-scale" aria_label="Toggle theme" on_click=toggle>
            {move || icon(theme.get().switch_icon())}
        </Button>
    }
}
