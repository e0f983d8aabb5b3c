use leptos::prelude::*;

/// CSS modifier for a button variant. Unknown variants fall back to "default".
pub fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("default") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        "outline" => "button--outline",
        _ => "button--primary",
    }
}

/// CSS modifier for a button size: "md" (default), "sm" or "icon".
pub fn size_class(size: Option<&str>) -> &'static str {
    match size {
        Some("sm") => "button--small",
        Some("icon") => "button--icon",
        _ => "",
    }
}

/// Button component with variants (default, secondary, ghost, outline) and sizes (md, sm, icon)
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible label for icon-only buttons
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        format!(
            "button {} {} {}",
            variant_class(variant.get().as_deref()),
            size_class(size.get().as_deref()),
            class.get().unwrap_or_default()
        )
    };

    view! {
        <button
            type="button"
            class=classes
            aria-label=move || aria_label.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class(None), "button--primary");
        assert_eq!(variant_class(Some("ghost")), "button--ghost");
        assert_eq!(variant_class(Some("unknown")), "button--primary");
    }

    #[test]
    fn test_size_class() {
        assert_eq!(size_class(None), "");
        assert_eq!(size_class(Some("icon")), "button--icon");
        assert_eq!(size_class(Some("sm")), "button--small");
    }
}
