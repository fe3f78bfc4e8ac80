use dioxus::prelude::*;

use crate::core::format::{Change, NumberStyle};

#[component]
pub fn SlideHeading(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "slide-heading",
            h1 { class: "slide-heading__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "slide-heading__subtitle", "{subtitle}" }
            }
        }
    }
}

/// Big number with a caption underneath.
#[component]
pub fn StatTile(value: String, label: String, #[props(default = "blue")] tone: &'static str) -> Element {
    rsx! {
        div { class: "stat-tile stat-tile--{tone}",
            span { class: "stat-tile__value", "{value}" }
            span { class: "stat-tile__label", "{label}" }
        }
    }
}

/// Arrow plus magnitude, colored by direction. `unit` is appended verbatim.
#[component]
pub fn DeltaBadge(change: Change, style: NumberStyle, unit: String) -> Element {
    let modifier = change.trend.css_modifier();
    let label = change.label(style);
    rsx! {
        span { class: "delta-badge {modifier}",
            "{label}{unit}"
        }
    }
}

#[component]
pub fn SlideFooter(text: String) -> Element {
    rsx! {
        p { class: "slide-footer", "{text}" }
    }
}
