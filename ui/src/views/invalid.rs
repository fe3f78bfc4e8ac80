use dioxus::prelude::*;
use tracing::debug;

use crate::t;

/// Anything the router cannot place.
#[component]
pub fn InvalidUrl(segments: Vec<String>) -> Element {
    if !segments.is_empty() {
        debug!(path = %segments.join("/"), "unmatched route");
    }

    rsx! {
        section { class: "page page-invalid status-screen status-screen--error",
            h1 { class: "status-screen__title", {t!("invalid-title")} }
            p { class: "status-screen__text", {t!("invalid-body")} }
            Link { class: "button button--primary", to: "/", {t!("invalid-home")} }
        }
    }
}
