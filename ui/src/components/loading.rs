use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "status-screen",
            div { class: "spinner", aria_hidden: "true" }
            p { class: "status-screen__text", {t!("loading-record")} }
        }
    }
}
