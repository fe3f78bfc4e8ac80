use api::RecordKey;
use dioxus::prelude::*;

use crate::session::{use_session, ReportMode, SessionChange};
use crate::slides::route::{SlideAddress, SlideKey};
use crate::t;

#[component]
pub fn ModeSelect(student_id: String, program_id: String) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let session = use_session();
    let key = RecordKey::new(student_id, program_id);
    let current = session.read().mode;

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-mode",
            p { class: "page-mode__eyebrow", {t!("mode-eyebrow")} }
            h1 { {t!("mode-title")} }
            p { class: "page-mode__hint", {t!("mode-hint")} }
            div { class: "mode-tabs", role: "tablist",
                for mode in [ReportMode::Quarterly, ReportMode::Yearly] {
                    {
                        let key = key.clone();
                        let selected = current == Some(mode);
                        rsx! {
                            button {
                                key: "{mode}",
                                class: if selected { "mode-tab mode-tab--selected" } else { "mode-tab" },
                                role: "tab",
                                aria_selected: "{selected}",
                                onclick: move |_| {
                                    let mut session = session;
                                    session.apply(SessionChange::SelectMode(mode));
                                    let welcome = SlideAddress::new(key.clone(), mode, SlideKey::Welcome);
                                    navigator().push(welcome.path());
                                },
                                span { class: "mode-tab__title", {t!("mode-option", mode = mode.segment())} }
                                span { class: "mode-tab__desc", {t!("mode-option-desc", mode = mode.segment())} }
                            }
                        }
                    }
                }
            }
        }
    }
}
