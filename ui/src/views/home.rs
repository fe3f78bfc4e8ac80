use api::RecordStore;
use dioxus::prelude::*;
use tracing::info;

use crate::core::format;
use crate::i18n;
use crate::slides::route::select_mode_path;
use crate::t;

/// Demo picker: seeded students plus a random-student generator.
#[component]
pub fn Home() -> Element {
    // Re-render on language switch.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let store = use_context::<RecordStore>();
    let style = i18n::number_style();
    let records = store.list();

    let generate = {
        let store = store.clone();
        move |_: MouseEvent| {
            let key = store.generate_synthetic(&mut rand::thread_rng());
            info!(%key, "opening generated student");
            navigator().push(select_mode_path(&key));
        }
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page-home__intro", {t!("home-intro")} }

            ul { class: "student-list",
                for record in records {
                    {
                        let key = record.key();
                        let score = format::score_of(record.final_score, 100, style);
                        let level = record.engagement_level.as_str();
                        rsx! {
                            li { key: "{key}", class: "student-list__item",
                                Link {
                                    class: "student-list__link",
                                    to: select_mode_path(&key),
                                    span { class: "student-list__name", "{record.name}" }
                                    span { class: "student-list__meta",
                                        "{record.class_name}, {record.section} · {key}"
                                    }
                                    span { class: "student-list__score level--{level}", "{score}" }
                                }
                            }
                        }
                    }
                }
            }

            button { class: "button button--primary", onclick: generate,
                {t!("home-generate")}
            }
        }
    }
}
