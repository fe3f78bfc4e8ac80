use dioxus::prelude::*;
use tracing::warn;

use crate::share::{download, use_share_ui, SharePreview};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ModalStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Preview of a captured slide with manual save actions.
#[component]
pub fn FallbackModal() -> Element {
    let share_ui = use_share_ui();
    let mut status = use_signal(|| ModalStatus::Idle);
    let Some(preview) = (share_ui.preview)() else {
        return rsx! {};
    };

    let close = move |_: MouseEvent| {
        let mut slot = share_ui.preview;
        slot.set(None);
        status.set(ModalStatus::Idle);
    };

    let on_download = {
        let preview = preview.clone();
        move |_: MouseEvent| {
            if *status.peek() == ModalStatus::Working {
                return;
            }
            status.set(ModalStatus::Working);
            let SharePreview { png, file_name, .. } = preview.clone();
            spawn(async move {
                match download::save_png(&file_name, &png).await {
                    Ok(Some(path)) => status.set(ModalStatus::Done(t!("fallback-saved", path = path))),
                    Ok(None) => status.set(ModalStatus::Idle),
                    Err(err) => {
                        warn!(error = %err, "png download failed");
                        status.set(ModalStatus::Error(err.to_string()));
                    }
                }
            });
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let copy_action = {
        let png = preview.png.clone();
        rsx! {
            button {
                class: "button button--ghost",
                onclick: move |_: MouseEvent| match download::copy_png_to_clipboard(&png) {
                    Ok(()) => status.set(ModalStatus::Done(t!("fallback-copied"))),
                    Err(err) => {
                        warn!(error = %err, "clipboard copy failed");
                        status.set(ModalStatus::Error(err.to_string()));
                    }
                },
                {t!("fallback-copy")}
            }
        }
    };
    #[cfg(target_arch = "wasm32")]
    let copy_action = rsx! {};

    let feedback = match status() {
        ModalStatus::Idle => None,
        ModalStatus::Working => Some(("modal__status".to_string(), t!("fallback-working"))),
        ModalStatus::Done(message) => Some(("modal__status modal__status--success".to_string(), message)),
        ModalStatus::Error(err) => Some((
            "modal__status modal__status--error".to_string(),
            t!("fallback-failed", reason = err),
        )),
    };

    rsx! {
        div { class: "modal-backdrop", onclick: close,
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal__close",
                    aria_label: t!("fallback-close"),
                    onclick: close,
                    "×"
                }
                h2 { class: "modal__title", {t!("fallback-title")} }
                img {
                    class: "modal__preview",
                    src: "{preview.data_url}",
                    alt: t!("fallback-title"),
                }
                div { class: "modal__actions",
                    button {
                        class: "button button--accent",
                        disabled: status() == ModalStatus::Working,
                        onclick: on_download,
                        {t!("fallback-download")}
                    }
                    {copy_action}
                }
                if let Some((class, message)) = feedback {
                    p { class: "{class}", "{message}" }
                }
            }
        }
    }
}
