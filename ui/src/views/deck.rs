//! Slide routes: resolve the URL, make sure the record is loaded, render.

use dioxus::prelude::*;
use tracing::debug;

use crate::components::error_display::ErrorDisplay;
use crate::components::loading::Loading;
use crate::records::{use_record_loader, LoadState};
use crate::session::{use_session, SessionChange};
use crate::slides::route::{resolve, select_mode_path, Resolution};
use crate::slides::SlideView;
use crate::views::InvalidUrl;
use api::RecordKey;

/// `/{sid}/{pid}` goes straight to mode selection.
#[component]
pub fn ModeRedirect(student_id: String, program_id: String) -> Element {
    let target = select_mode_path(&RecordKey::new(student_id, program_id));
    use_effect(use_reactive((&target,), |(target,)| {
        navigator().replace(target);
    }));
    rsx! {}
}

/// Welcome slide of a track.
#[component]
pub fn Deck(student_id: String, program_id: String, mode: String) -> Element {
    rsx! { DeckView { student_id, program_id, mode, slide: None } }
}

#[component]
pub fn DeckSlide(student_id: String, program_id: String, mode: String, slide: String) -> Element {
    rsx! { DeckView { student_id, program_id, mode, slide: Some(slide) } }
}

#[component]
fn DeckView(student_id: String, program_id: String, mode: String, slide: Option<String>) -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let resolution = resolve(&student_id, &program_id, &mode, slide.as_deref());
    let session = use_session();
    let loader = use_record_loader();

    use_effect(use_reactive((&resolution,), move |(resolution,)| {
        let mut session = session;
        match resolution {
            Resolution::Show(address) => {
                session.apply(SessionChange::View(address.key.clone()));
                session.apply(SessionChange::InferMode(address.mode));
            }
            Resolution::Redirect(address) => {
                debug!(to = %address.path(), "slide not on this track; redirecting");
                navigator().replace(address.path());
            }
            Resolution::Invalid => {}
        }
    }));

    let body = match resolution {
        Resolution::Invalid => rsx! { InvalidUrl { segments: Vec::<String>::new() } },
        Resolution::Redirect(_) => rsx! { Loading {} },
        Resolution::Show(address) => match loader.state() {
            LoadState::Ready(record) if address.key.matches(&record) => {
                rsx! { SlideView { address, record } }
            }
            LoadState::Failed { key, error } if key == address.key => rsx! {
                ErrorDisplay { error, on_retry: move |_| loader.retry() }
            },
            _ => rsx! { Loading {} },
        },
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        {body}
    }
}
