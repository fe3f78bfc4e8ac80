//! Chrome shared by every slide: capture region, arrows, dots, share button.

use api::EngagementLevel;
use dioxus::prelude::*;
use tracing::debug;

use crate::share::{self, CaptureRequest, InFlight, ShareCard, ShareOptions};
use crate::slides::route::{position, SlideAddress};
use crate::slides::theme;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
}

#[component]
fn ArrowButton(direction: Direction, target: Option<String>) -> Element {
    let (modifier, glyph, label) = match direction {
        Direction::Prev => ("arrow-button--prev", "‹", t!("nav-prev")),
        Direction::Next => ("arrow-button--next", "›", t!("nav-next")),
    };
    let Some(target) = target else {
        return rsx! {};
    };

    rsx! {
        button {
            class: "arrow-button {modifier}",
            aria_label: "{label}",
            onclick: move |_| {
                navigator().push(target.clone());
            },
            "{glyph}"
        }
    }
}

#[component]
fn DotIndicator(active: usize, count: usize) -> Element {
    rsx! {
        div { class: "dot-indicator",
            for idx in 0..count {
                span {
                    key: "{idx}",
                    class: if idx == active { "dot dot--active" } else { "dot" },
                }
            }
        }
    }
}

#[component]
pub fn SlideFrame(
    address: SlideAddress,
    level: EngagementLevel,
    card: ShareCard,
    children: Element,
) -> Element {
    let share_ui = share::use_share_ui();
    let hidden = (share_ui.hidden)();
    let busy = (share_ui.busy)();
    let background = theme::gradient(address.slide, level).css();
    let dots = position(address.slide, address.mode);
    let prev = address.prev().map(|a| a.path());
    let next = address.next().map(|a| a.path());
    let mode = address.mode;

    let on_share = move |_| {
        let mut busy = share_ui.busy;
        if *busy.peek() {
            debug!("share already running; ignoring press");
            return;
        }
        let in_flight = InFlight::begin(move |on| busy.set(on));
        let host = share::platform_host(share_ui);
        let request = CaptureRequest::for_card(card.clone());
        let options = ShareOptions::for_mode(mode);
        // Root-scoped: navigating away mid-share must not cancel the fallback.
        let _ = spawn_forever(async move {
            let _in_flight = in_flight;
            let outcome = share::share(host.as_ref(), &request, &options).await;
            debug!(?outcome, "share finished");
        });
    };

    rsx! {
        div { class: if hidden { "slide slide--sharing" } else { "slide" },
            div {
                id: "slide-capture",
                class: "slide__capture",
                style: "background: {background}",
                div { class: "slide__brand", "Recap" }
                {children}
            }
            if !hidden {
                if let Some((active, count)) = dots {
                    DotIndicator { active, count }
                }
                ArrowButton { direction: Direction::Prev, target: prev }
                ArrowButton { direction: Direction::Next, target: next }
                button {
                    class: "share-button",
                    disabled: busy,
                    onclick: on_share,
                    {t!("share-button")}
                }
            }
        }
    }
}
