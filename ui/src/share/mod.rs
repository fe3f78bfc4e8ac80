//! Slide sharing: hide the chrome, rasterize, hand the PNG to the platform.
//!
//! [`share`] is the whole sequence. Platform specifics sit behind
//! [`ShareHost`]: the web host rasterizes the live DOM and uses the Web
//! Share API; the desktop host renders a [`ShareCard`] headlessly and always
//! opens the fallback modal.
//!
//! The hide flag is owned by a guard inside [`share`], so every exit path
//! (including a failed capture) restores arrows, dots and the share button.

pub mod card;
pub mod download;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod web;

use std::rc::Rc;

use base64::Engine;
use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::session::ReportMode;
use crate::t;

pub use card::{CardLine, ShareCard};

/// CSS selector of the region captured for a share.
pub const CAPTURE_SELECTOR: &str = "#slide-capture";

/// Pause before capture so the view re-renders without transient UI.
pub const SETTLE_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ShareOptions {
    pub title: String,
    pub text: String,
    pub file_name: String,
}

impl ShareOptions {
    pub fn for_mode(mode: ReportMode) -> Self {
        match mode {
            ReportMode::Quarterly => Self {
                title: t!("share-title-quarterly"),
                text: t!("share-text-quarterly"),
                file_name: "quarter-in-review.png".to_string(),
            },
            ReportMode::Yearly => Self {
                title: t!("share-title-yearly"),
                text: t!("share-text-yearly"),
                file_name: "year-wrapped.png".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    pub selector: String,
    /// Plain-data summary for hosts that cannot read the DOM.
    pub card: ShareCard,
}

impl CaptureRequest {
    pub fn for_card(card: ShareCard) -> Self {
        Self {
            selector: CAPTURE_SELECTOR.to_string(),
            card,
        }
    }
}

/// A captured PNG ready for preview and download.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePreview {
    pub data_url: String,
    pub png: Rc<Vec<u8>>,
    pub file_name: String,
}

impl SharePreview {
    pub fn from_png(png: Vec<u8>, file_name: &str) -> Self {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Self {
            data_url: format!("data:image/png;base64,{encoded}"),
            png: Rc::new(png),
            file_name: file_name.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("document unavailable")]
    NoDocument,
    #[error("browser rejected capture: {0}")]
    Browser(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("png encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeShare {
    Shared,
    /// Cancelled by the user or rejected by the platform.
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    FallbackOpened,
    CaptureFailed,
}

/// Platform capabilities the share sequence needs.
pub trait ShareHost {
    fn set_ui_hidden(&self, hidden: bool);
    /// Let the view re-render after hiding UI.
    fn settle(&self) -> LocalBoxFuture<'_, ()>;
    fn publish_viewport_height(&self);
    fn fonts_ready(&self) -> LocalBoxFuture<'_, ()>;
    fn capture<'a>(
        &'a self,
        request: &'a CaptureRequest,
    ) -> LocalBoxFuture<'a, Result<Vec<u8>, CaptureError>>;
    fn can_share(&self, png: &[u8], options: &ShareOptions) -> bool;
    fn native_share<'a>(
        &'a self,
        png: &'a [u8],
        options: &'a ShareOptions,
    ) -> LocalBoxFuture<'a, NativeShare>;
    fn open_fallback(&self, preview: SharePreview);
}

/// Keeps transient UI hidden until released or dropped.
struct HiddenUi<'a> {
    host: &'a dyn ShareHost,
    active: bool,
}

impl<'a> HiddenUi<'a> {
    fn engage(host: &'a dyn ShareHost) -> Self {
        host.set_ui_hidden(true);
        Self { host, active: true }
    }

    fn release(&mut self) {
        if self.active {
            self.active = false;
            self.host.set_ui_hidden(false);
        }
    }
}

impl Drop for HiddenUi<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Holds the share button's single-flight flag for as long as it lives.
/// Moved into the share task so a dropped task clears the flag too.
pub struct InFlight<F: FnMut(bool)> {
    set: F,
}

impl<F: FnMut(bool)> InFlight<F> {
    pub fn begin(mut set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: FnMut(bool)> Drop for InFlight<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// Run one full share sequence.
pub async fn share(
    host: &dyn ShareHost,
    request: &CaptureRequest,
    options: &ShareOptions,
) -> ShareOutcome {
    let mut hidden = HiddenUi::engage(host);
    host.settle().await;
    host.publish_viewport_height();
    host.fonts_ready().await;

    let png = match host.capture(request).await {
        Ok(png) => png,
        Err(err) => {
            warn!(selector = %request.selector, error = %err, "slide capture failed");
            return ShareOutcome::CaptureFailed;
        }
    };
    let preview = SharePreview::from_png(png, &options.file_name);

    if host.can_share(&preview.png, options) {
        hidden.release();
        match host.native_share(&preview.png, options).await {
            NativeShare::Shared => {
                info!(file = %options.file_name, "slide shared");
                return ShareOutcome::Shared;
            }
            NativeShare::Declined => debug!("native share declined; opening fallback"),
        }
    }

    host.open_fallback(preview);
    hidden.release();
    info!(file = %options.file_name, "share fallback opened");
    ShareOutcome::FallbackOpened
}

/// Reactive share state shared by the slide frame and the fallback modal.
#[derive(Clone, Copy, PartialEq)]
pub struct ShareUi {
    /// Hide arrows, dots and the share button.
    pub hidden: Signal<bool>,
    /// A share is in flight; further presses are ignored.
    pub busy: Signal<bool>,
    /// Open fallback modal contents.
    pub preview: Signal<Option<SharePreview>>,
}

impl ShareUi {
    pub fn provide() -> Self {
        use_context_provider(|| ShareUi {
            hidden: Signal::new(false),
            busy: Signal::new(false),
            preview: Signal::new(None),
        })
    }
}

pub fn use_share_ui() -> ShareUi {
    use_context::<ShareUi>()
}

/// The host for the platform this build targets.
pub fn platform_host(ui: ShareUi) -> Rc<dyn ShareHost> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::WebShareHost::new(ui))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(desktop::DesktopShareHost::new(ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::{Cell, RefCell};

    use crate::slides::theme::Gradient;

    #[derive(Debug, Clone, PartialEq)]
    enum Step {
        Hidden(bool),
        Settle,
        Viewport,
        Fonts,
        Capture(String),
        CanShare,
        NativeShare,
        Fallback(String),
    }

    struct MockHost {
        steps: RefCell<Vec<Step>>,
        capture_fails: bool,
        can_share: bool,
        native: NativeShare,
    }

    impl MockHost {
        fn new(capture_fails: bool, can_share: bool, native: NativeShare) -> Self {
            Self {
                steps: RefCell::new(Vec::new()),
                capture_fails,
                can_share,
                native,
            }
        }

        fn log(&self, step: Step) {
            self.steps.borrow_mut().push(step);
        }

        fn steps(&self) -> Vec<Step> {
            self.steps.borrow().clone()
        }

        fn hidden_now(&self) -> bool {
            self.steps
                .borrow()
                .iter()
                .rev()
                .find_map(|s| match s {
                    Step::Hidden(h) => Some(*h),
                    _ => None,
                })
                .unwrap_or(false)
        }
    }

    impl ShareHost for MockHost {
        fn set_ui_hidden(&self, hidden: bool) {
            self.log(Step::Hidden(hidden));
        }

        fn settle(&self) -> LocalBoxFuture<'_, ()> {
            self.log(Step::Settle);
            Box::pin(async {})
        }

        fn publish_viewport_height(&self) {
            self.log(Step::Viewport);
        }

        fn fonts_ready(&self) -> LocalBoxFuture<'_, ()> {
            self.log(Step::Fonts);
            Box::pin(async {})
        }

        fn capture<'a>(
            &'a self,
            request: &'a CaptureRequest,
        ) -> LocalBoxFuture<'a, Result<Vec<u8>, CaptureError>> {
            self.log(Step::Capture(request.selector.clone()));
            let fails = self.capture_fails;
            Box::pin(async move {
                if fails {
                    Err(CaptureError::Render("boom".into()))
                } else {
                    Ok(vec![0x89, b'P', b'N', b'G'])
                }
            })
        }

        fn can_share(&self, _png: &[u8], _options: &ShareOptions) -> bool {
            self.log(Step::CanShare);
            self.can_share
        }

        fn native_share<'a>(
            &'a self,
            _png: &'a [u8],
            _options: &'a ShareOptions,
        ) -> LocalBoxFuture<'a, NativeShare> {
            self.log(Step::NativeShare);
            let outcome = self.native;
            Box::pin(async move { outcome })
        }

        fn open_fallback(&self, preview: SharePreview) {
            self.log(Step::Fallback(preview.file_name));
        }
    }

    fn request() -> CaptureRequest {
        CaptureRequest::for_card(ShareCard {
            title: "title".into(),
            subtitle: "subtitle".into(),
            lines: vec![],
            footer: String::new(),
            gradient: Gradient {
                start: "#000000",
                end: "#ffffff",
            },
        })
    }

    fn options() -> ShareOptions {
        ShareOptions {
            title: "Quarter in Review".into(),
            text: "Check out my learning summary!".into(),
            file_name: "quarter-in-review.png".into(),
        }
    }

    #[test]
    fn unavailable_native_share_opens_fallback_then_restores_ui() {
        let host = MockHost::new(false, false, NativeShare::Shared);
        let outcome = block_on(share(&host, &request(), &options()));
        assert_eq!(outcome, ShareOutcome::FallbackOpened);
        assert_eq!(
            host.steps(),
            vec![
                Step::Hidden(true),
                Step::Settle,
                Step::Viewport,
                Step::Fonts,
                Step::Capture(CAPTURE_SELECTOR.into()),
                Step::CanShare,
                Step::Fallback("quarter-in-review.png".into()),
                Step::Hidden(false),
            ]
        );
        assert!(!host.hidden_now());
    }

    #[test]
    fn native_share_success_restores_ui_before_sharing() {
        let host = MockHost::new(false, true, NativeShare::Shared);
        let outcome = block_on(share(&host, &request(), &options()));
        assert_eq!(outcome, ShareOutcome::Shared);
        let steps = host.steps();
        let restored = steps.iter().position(|s| *s == Step::Hidden(false));
        let shared = steps.iter().position(|s| *s == Step::NativeShare);
        assert!(restored < shared, "{steps:?}");
        assert!(!steps.iter().any(|s| matches!(s, Step::Fallback(_))));
        assert!(!host.hidden_now());
    }

    #[test]
    fn declined_native_share_falls_back() {
        let host = MockHost::new(false, true, NativeShare::Declined);
        let outcome = block_on(share(&host, &request(), &options()));
        assert_eq!(outcome, ShareOutcome::FallbackOpened);
        let steps = host.steps();
        assert_eq!(
            steps.iter().filter(|s| **s == Step::Hidden(false)).count(),
            1
        );
        assert!(matches!(steps.last(), Some(Step::Fallback(_))));
        assert!(!host.hidden_now());
    }

    #[test]
    fn capture_failure_restores_ui_without_sharing() {
        let host = MockHost::new(true, true, NativeShare::Shared);
        let outcome = block_on(share(&host, &request(), &options()));
        assert_eq!(outcome, ShareOutcome::CaptureFailed);
        let steps = host.steps();
        assert_eq!(steps.last(), Some(&Step::Hidden(false)));
        assert!(!steps.contains(&Step::CanShare));
        assert!(!host.hidden_now());
    }

    #[test]
    fn preview_is_a_png_data_url() {
        let preview = SharePreview::from_png(vec![1, 2, 3], "x.png");
        assert_eq!(preview.data_url, "data:image/png;base64,AQID");
        assert_eq!(preview.png.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn share_defaults_name_files_per_mode() {
        crate::i18n::init();
        assert_eq!(
            ShareOptions::for_mode(ReportMode::Quarterly).file_name,
            "quarter-in-review.png"
        );
        assert_eq!(
            ShareOptions::for_mode(ReportMode::Yearly).file_name,
            "year-wrapped.png"
        );
    }

    #[test]
    fn in_flight_flag_clears_when_task_is_dropped_mid_share() {
        let busy = Rc::new(Cell::new(false));
        let flag = busy.clone();
        let guard = InFlight::begin(move |on| flag.set(on));
        assert!(busy.get());

        let task = async move {
            let _guard = guard;
            futures::future::pending::<()>().await;
        };
        // One poll, then the task is dropped as an unmounted scope would drop it.
        assert!(task.now_or_never().is_none());
        assert!(!busy.get());
    }

    #[test]
    fn in_flight_flag_clears_on_completion() {
        let busy = Rc::new(Cell::new(false));
        let flag = busy.clone();
        block_on(async move {
            let _guard = InFlight::begin(move |on| flag.set(on));
        });
        assert!(!busy.get());
    }
}
