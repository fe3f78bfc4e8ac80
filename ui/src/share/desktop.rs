//! Desktop share host: headless card rendering, modal fallback only.

use dioxus::prelude::Writable;
use futures::future::LocalBoxFuture;

use super::{
    card, CaptureError, CaptureRequest, NativeShare, ShareHost, ShareOptions,
    SharePreview, ShareUi, SETTLE_MS,
};
use crate::core::{timing, viewport};

pub(super) struct DesktopShareHost {
    ui: ShareUi,
}

impl DesktopShareHost {
    pub(super) fn new(ui: ShareUi) -> Self {
        Self { ui }
    }
}

impl ShareHost for DesktopShareHost {
    fn set_ui_hidden(&self, hidden: bool) {
        let mut flag = self.ui.hidden;
        flag.set(hidden);
    }

    fn settle(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(timing::sleep_ms(SETTLE_MS))
    }

    fn publish_viewport_height(&self) {
        viewport::publish_real_vh();
    }

    fn fonts_ready(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(viewport::fonts_ready())
    }

    fn capture<'a>(
        &'a self,
        request: &'a CaptureRequest,
    ) -> LocalBoxFuture<'a, Result<Vec<u8>, CaptureError>> {
        Box::pin(async move { card::render_png(&request.card) })
    }

    fn can_share(&self, _png: &[u8], _options: &ShareOptions) -> bool {
        false
    }

    fn native_share<'a>(
        &'a self,
        _png: &'a [u8],
        _options: &'a ShareOptions,
    ) -> LocalBoxFuture<'a, NativeShare> {
        Box::pin(async { NativeShare::Declined })
    }

    fn open_fallback(&self, preview: SharePreview) {
        let mut slot = self.ui.preview;
        slot.set(Some(preview));
    }
}
