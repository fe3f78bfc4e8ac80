//! Viewport height and font readiness, needed before laying out a capture.
//!
//! `--real-vh` mirrors `window.innerHeight` in pixels. Mobile browsers report
//! `100vh` including collapsible toolbars, so slide heights use this instead.

#[cfg(not(target_arch = "wasm32"))]
const PUBLISH_VH_JS: &str =
    "document.documentElement.style.setProperty('--real-vh', window.innerHeight + 'px');";

#[cfg(not(target_arch = "wasm32"))]
const FONTS_READY_JS: &str =
    "if (document.fonts && document.fonts.ready) { await document.fonts.ready; } return true;";

#[cfg(target_arch = "wasm32")]
pub fn publish_real_vh() {
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let root = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        root.style()
            .set_property("--real-vh", &format!("{height}px"))
            .ok();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn publish_real_vh() {
    let _ = dioxus::prelude::document::eval(PUBLISH_VH_JS);
}

/// Resolves once web fonts have loaded, or immediately if the document has no
/// font loading API.
#[cfg(target_arch = "wasm32")]
pub async fn fonts_ready() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let ready = js_sys::Reflect::get(&document, &"fonts".into())
        .ok()
        .filter(|fonts| !fonts.is_undefined())
        .and_then(|fonts| js_sys::Reflect::get(&fonts, &"ready".into()).ok())
        .and_then(|ready| ready.dyn_into::<js_sys::Promise>().ok());
    if let Some(promise) = ready {
        JsFuture::from(promise).await.ok();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fonts_ready() {
    if let Err(err) = dioxus::prelude::document::eval(FONTS_READY_JS).await {
        tracing::debug!(error = ?err, "font readiness check failed");
    }
}
