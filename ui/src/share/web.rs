//! Browser share host: DOM rasterization and the Web Share API.

use futures::future::LocalBoxFuture;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, Element, HtmlCanvasElement,
    HtmlImageElement, Url, XmlSerializer,
};

use super::{
    CaptureError, CaptureRequest, NativeShare, ShareHost, ShareOptions,
    SharePreview, ShareUi, SETTLE_MS,
};
use crate::core::{timing, viewport};

pub(super) struct WebShareHost {
    ui: ShareUi,
}

impl WebShareHost {
    pub(super) fn new(ui: ShareUi) -> Self {
        Self { ui }
    }
}

impl ShareHost for WebShareHost {
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
        Box::pin(capture_dom(&request.selector))
    }

    fn can_share(&self, png: &[u8], options: &ShareOptions) -> bool {
        let Some((navigator, can_share)) = navigator_method("canShare") else {
            return false;
        };
        if navigator_method("share").is_none() {
            return false;
        }
        let Ok(data) = share_data(png, options) else {
            return false;
        };
        can_share
            .call1(&navigator, &data)
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn native_share<'a>(
        &'a self,
        png: &'a [u8],
        options: &'a ShareOptions,
    ) -> LocalBoxFuture<'a, NativeShare> {
        Box::pin(async move {
            let Some((navigator, share)) = navigator_method("share") else {
                return NativeShare::Declined;
            };
            let Ok(data) = share_data(png, options) else {
                return NativeShare::Declined;
            };
            let promise = match share
                .call1(&navigator, &data)
                .ok()
                .and_then(|p| p.dyn_into::<js_sys::Promise>().ok())
            {
                Some(promise) => promise,
                None => return NativeShare::Declined,
            };
            match JsFuture::from(promise).await {
                Ok(_) => NativeShare::Shared,
                Err(err) => {
                    tracing::debug!(error = ?err, "navigator.share rejected");
                    NativeShare::Declined
                }
            }
        })
    }

    fn open_fallback(&self, preview: SharePreview) {
        let mut slot = self.ui.preview;
        slot.set(Some(preview));
    }
}

fn navigator_method(name: &str) -> Option<(JsValue, js_sys::Function)> {
    let navigator: JsValue = web_sys::window()?.navigator().into();
    let method = Reflect::get(&navigator, &JsValue::from_str(name)).ok()?;
    let method = method.dyn_into::<js_sys::Function>().ok()?;
    Some((navigator, method))
}

fn share_data(png: &[u8], options: &ShareOptions) -> Result<js_sys::Object, JsValue> {
    let bytes = js_sys::Uint8Array::from(png);
    let parts = js_sys::Array::of1(&bytes);
    let bag = web_sys::FilePropertyBag::new();
    bag.set_type("image/png");
    let file = web_sys::File::new_with_u8_array_sequence_and_options(&parts, &options.file_name, &bag)?;

    let data = js_sys::Object::new();
    Reflect::set(&data, &"files".into(), &js_sys::Array::of1(&file))?;
    Reflect::set(&data, &"title".into(), &JsValue::from_str(&options.title))?;
    Reflect::set(&data, &"text".into(), &JsValue::from_str(&options.text))?;
    Ok(data)
}

fn browser(err: JsValue) -> CaptureError {
    CaptureError::Browser(format!("{err:?}"))
}

/// Wrap serialized markup in an SVG so an `<img>` can draw it.
fn foreign_object_svg(markup: &str, width: u32, height: u32, css: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}'>\
         <foreignObject x='0' y='0' width='100%' height='100%'>\
         <div xmlns='http://www.w3.org/1999/xhtml'>\
         <style><![CDATA[{css}]]></style>{markup}</div>\
         </foreignObject></svg>"
    )
}

async fn capture_dom(selector: &str) -> Result<Vec<u8>, CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::NoDocument)?;
    let document = window.document().ok_or(CaptureError::NoDocument)?;
    let target: Element = match document.query_selector(selector).ok().flatten() {
        Some(element) => element,
        None => {
            tracing::debug!(selector, "capture region missing; using document body");
            document.body().ok_or(CaptureError::NoDocument)?.into()
        }
    };

    let width = target.client_width().max(1) as u32;
    let height = target.client_height().max(1) as u32;
    let markup = XmlSerializer::new()
        .map_err(browser)?
        .serialize_to_string(&target)
        .map_err(browser)?;
    let svg = foreign_object_svg(&markup, width, height, crate::THEME_CSS);
    let scale = window.device_pixel_ratio().max(1.0);

    rasterize(&document, &svg, width, height, scale).await
}

async fn rasterize(
    document: &Document,
    svg: &str,
    width: u32,
    height: u32,
    scale: f64,
) -> Result<Vec<u8>, CaptureError> {
    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml;charset=utf-8");
    let parts = js_sys::Array::of1(&JsValue::from_str(svg));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| CaptureError::Browser("canvas cast".into()))?;
    canvas.set_width((width as f64 * scale).round() as u32);
    canvas.set_height((height as f64 * scale).round() as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(browser)?
        .ok_or_else(|| CaptureError::Browser("2d context missing".into()))?
        .dyn_into()
        .map_err(|_| CaptureError::Browser("context cast".into()))?;

    let image = HtmlImageElement::new().map_err(browser)?;
    image.set_cross_origin(Some("anonymous"));
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;
    if let Err(err) = decoded {
        Url::revoke_object_url(&url).ok();
        return Err(CaptureError::Render(format!("{err:?}")));
    }

    context.scale(scale, scale).map_err(browser)?;
    let drawn = context.draw_image_with_html_image_element_and_dw_and_dh(
        &image,
        0.0,
        0.0,
        width as f64,
        height as f64,
    );
    Url::revoke_object_url(&url).ok();
    drawn.map_err(browser)?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(browser)?;
    let encoded = data_url
        .split_once(',')
        .map(|(_, body)| body)
        .ok_or_else(|| CaptureError::Encode("malformed data url".into()))?;
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|err| CaptureError::Encode(err.to_string()))
}
