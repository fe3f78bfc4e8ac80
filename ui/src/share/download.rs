//! Saving a captured PNG: browser download or the desktop exports folder,
//! plus clipboard copy on desktop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("document unavailable")]
    NoDocument,
    #[error("browser refused download: {0}")]
    Browser(String),
    #[error("export directory unavailable")]
    NoExportDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("png decode failed: {0}")]
    Decode(String),
}

pub(crate) fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

/// `file_name` inside `dir`, or `stem-slug.ext` when that is already taken.
pub fn unique_path(
    dir: &std::path::Path,
    file_name: &str,
    slug: &str,
    exists: impl Fn(&std::path::Path) -> bool,
) -> std::path::PathBuf {
    let candidate = dir.join(file_name);
    if !exists(&candidate) {
        return candidate;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };
    match ext {
        Some(ext) => dir.join(format!("{stem}-{slug}.{ext}")),
        None => dir.join(format!("{stem}-{slug}")),
    }
}

/// Save `png` under `file_name`. Returns the written path on desktop.
pub async fn save_png(file_name: &str, png: &[u8]) -> Result<Option<String>, DownloadError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(png);
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type("image/png");
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| DownloadError::Browser("blob".into()))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| DownloadError::Browser("object url".into()))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::NoDocument)?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| DownloadError::Browser("anchor".into()))?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("anchor cast".into()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or(DownloadError::NoDocument)?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        tracing::info!(file = file_name, "png download started");
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir)?;
        let path = unique_path(&dir, file_name, &timestamp_slug(), |p| p.exists());
        fs::write(&path, png)?;
        let shown = path.to_string_lossy().to_string();
        tracing::info!(path = %shown, "png exported");
        Ok(Some(shown))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, DownloadError> {
    let dirs = directories::ProjectDirs::from("com", "Recap", "Recap")
        .ok_or(DownloadError::NoExportDir)?;
    Ok(dirs.data_dir().join("exports"))
}

/// Decode `png` to straight RGBA8 pixels: `(width, height, pixels)`.
#[cfg(not(target_arch = "wasm32"))]
pub fn decode_rgba(png: &[u8]) -> Result<(usize, usize, Vec<u8>), DownloadError> {
    let mut decoder = png::Decoder::new(png);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|err| DownloadError::Decode(err.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|err| DownloadError::Decode(err.to_string()))?;
    buf.truncate(info.buffer_size());

    let pixels = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(DownloadError::Decode(format!(
                "unsupported color type {other:?}"
            )))
        }
    };
    Ok((info.width as usize, info.height as usize, pixels))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn copy_png_to_clipboard(png: &[u8]) -> Result<(), DownloadError> {
    use arboard::{Clipboard, ImageData};
    use std::borrow::Cow;

    let (width, height, pixels) = decode_rgba(png)?;
    let mut clipboard =
        Clipboard::new().map_err(|err| DownloadError::Clipboard(err.to_string()))?;
    clipboard
        .set_image(ImageData {
            width,
            height,
            bytes: Cow::Owned(pixels),
        })
        .map_err(|err| DownloadError::Clipboard(err.to_string()))?;
    tracing::info!(width, height, "png copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn free_names_are_kept() {
        let path = unique_path(Path::new("/tmp/x"), "year-wrapped.png", "20250101_000000", |_| false);
        assert_eq!(path, PathBuf::from("/tmp/x/year-wrapped.png"));
    }

    #[test]
    fn clashing_names_get_a_timestamp() {
        let path = unique_path(Path::new("/tmp/x"), "year-wrapped.png", "20250101_000000", |_| true);
        assert_eq!(path, PathBuf::from("/tmp/x/year-wrapped-20250101_000000.png"));
        let bare = unique_path(Path::new("/tmp/x"), "card", "s", |_| true);
        assert_eq!(bare, PathBuf::from("/tmp/x/card-s"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn rgb_png_decodes_to_rgba() {
        let mut encoded = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut encoded, 2, 1);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[10, 20, 30, 40, 50, 60]).unwrap();
        }
        let (w, h, pixels) = decode_rgba(&encoded).unwrap();
        assert_eq!((w, h), (2, 1));
        assert_eq!(pixels, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }
}
