//! Plain-data slide summary and its SVG rendering.
//!
//! Hosts that cannot rasterize the live DOM draw this card instead.

use crate::slides::theme::Gradient;

pub const CARD_WIDTH: u32 = 1080;
pub const CARD_HEIGHT: u32 = 1350;

const FONT_STACK: &str = "Noto Sans Bengali, Hind Siliguri, Noto Sans, sans-serif";

#[derive(Debug, Clone, PartialEq)]
pub struct CardLine {
    pub label: String,
    pub value: String,
}

impl CardLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareCard {
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<CardLine>,
    pub footer: String,
    pub gradient: Gradient,
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn card_svg(card: &ShareCard) -> String {
    let w = CARD_WIDTH;
    let h = CARD_HEIGHT;
    let mut svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n  \
         <defs>\n    <linearGradient id='bg' x1='0' y1='0' x2='0.6' y2='1'>\n      \
         <stop offset='0%' stop-color='{start}'/>\n      \
         <stop offset='100%' stop-color='{end}'/>\n    </linearGradient>\n  </defs>\n  \
         <rect width='{w}' height='{h}' fill='url(#bg)'/>\n",
        start = card.gradient.start,
        end = card.gradient.end,
    );

    svg.push_str(&format!(
        "  <text x='90' y='220' fill='#ffffff' font-family='{FONT_STACK}' font-size='72' font-weight='700'>{}</text>\n",
        escape_xml(&card.title)
    ));
    svg.push_str(&format!(
        "  <text x='90' y='300' fill='#ffffff' fill-opacity='0.78' font-family='{FONT_STACK}' font-size='40'>{}</text>\n",
        escape_xml(&card.subtitle)
    ));

    let mut y = 460u32;
    for line in &card.lines {
        svg.push_str(&format!(
            "  <rect x='90' y='{top}' width='900' height='130' rx='28' fill='#ffffff' fill-opacity='0.14'/>\n  \
             <text x='130' y='{label_y}' fill='#ffffff' fill-opacity='0.8' font-family='{FONT_STACK}' font-size='34'>{label}</text>\n  \
             <text x='950' y='{label_y}' text-anchor='end' fill='#ffffff' font-family='{FONT_STACK}' font-size='48' font-weight='700'>{value}</text>\n",
            top = y,
            label_y = y + 80,
            label = escape_xml(&line.label),
            value = escape_xml(&line.value),
        ));
        y = y.saturating_add(160);
    }

    if !card.footer.is_empty() {
        svg.push_str(&format!(
            "  <text x='540' y='{fy}' text-anchor='middle' fill='#ffffff' fill-opacity='0.85' font-family='{FONT_STACK}' font-size='34'>{}</text>\n",
            escape_xml(&card.footer),
            fy = h - 110,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Rasterize the card with system fonts.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_png(card: &ShareCard) -> Result<Vec<u8>, super::CaptureError> {
    use super::CaptureError;
    use once_cell::sync::Lazy;
    use std::sync::Arc;

    static FONTS: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    });

    let mut options = usvg::Options::default();
    options.fontdb = FONTS.clone();

    let tree = usvg::Tree::from_str(&card_svg(card), &options)
        .map_err(|err| CaptureError::Render(err.to_string()))?;
    let mut pixmap = tiny_skia::Pixmap::new(CARD_WIDTH, CARD_HEIGHT)
        .ok_or_else(|| CaptureError::Render("empty canvas".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|err| CaptureError::Encode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShareCard {
        ShareCard {
            title: "Attendance & <Quiz>".into(),
            subtitle: "Rahim".into(),
            lines: vec![
                CardLine::new("Attendance", "৯২%"),
                CardLine::new("Quiz", "৮৫%"),
            ],
            footer: "Keep going".into(),
            gradient: Gradient {
                start: "#0f6b5c",
                end: "#1fb89a",
            },
        }
    }

    #[test]
    fn svg_escapes_text_and_draws_every_line() {
        let svg = card_svg(&sample());
        assert!(svg.contains("Attendance &amp; &lt;Quiz&gt;"));
        assert!(!svg.contains("<Quiz>"));
        assert_eq!(svg.matches("fill-opacity='0.14'").count(), 2);
        assert!(svg.contains("stop-color='#0f6b5c'"));
        assert!(svg.contains("Keep going"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn renders_a_png_of_card_size() {
        let png = render_png(&sample()).expect("render");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoder = png::Decoder::new(png.as_slice());
        let reader = decoder.read_info().expect("header");
        assert_eq!(reader.info().width, CARD_WIDTH);
        assert_eq!(reader.info().height, CARD_HEIGHT);
    }
}
