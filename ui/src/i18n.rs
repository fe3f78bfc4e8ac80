//! Internationalization (i18n) support for `recap-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   bn-BD/recap-ui.ftl   (fallback/reference)
//!   en-US/recap-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("home-title");
//! let footer = t!("final-rank", rank = ordinal);
//! ```
//!
//! Digits are not localized by Fluent. Callers format numbers with
//! [`crate::core::format`] using [`number_style`] and pass them in as strings.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in that target-specific dependency section).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::core::format::NumberStyle;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("home-title")
///     t!("quarter-label", n = "৩")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/bn-BD/{DOMAIN}.ftl`
const DOMAIN: &str = "recap-ui";

/// Locale used when nothing requested is available.
pub const FALLBACK_LANGUAGE: &str = "bn-BD";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        // Bidi isolation marks would leak into share cards and test strings.
        LOADER.set_use_isolating(false);
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the language currently selected by the loader.
pub fn current_language() -> String {
    use i18n_embed::LanguageLoader;
    LOADER.current_language().to_string()
}

/// Digit style matching the active language.
pub fn number_style() -> NumberStyle {
    if current_language().starts_with("bn") {
        NumberStyle::Bengali
    } else {
        NumberStyle::Latin
    }
}

/// Native display name for a language tag, for the locale picker.
pub fn language_label(tag: &str) -> &'static str {
    match tag.split('-').next().unwrap_or_default() {
        "bn" => "বাংলা",
        "en" => "English",
        _ => "?",
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn shipped_languages_are_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "bn-BD"));
        assert!(langs.iter().any(|l| l == "en-US"));
    }

    #[test]
    fn switching_language_changes_copy_and_digits() {
        init();
        set_language("en-US").expect("en-US is embedded");
        assert_eq!(fl!(&*LOADER, "share-button"), "Share");
        assert_eq!(number_style(), NumberStyle::Latin);

        set_language("bn-BD").expect("bn-BD is embedded");
        assert_eq!(fl!(&*LOADER, "share-button"), "শেয়ার");
        assert_eq!(number_style(), NumberStyle::Bengali);
    }

    #[test]
    fn invalid_tag_is_ignored() {
        assert!(set_language("not a tag!").is_ok());
    }

    #[test]
    fn labels_cover_shipped_languages() {
        assert_eq!(language_label("bn-BD"), "বাংলা");
        assert_eq!(language_label("en-US"), "English");
    }
}
