#![cfg(test)]
//! The desktop build embeds the shared theme from `ui/assets/theme/main.css`.
//! A truncated file or a broken path would only show up as unstyled slides at
//! runtime, so check it here.
//!
//! If you rename or relocate the theme, update both this test and the
//! `THEME_CSS` constant in `ui/src/lib.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--real-vh", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn embedded_css_matches_ui_constant() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS);
}
