#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Every class the slide components and the share modal put on the page must
exist in the unified theme (`ui/assets/theme/main.css`). A substring check
is enough to catch a renamed or dropped selector before it ships.

When you rename a class in a component, update REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Slide frame
    ".slide {",
    ".slide--sharing",
    ".slide__capture",
    ".slide__brand",
    ".slide-card",
    ".slide-heading__title",
    ".slide-footer",
    ".arrow-button--prev",
    ".arrow-button--next",
    ".dot--active",
    ".share-button",
    // Slide parts
    ".stat-row",
    ".stat-tile__value",
    ".delta-badge",
    ".trend--up",
    ".trend--down",
    ".trend--same",
    // Charts
    ".ring__value",
    ".bar-chart__bar",
    ".bar-chart__bar--peak",
    ".progress__fill",
    ".podium__step--1",
    ".podium__step--2",
    ".podium__step--3",
    ".streak-box--done",
    ".streak-box--next",
    ".streak-box--pending",
    ".streak-box--empty",
    ".stat-tile--pink",
    ".stat-tile--yellow",
    ".stat-tile--red",
    ".donut__segment--blue",
    ".donut__segment--pink",
    ".donut__segment--yellow",
    ".legend__swatch--yellow",
    ".roadmap__stop--reached",
    ".star--filled",
    ".final__score-value",
    // Decorations
    ".confetti",
    "@keyframes fall",
    ".bunting__flag--pink",
    // Share fallback modal
    ".modal-backdrop",
    ".modal__preview",
    ".modal__actions",
    ".modal__status--error",
    // Screens
    ".status-screen",
    ".spinner",
    ".student-list__link",
    ".mode-tab--selected",
    ".navbar__locale",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

#[test]
fn streak_states_are_styled_as_a_set() {
    let states = ["done", "next", "pending", "empty"];
    let styled = states
        .iter()
        .filter(|s| THEME_CSS.contains(&format!(".streak-box--{s}")))
        .count();
    assert_eq!(styled, states.len());
}
