//! Shared UI crate for Recap. Slides, routing, sharing and views live here;
//! the platform crates only own the `Route` enum and the window.

pub mod app;
pub mod core;
pub mod i18n;
pub mod records;
pub mod session;
pub mod share;
pub mod slides;
pub mod views;

pub mod components {
    // Localized top bar with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod error_display;
    pub mod fallback_modal;
    pub mod loading;
    pub mod slide_frame;
}

pub use app::RecapProvider;

/// The unified theme, embedded for desktop and for DOM capture on the web.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
