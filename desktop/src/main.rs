#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, LogicalSize};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Deck, DeckSlide, Home, InvalidUrl, ModeRedirect, ModeSelect};
use ui::{RecapProvider, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[layout(DesktopNavbar)]
            #[route("/")]
            Home {},
            #[route("/:student_id/:program_id/select-mode")]
            ModeSelect { student_id: String, program_id: String },
        #[end_layout]
        #[route("/:student_id/:program_id")]
        ModeRedirect { student_id: String, program_id: String },
        #[route("/:student_id/:program_id/:mode")]
        Deck { student_id: String, program_id: String, mode: String },
        #[route("/:student_id/:program_id/:mode/:slide")]
        DeckSlide { student_id: String, program_id: String, mode: String, slide: String },
        #[route("/:..segments")]
        InvalidUrl { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    // Portrait window sized for the 4:5 slide card.
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Recap – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(560.0, 900.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes this on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { home: nav_home });

    rsx! {
        // Always inline the embedded theme; desktop ships no asset directory.
        document::Style { "{THEME_CSS}" }

        // Key the routed subtree by language to force a full remount on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        RecapProvider {
            Outlet::<Route> {}
        }
    }
}

/// A desktop-specific layout around the shared `AppNavbar`, shown on the
/// picker screens only.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
