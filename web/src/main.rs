use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Deck, DeckSlide, Home, InvalidUrl, ModeRedirect, ModeSelect};
use ui::{RecapProvider, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[layout(WebNavbar)]
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

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder { home: nav_home });
    }

    // Written by the navbar's locale switcher; views read it to re-render.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }
        // Inline so the DOM capture path and the page share one stylesheet.
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// Root providers around every route.
#[component]
fn Shell() -> Element {
    rsx! {
        RecapProvider {
            Outlet::<Route> {}
        }
    }
}

/// Navbar for the picker screens; slides run full-bleed.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
