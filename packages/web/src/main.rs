// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use listing_core::SiteMetadata;
use ui::listing::ListingPage;
use ui::{Footer, SiteHead};

mod config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    match config::WebConfig::from_env() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(config.log_level)
                .init();
            tracing::info!("Serving listing for {}", config.base_url);
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .init();
            tracing::warn!("{}; using info", e);
        }
    }
}

#[component]
fn App() -> Element {
    let metadata = use_hook(|| SiteMetadata::default().with_base_url(config::base_url()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SiteHead { metadata }

        Router::<Route> {}
    }
}

/// The listing page followed by the site footer.
#[component]
fn Home() -> Element {
    rsx! {
        ListingPage {}
        Footer {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Browse stocker jobs" }
        }
    }
}
