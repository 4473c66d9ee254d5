use dioxus::prelude::*;

use views::{Home, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(LandingLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

#[component]
fn App() -> Element {
    use_hook(|| {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            "startup: landing app mounted"
        );
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::LandingTheme {}
        ui::I18nProvider {
            Router::<Route> {}
        }
    }
}

/// Shared chrome for every page: nav bar, cursor glow and reveal observer.
#[component]
fn LandingLayout() -> Element {
    let sections = vec![
        ui::NavSection::new("proceso", "nav.process"),
        ui::NavSection::new("servicios", "nav.services"),
        ui::NavSection::new("beneficios", "nav.benefits"),
        ui::NavSection::new("precios", "nav.pricing"),
        ui::NavSection::new("faq", "nav.faq"),
    ];

    rsx! {
        ui::CursorGlow {
            ui::Navbar { brand: "Estudio Web".to_string(), sections }
            ui::RevealScope {
                main { class: "landing_container", Outlet::<Route> {} }
            }
        }
    }
}
