use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const EFFECTS_CSS: Asset = asset!("/assets/styling/effects.css");

#[component]
pub fn LandingTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: EFFECTS_CSS }
    }
}
