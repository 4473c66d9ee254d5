use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "unknown route");

    rsx! {
        div { class: "panel",
            h2 { "404" }
            p { class: "hint", "/{path}" }
            a { class: "btn primary", href: "/", "←" }
        }
    }
}
