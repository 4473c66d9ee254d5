use dioxus::prelude::*;
use serde::Deserialize;

use crate::bridge::use_page_bridge;

/// A page section linked from the nav bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub id: String,
    pub label_key: String,
}

impl NavSection {
    pub fn new(id: &str, label_key: &str) -> Self {
        Self {
            id: id.to_string(),
            label_key: label_key.to_string(),
        }
    }
}

/// One IntersectionObserver entry reported from the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionHit {
    pub id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

/// The intersecting section with the largest visible ratio.
pub fn most_visible(hits: &[SectionHit]) -> Option<&str> {
    hits.iter()
        .filter(|h| h.intersecting && !h.id.is_empty())
        .max_by(|a, b| a.ratio.total_cmp(&b.ratio))
        .map(|h| h.id.as_str())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PageSignal {
    Sections { hits: Vec<SectionHit> },
    Escape,
    Outside,
}

const NAV_SLOT: &str = "__landingNav";

/// Page-wide dismissal triggers for the mobile menu.
const NAV_SHARED: &str = r#"document.addEventListener("keydown", (e) => {
  if (e.key === "Escape") broadcast({ kind: "escape" });
});
document.addEventListener("click", (e) => {
  const nav = document.querySelector(".landing_nav");
  if (nav && !nav.contains(e.target)) broadcast({ kind: "outside" });
});"#;

/// Scroll-spy for one navbar. Returns the observer's disconnect as dispose.
fn observer_script(ids: &[String]) -> String {
    let ids = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"const sections = {ids}.map((id) => document.getElementById(id)).filter(Boolean);
if (!sections.length || !("IntersectionObserver" in window)) return null;
const io = new IntersectionObserver((entries) => {{
  send({{
    kind: "sections",
    hits: entries.map((e) => ({{ id: e.target.id, ratio: e.intersectionRatio, intersecting: e.isIntersecting }})),
  }});
}}, {{ threshold: [0.25, 0.5, 0.75] }});
sections.forEach((s) => io.observe(s));
return () => io.disconnect();"#
    )
}

/// Top navigation with a collapsible mobile menu and scroll-spy highlighting.
#[component]
pub fn Navbar(brand: String, sections: Vec<NavSection>) -> Element {
    let lang = crate::use_lang()();
    let mut menu_open = use_signal(|| false);
    let mut active = use_signal(|| None::<String>);
    let ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    let menu_label = crate::t(lang, "nav.menu");
    let (bridge, doc) = use_page_bridge(NAV_SLOT);

    rsx! {
        nav { class: "landing_nav",
            onmounted: move |_| {
                let mut page = bridge.connect(&doc, NAV_SHARED, &observer_script(&ids));
                async move {
                    while let Ok(signal) = page.recv::<PageSignal>().await {
                        match signal {
                            PageSignal::Escape | PageSignal::Outside => {
                                if *menu_open.peek() {
                                    menu_open.set(false);
                                }
                            }
                            PageSignal::Sections { hits } => {
                                if let Some(id) = most_visible(&hits) {
                                    active.set(Some(id.to_string()));
                                }
                            }
                        }
                    }
                }
            },
            a { class: "brand", href: "#", "{brand}" }
            button {
                class: "nav_toggle",
                r#type: "button",
                "aria-label": "{menu_label}",
                "aria-expanded": "{menu_open}",
                onclick: move |_| {
                    let next = !menu_open();
                    menu_open.set(next);
                },
                "☰"
            }
            div { class: if menu_open() { "nav-links open" } else { "nav-links" },
                for section in sections.iter() {
                    a {
                        key: "{section.id}",
                        class: if active().as_deref() == Some(section.id.as_str()) { "nav-link active" } else { "nav-link" },
                        href: "#{section.id}",
                        onclick: move |_| menu_open.set(false),
                        {crate::t(lang, &section.label_key)}
                    }
                }
                crate::LangSwitch {}
            }
        }
    }
}
