use dioxus::prelude::*;
use ui::{Counter, Faq, FaqItem, Hero, ModelViewer, ProjectCarousel, Spotlight, Tilt};

const SHOWCASE_MODEL: &str = "https://modelviewer.dev/shared-assets/models/Astronaut.glb";

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang()();
    let projects = use_hook(ui::builtin_catalog);
    let faq: Vec<FaqItem> = (1..=3)
        .map(|i| FaqItem {
            question: ui::t(lang, &format!("faq.q{i}")),
            answer: ui::t(lang, &format!("faq.a{i}")),
        })
        .collect();

    rsx! {
        section { id: "proceso",
            Hero {}
            div { class: "showcase", "data-reveal": "",
                ModelViewer { src: SHOWCASE_MODEL, alt: ui::t(lang, "hero.model_alt") }
            }
            ol { class: "steps", "data-reveal": "", "data-delay": "120",
                for i in 1..=3 {
                    li { key: "{i}", {ui::t(lang, &format!("process.step{i}"))} }
                }
            }
        }

        section { id: "servicios", "data-reveal": "",
            h2 { {ui::t(lang, "projects.title")} }
            ProjectCarousel { projects }
        }

        section { id: "beneficios",
            div { class: "stats", "data-reveal": "",
                Tilt { class: "stat",
                    Counter { to: 40, suffix: "+" }
                    p { class: "hint", {ui::t(lang, "stats.projects")} }
                }
                Tilt { class: "stat",
                    Counter { to: 9 }
                    p { class: "hint", {ui::t(lang, "stats.days")} }
                }
                Tilt { class: "stat",
                    Counter { to: 98, suffix: "%" }
                    p { class: "hint", {ui::t(lang, "stats.satisfaction")} }
                }
            }
        }

        section { id: "precios",
            h2 { {ui::t(lang, "nav.pricing")} }
            div { class: "pricing", "data-reveal": "", "data-delay": "80",
                Spotlight { class: "plan spotlight",
                    h3 { {ui::t(lang, "pricing.starter")} }
                    p { class: "price", "USD 290" }
                    p { class: "hint", {ui::t(lang, "pricing.starter.body")} }
                }
                Spotlight { class: "plan spotlight",
                    h3 { {ui::t(lang, "pricing.growth")} }
                    p { class: "price", "USD 590" }
                    p { class: "hint", {ui::t(lang, "pricing.growth.body")} }
                }
            }
        }

        section { id: "faq", "data-reveal": "",
            h2 { {ui::t(lang, "faq.title")} }
            Faq { items: faq }
        }
    }
}
