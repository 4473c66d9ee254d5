use dioxus::prelude::*;

use crate::bridge::use_page_bridge;
use crate::host::{BrowserHost, PageHost};
use crate::projects::ProjectRecord;

use super::state::{CarouselController, FADE_DELAY};
use super::view::{render_track, ModalView};

const CAROUSEL_CSS: Asset = asset!("/assets/styling/carousel.css");

const KEYS_SLOT: &str = "__pcrKeys";

/// Forwards every `keydown` on the window as its `KeyboardEvent.key` string.
const KEYS_SHARED: &str = r#"window.addEventListener("keydown", (e) => broadcast(e.key));"#;

type Controller = Signal<CarouselController<BrowserHost>>;

/// Auto-scrolling project strip with a detail modal.
///
/// Renders nothing for an empty catalog. The pause and speed controls can be
/// turned off individually.
#[component]
pub fn ProjectCarousel(
    projects: Vec<ProjectRecord>,
    #[props(default = true)] pause_control: bool,
    #[props(default = true)] speed_control: bool,
) -> Element {
    let lang = crate::use_lang()();
    let mut controller: Controller =
        use_signal(|| CarouselController::new(projects.clone(), BrowserHost));

    use_effect(use_reactive!(|projects| {
        if controller.peek().projects() != projects.as_slice() {
            controller.write().replace_projects(projects);
        }
    }));

    let (keys, doc) = use_page_bridge(KEYS_SLOT);
    use_future(move || {
        let doc = doc.clone();
        async move {
            let mut page = keys.connect(&doc, KEYS_SHARED, "");
            while let Ok(key) = page.recv::<String>().await {
                let Ok(key) = key.parse::<Key>() else {
                    continue;
                };
                if controller.peek().is_open() {
                    dismiss_on_key(&mut *controller.write(), &key);
                }
            }
        }
    });

    use_drop(|| BrowserHost.set_scroll_locked(false));

    let cards = render_track(controller.read().projects());
    if cards.is_empty() {
        return rsx! {};
    }

    let state = controller.read().state().clone();
    let speed = controller.read().speed();
    let modal = controller
        .read()
        .selection()
        .map(|(project, modal)| ModalView::from_state(project, modal));

    let pause_label = if state.is_paused {
        crate::t(lang, "carousel.resume")
    } else {
        crate::t(lang, "carousel.pause")
    };
    let speed_label = format!("{}: {}", crate::t(lang, "carousel.speed"), speed.label(lang));
    let open_prefix = crate::t(lang, "carousel.open_detail");
    let preview_prefix = crate::t(lang, "carousel.preview");
    let speed_css = speed.css_duration();

    rsx! {
        document::Link { rel: "stylesheet", href: CAROUSEL_CSS }

        section { class: "pcr",
            if pause_control || speed_control {
                div { class: "pcr-controls",
                    if pause_control {
                        button {
                            class: "btn pcr-btn",
                            r#type: "button",
                            "aria-pressed": "{state.is_paused}",
                            onclick: move |_| {
                                controller.write().toggle_pause();
                            },
                            "{pause_label}"
                        }
                    }
                    if speed_control {
                        button {
                            class: "btn pcr-btn",
                            r#type: "button",
                            onclick: move |_| {
                                controller.write().cycle_speed();
                            },
                            "{speed_label}"
                        }
                    }
                }
            }

            div {
                class: "pcr-viewport",
                "data-paused": "{state.is_paused}",
                style: "--pcr-speed: {speed_css}",
                div { class: "pcr-track",
                    for card in cards {
                        article {
                            key: "{card.index}",
                            class: "pcr-card",
                            role: "button",
                            tabindex: "0",
                            "aria-label": "{open_prefix} {card.title}",
                            "data-index": "{card.index}",
                            onclick: move |_| activate(controller, card.index),
                            onkeydown: move |evt: KeyboardEvent| {
                                if is_activation_key(&evt.key()) {
                                    evt.prevent_default();
                                    activate(controller, card.index);
                                }
                            },
                            div { class: "pcr-media",
                                img {
                                    src: "{card.cover}",
                                    alt: "{preview_prefix} {card.title}",
                                    loading: "lazy",
                                }
                                div { class: "pcr-shimmer", "aria-hidden": "true" }
                            }
                            div { class: "pcr-content",
                                div { class: "pcr-row",
                                    h3 { class: "pcr-card-title", dangerous_inner_html: "{card.title_html}" }
                                    span { class: "pcr-tag", dangerous_inner_html: "{card.tag_html}" }
                                }
                                p { class: "pcr-desc", dangerous_inner_html: "{card.desc_html}" }
                                div { class: "pcr-meta-row",
                                    span { class: "pcr-pill", "⏱ {card.days}" }
                                    span { class: "pcr-pill", "⚙ {card.tech_summary}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(view) = modal {
            ProjectModal { view, controller }
        }
    }
}

#[component]
fn ProjectModal(view: ModalView, controller: Controller) -> Element {
    let lang = crate::use_lang()();
    let mut controller = controller;
    let thumb_prefix = crate::t(lang, "carousel.thumbnail");
    let close_label = crate::t(lang, "carousel.close");

    rsx! {
        div {
            class: "pcr-modal",
            role: "dialog",
            "aria-modal": "true",
            // Only clicks landing on the backdrop itself reach this handler.
            onclick: move |_| {
                controller.write().close_modal();
            },
            div {
                class: "pcr-dialog",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "pcr-close",
                    r#type: "button",
                    "aria-label": "{close_label}",
                    onclick: move |_| {
                        controller.write().close_modal();
                    },
                    "✕"
                }
                header { class: "pcr-modal-head",
                    span { class: "pcr-badge", "{view.header.badge}" }
                    h2 { class: "pcr-modal-title", "{view.header.title}" }
                    p { class: "pcr-modal-desc", "{view.header.desc}" }
                    span { class: "pcr-days", "⏱ {view.header.days}" }
                }
                div { class: "pcr-gallery",
                    img {
                        class: "pcr-main-img",
                        src: "{view.gallery.main_src}",
                        style: "opacity: {view.gallery.main_opacity}",
                        alt: "{view.header.title}",
                    }
                    div { class: "pcr-thumbs",
                        for thumb in view.gallery.thumbnails.iter().cloned() {
                            button {
                                key: "{thumb.index}",
                                class: "pcr-thumb",
                                r#type: "button",
                                "aria-current": "{thumb.current}",
                                onclick: move |_| select(controller, thumb.index),
                                img {
                                    src: "{thumb.src}",
                                    alt: "{thumb_prefix} {thumb.position}",
                                    loading: "lazy",
                                }
                            }
                        }
                    }
                }
                div { class: "pcr-tech",
                    for chip in view.tech.iter() {
                        span { class: "pcr-chip", "{chip}" }
                    }
                }
                ul { class: "pcr-includes",
                    for item in view.includes.iter() {
                        li { "{item}" }
                    }
                }
                div { class: "pcr-cta",
                    a {
                        class: "btn",
                        href: "{view.cta_href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {crate::t(lang, "carousel.cta_link")}
                    }
                    button {
                        class: "btn primary",
                        r#type: "button",
                        onclick: move |_| controller.read().launch_cta(),
                        {crate::t(lang, "carousel.cta")}
                    }
                }
            }
        }
    }
}

fn activate(mut controller: Controller, index: usize) {
    controller.write().open_modal(index);
}

/// Run the two-phase thumbnail switch: fade out now, swap after [`FADE_DELAY`].
fn select(mut controller: Controller, index: usize) {
    let Some(ticket) = controller.write().select_thumbnail(index) else {
        return;
    };
    spawn(async move {
        gloo_timers::future::sleep(FADE_DELAY).await;
        controller.write().finish_fade(ticket);
    });
}

pub(crate) fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Close an open modal on a dismiss key. Returns whether it closed.
pub(crate) fn dismiss_on_key<H: PageHost>(controller: &mut CarouselController<H>, key: &Key) -> bool {
    is_dismiss_key(key) && controller.close_modal()
}

pub(crate) fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fake::RecordingHost;

    #[test]
    fn enter_and_space_activate_cards() {
        assert!(is_activation_key(&Key::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string())));
        assert!(!is_activation_key(&Key::Character("a".to_string())));
        assert!(!is_activation_key(&Key::Escape));
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key(&Key::Escape));
        assert!(!is_dismiss_key(&Key::Enter));
        assert!(!is_dismiss_key(&Key::Character(" ".to_string())));
        assert_eq!("Escape".parse::<Key>().ok(), Some(Key::Escape));
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        let project = ProjectRecord {
            title: "a".into(),
            ..Default::default()
        };
        let mut c = CarouselController::new(vec![project], RecordingHost::default());

        assert!(!dismiss_on_key(&mut c, &Key::Escape));
        assert!(c.host().lock_calls.is_empty());

        c.open_modal(0);
        assert!(!dismiss_on_key(&mut c, &Key::Enter));
        assert!(c.is_open());

        assert!(dismiss_on_key(&mut c, &Key::Escape));
        assert!(!c.is_open());
        assert_eq!(c.host().lock_calls, [true, false]);
        assert!(!dismiss_on_key(&mut c, &Key::Escape));
    }
}
