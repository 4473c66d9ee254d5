use dioxus::prelude::*;
use serde::Deserialize;

use crate::bridge::use_page_bridge;

/// `<model-viewer>` web component bundle.
pub const MODEL_VIEWER_JS: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js";

const VIEWER_SLOT: &str = "__landingModelViewer";

/// Releasing the pointer anywhere on the page resumes rotation.
const VIEWER_SHARED: &str = r#"window.addEventListener("pointerup", () => broadcast({ kind: "release" }), { passive: true });
window.addEventListener("touchend", () => broadcast({ kind: "release" }), { passive: true });"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ViewerSignal {
    Release,
    Loaded {
        #[serde(default)]
        animations: Vec<String>,
    },
}

/// `auto-rotate` is a boolean attribute: present while rotating, absent otherwise.
pub fn auto_rotate_attr(rotating: bool) -> Option<&'static str> {
    rotating.then_some("")
}

fn load_script(id: &str) -> String {
    let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"const mv = document.getElementById({id});
if (!mv) return null;
const onLoad = () => send({{ kind: "loaded", animations: Array.from(mv.availableAnimations || []) }});
mv.addEventListener("load", onLoad);
return () => mv.removeEventListener("load", onLoad);"#
    )
}

/// Auto-rotating 3D model. Rotation pauses while the user drags it.
#[component]
pub fn ModelViewer(
    src: String,
    #[props(default)] alt: String,
    #[props(default)] poster: String,
    #[props(default)] class: String,
) -> Element {
    let (bridge, doc) = use_page_bridge(VIEWER_SLOT);
    let id = use_hook(|| format!("model-viewer-{}", bridge.id()));
    let mut rotating = use_signal(|| true);
    let script = load_script(&id);

    rsx! {
        document::Script { r#type: "module", src: MODEL_VIEWER_JS }

        model-viewer {
            "id": "{id}",
            "class": "model-viewer {class}",
            "src": "{src}",
            "alt": "{alt}",
            "poster": "{poster}",
            "camera-controls": "",
            "auto-rotate": auto_rotate_attr(rotating()),
            onpointerdown: move |_| rotating.set(false),
            ontouchstart: move |_| rotating.set(false),
            onmounted: move |_| {
                let mut page = bridge.connect(&doc, VIEWER_SHARED, &script);
                async move {
                    while let Ok(signal) = page.recv::<ViewerSignal>().await {
                        match signal {
                            ViewerSignal::Release => {
                                if !*rotating.peek() {
                                    rotating.set(true);
                                }
                            }
                            ViewerSignal::Loaded { animations } => {
                                tracing::debug!(?animations, "model loaded");
                            }
                        }
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_rotate_is_dropped_while_dragging() {
        assert_eq!(auto_rotate_attr(true), Some(""));
        assert_eq!(auto_rotate_attr(false), None);
    }

    #[test]
    fn viewer_signals_deserialize() {
        let signal: ViewerSignal = serde_json::from_str(r#"{"kind":"release"}"#).unwrap();
        assert_eq!(signal, ViewerSignal::Release);

        let signal: ViewerSignal =
            serde_json::from_str(r#"{"kind":"loaded","animations":["Idle","Wave"]}"#).unwrap();
        assert_eq!(
            signal,
            ViewerSignal::Loaded {
                animations: vec!["Idle".into(), "Wave".into()]
            }
        );

        let signal: ViewerSignal = serde_json::from_str(r#"{"kind":"loaded"}"#).unwrap();
        assert_eq!(signal, ViewerSignal::Loaded { animations: vec![] });
    }

    #[test]
    fn release_listens_on_the_window_for_mouse_and_touch() {
        assert!(VIEWER_SHARED.contains(r#"window.addEventListener("pointerup""#));
        assert!(VIEWER_SHARED.contains(r#"window.addEventListener("touchend""#));
    }

    #[test]
    fn load_listener_reports_animations_and_detaches() {
        let script = load_script("model-viewer-4");
        assert!(script.contains(r#"getElementById("model-viewer-4")"#));
        assert!(script.contains("mv.availableAnimations"));
        assert!(script.contains(r#"removeEventListener("load", onLoad)"#));
    }
}
