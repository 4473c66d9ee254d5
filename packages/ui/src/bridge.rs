//! Window-level listeners shared by every mounted component instance.
//!
//! A slot is a `Map` on `window`. Its `shared` script runs once per page and
//! reaches instances through `broadcast(message)`. Each instance registers its
//! `dioxus.send` under a numeric id, plus an optional dispose function
//! returned by its `local` script, and removes both when it unmounts.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document::{self, Document, Eval};
use dioxus::prelude::*;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(1);

/// A registered page listener for one component instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PageBridge {
    slot: &'static str,
    id: usize,
}

impl PageBridge {
    pub(crate) fn new(slot: &'static str) -> Self {
        Self {
            slot,
            id: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub(crate) fn id(self) -> usize {
        self.id
    }

    /// Register this instance. `shared` sees `broadcast` and `slot`; `local`
    /// sees `send` and may return a dispose function.
    pub(crate) fn connect_script(self, shared: &str, local: &str) -> String {
        let slot = js_name(self.slot);
        let id = self.id;
        format!(
            r#"(function(){{
  const slot = window[{slot}] || (window[{slot}] = new Map());
  if (!slot.installed) {{
    slot.installed = true;
    const broadcast = (m) => slot.forEach((entry) => entry.send(m));
    {shared}
  }}
  const send = (m) => dioxus.send(m);
  const dispose = (function(){{ {local} }})();
  slot.set({id}, {{ send, dispose }});
}})();"#
        )
    }

    pub(crate) fn release_script(self) -> String {
        let slot = js_name(self.slot);
        let id = self.id;
        format!(
            r#"(function(){{
  const slot = window[{slot}];
  if (!slot) return;
  const entry = slot.get({id});
  if (entry && typeof entry.dispose === "function") entry.dispose();
  slot.delete({id});
}})();"#
        )
    }

    pub(crate) fn connect(self, doc: &Rc<dyn Document>, shared: &str, local: &str) -> Eval {
        doc.eval(self.connect_script(shared, local))
    }
}

/// Allocate a bridge for this component and release it when it unmounts.
pub(crate) fn use_page_bridge(slot: &'static str) -> (PageBridge, Rc<dyn Document>) {
    let bridge = use_hook(|| PageBridge::new(slot));
    let doc = use_hook(document::document);
    let release_doc = doc.clone();
    use_drop(move || {
        let _ = release_doc.eval(bridge.release_script());
        tracing::trace!(slot = bridge.slot, id = bridge.id, "page listener released");
    });
    (bridge, doc)
}

fn js_name(slot: &str) -> String {
    serde_json::to_string(slot).unwrap_or_else(|_| "\"__landing\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_get_distinct_ids() {
        let a = PageBridge::new("__test");
        let b = PageBridge::new("__test");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn shared_listener_is_installed_once_per_slot() {
        let bridge = PageBridge { slot: "__pcrKeys", id: 7 };
        let script = bridge.connect_script("window.addEventListener(\"keydown\", f);", "");
        assert!(script.contains(r#"window["__pcrKeys"] || (window["__pcrKeys"] = new Map())"#));
        assert!(script.contains("if (!slot.installed)"));
        assert!(script.contains("slot.set(7, { send, dispose })"));
        assert_eq!(script.matches("addEventListener").count(), 1);
    }

    #[test]
    fn release_disposes_and_forgets_the_instance() {
        let bridge = PageBridge { slot: "__pcrKeys", id: 7 };
        let script = bridge.release_script();
        assert!(script.contains("slot.get(7)"));
        assert!(script.contains("entry.dispose()"));
        assert!(script.contains("slot.delete(7)"));
    }
}
