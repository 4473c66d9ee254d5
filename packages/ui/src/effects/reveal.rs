use dioxus::prelude::*;

use crate::bridge::use_page_bridge;

/// Reveal-on-scroll settings shared by every page.
///
/// Elements matching `selector` receive `class` once `threshold` of them is
/// visible, then stop being observed. A numeric `data-delay` attribute (ms)
/// becomes the element's transition delay.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: "[data-reveal]".to_string(),
            threshold: 0.15,
            class: "in".to_string(),
        }
    }
}

impl RevealConfig {
    /// Observer body for a page bridge. Elements added later are picked up by
    /// a MutationObserver. Without IntersectionObserver everything is revealed
    /// at once. Reports how many elements it started watching.
    pub fn script(&self) -> String {
        let selector = js_string(&self.selector);
        let class = js_string(&self.class);
        let threshold = clamp_threshold(self.threshold);
        format!(
            r#"const selector = {selector};
const onBody = (fn) => {{
  const mo = new MutationObserver(fn);
  mo.observe(document.body, {{ childList: true, subtree: true }});
  return mo;
}};
if (!("IntersectionObserver" in window)) {{
  const revealAll = () => document.querySelectorAll(selector).forEach((el) => el.classList.add({class}));
  revealAll();
  const mo = onBody(revealAll);
  send(0);
  return () => mo.disconnect();
}}
const io = new IntersectionObserver((entries) => {{
  entries.forEach((e) => {{
    if (!e.isIntersecting) return;
    const el = e.target;
    const d = Number(el.getAttribute("data-delay") || "0");
    if (d) el.style.transitionDelay = d + "ms";
    el.classList.add({class});
    io.unobserve(el);
  }});
}}, {{ threshold: {threshold} }});
const seen = new WeakSet();
const watch = () => {{
  let added = 0;
  document.querySelectorAll(selector).forEach((el) => {{
    if (seen.has(el) || el.classList.contains({class})) return;
    seen.add(el);
    io.observe(el);
    added += 1;
  }});
  return added;
}};
const mo = onBody(watch);
send(watch());
return () => {{ mo.disconnect(); io.disconnect(); }};"#
        )
    }
}

fn clamp_threshold(t: f64) -> f64 {
    if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

const REVEAL_SLOT: &str = "__landingReveal";

/// Wraps page content and keeps revealing marked elements while mounted,
/// including ones rendered after a route change.
#[component]
pub fn RevealScope(#[props(default)] config: Option<RevealConfig>, children: Element) -> Element {
    let script = config.unwrap_or_default().script();
    let (bridge, doc) = use_page_bridge(REVEAL_SLOT);

    rsx! {
        div {
            class: "reveal_scope",
            onmounted: move |_| {
                let mut observer = bridge.connect(&doc, "", &script);
                async move {
                    match observer.recv::<usize>().await {
                        Ok(count) => tracing::debug!(count, "reveal observer attached"),
                        Err(err) => tracing::debug!("reveal observer failed: {err:?}"),
                    }
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reveals_data_reveal_elements() {
        let script = RevealConfig::default().script();
        assert!(script.contains(r#"const selector = "[data-reveal]";"#));
        assert!(script.contains("threshold: 0.15"));
        assert!(script.contains(r#"classList.add("in")"#));
        assert!(script.contains("data-delay"));
    }

    #[test]
    fn selector_is_quoted_for_js() {
        let config = RevealConfig {
            selector: r#".card[data-x="1"]"#.to_string(),
            threshold: 3.0,
            class: "shown".to_string(),
        };
        let script = config.script();
        assert!(script.contains(r#"const selector = ".card[data-x=\"1\"]";"#));
        assert!(script.contains("threshold: 1"));
        assert!(script.contains(r#"classList.add("shown")"#));
    }

    #[test]
    fn later_mounted_elements_are_observed_until_dispose() {
        let script = RevealConfig::default().script();
        assert!(script.contains("new MutationObserver(fn)"));
        assert!(script.contains("childList: true, subtree: true"));
        assert!(script.contains("const mo = onBody(watch);"));
        assert!(script.contains("seen.has(el)"));
        assert!(script.contains("return () => { mo.disconnect(); io.disconnect(); };"));
    }
}
