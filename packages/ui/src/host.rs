//! Side effects the landing components need from the surrounding page.
//!
//! Everything here degrades to a no-op outside the browser (SSR, native tests).

/// Page-level effects the carousel triggers besides its own markup.
pub trait PageHost {
    /// Suspend (`true`) or restore (`false`) background page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
    /// Fire-and-forget: open `url` in a new browsing context.
    fn open_in_new_context(&self, url: &str);
}

/// [`PageHost`] backed by the real `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl PageHost for BrowserHost {
    fn set_scroll_locked(&mut self, locked: bool) {
        set_body_overflow(if locked { "hidden" } else { "" });
    }

    fn open_in_new_context(&self, url: &str) {
        open_window(url);
    }
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::debug!("no document body; scroll lock skipped");
        return;
    };
    if body.style().set_property("overflow", value).is_err() {
        tracing::debug!("could not set body overflow");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(_value: &str) {}

#[cfg(target_arch = "wasm32")]
fn open_window(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_window(_url: &str) {}

/// Read a value from `localStorage`. Storage access may be denied; that reads as `None`.
#[cfg(target_arch = "wasm32")]
pub fn stored_value(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten().filter(|v| !v.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn stored_value(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn store_value(key: &str, value: &str) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                tracing::debug!(key, "localStorage write rejected");
            }
        }
        None => tracing::debug!(key, "localStorage unavailable"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_value(_key: &str, _value: &str) {}

/// `navigator.language`, when the browser exposes one.
#[cfg(target_arch = "wasm32")]
pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_language() -> Option<String> {
    None
}

/// Inner size of the browser window in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> Option<(f64, f64)> {
    None
}
