/// Replace `& < > " '` with their character references.
///
/// Ampersand goes first so already-produced references are never escaped twice.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Inverse of [`escape_html`]. `&amp;` is decoded last.
#[cfg(test)]
pub(crate) fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("&#039;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}
