//! Browser environment access (location, clipboard).
//!
//! Everything here is best-effort with non-browser fallbacks so pages and
//! components never need to touch `web_sys` directly.

/// Page origin, e.g. `https://boards.example.com`.
/// Falls back to the local dev origin outside a browser.
#[must_use]
pub fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    "http://localhost:3000".to_owned()
}

/// Full address of the current page, empty outside a browser.
#[must_use]
pub fn current_href() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
            return href;
        }
    }
    String::new()
}

/// Write `text` to the system clipboard. Best-effort: denial or absence of
/// the clipboard API is silently ignored.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
