//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use waypoint_core::{HistoryBackend, HostLocation};
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// History backend over `window.location` and `window.history`.
///
/// Holds no handles; every call looks the window up again, so the type is
/// `Send + Sync` and can live in reactive storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn location(&self) -> HostLocation {
        let Some(location) = window().map(|w| w.location()) else {
            return HostLocation::default();
        };
        HostLocation {
            pathname: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    /// Adds an entry. `pushState` fires neither `popstate` nor `hashchange`.
    fn push(&mut self, href: &str) {
        if let Some(window) = window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
        }
    }

    fn replace(&mut self, href: &str) {
        if let Some(window) = window()
            && let Ok(history) = window.history()
        {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(href));
        }
    }

    /// Asynchronous in the browser: the new location arrives with `popstate`.
    fn go(&mut self, delta: isize) {
        if let Some(window) = window()
            && let Ok(history) = window.history()
        {
            let _ = history.go_with_delta(delta as i32);
        }
    }
}
