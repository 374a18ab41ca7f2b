// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use thiserror::Error;

/// An error that can occur when writing to the system clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write was denied: {0}")]
    Denied(String),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::ClipboardError;
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, ScrollBehavior, ScrollIntoViewOptions, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> Result<(), ClipboardError> {
        let clipboard = web_sys::window()
            .map(|win: Window| win.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;
        let promise = clipboard.write_text(&text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Denied(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }

    /// Width of the layout viewport in logical pixels.
    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    /// Smoothly scrolls the element with `id` into view.
    ///
    /// Returns `false` when the current document has no such element.
    pub fn scroll_to_element(id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::ClipboardError;
    use dioxus_clipboard::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> Result<(), ClipboardError> {
        let mut clipboard = use_clipboard();
        clipboard
            .set(text)
            .map_err(|e| ClipboardError::Denied(format!("{e:?}")))
    }

    /// Native windows have no viewport to measure.
    pub fn viewport_width() -> Option<f64> {
        None
    }

    /// Native builds render without a scrollable document.
    pub fn scroll_to_element(_id: &str) -> bool {
        false
    }

    pub fn scroll_to_top() {}
}
