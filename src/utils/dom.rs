//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, OrientationLockType, Storage, Window};

use crate::core::DisplayControl;
use crate::core::error::DisplayError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current URL pathname (still percent-encoded).
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a URL onto the history stack without reloading.
pub fn push_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Replace the current history entry without adding to browser history.
pub fn replace_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

// =============================================================================
// Display
// =============================================================================

/// [`DisplayControl`] over the Fullscreen and Screen Orientation APIs.
///
/// Fullscreen applies to the player container, so the controls stay on top
/// of the video.
#[derive(Clone, Copy)]
pub struct BrowserDisplay {
    container: NodeRef<Div>,
}

impl BrowserDisplay {
    pub fn new(container: NodeRef<Div>) -> Self {
        Self { container }
    }
}

fn rejected(err: JsValue) -> DisplayError {
    DisplayError::Rejected(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl DisplayControl for BrowserDisplay {
    fn request_fullscreen(&self) -> Result<(), DisplayError> {
        let container = self
            .container
            .get_untracked()
            .ok_or(DisplayError::Unavailable)?;
        container.request_fullscreen().map_err(rejected)
    }

    fn exit_fullscreen(&self) -> Result<(), DisplayError> {
        let document = document().ok_or(DisplayError::Unavailable)?;
        document.exit_fullscreen();
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        document().is_some_and(|d| d.fullscreen_element().is_some())
    }

    /// The returned promise usually rejects on desktop browsers; that is
    /// logged at debug level and otherwise ignored.
    fn lock_landscape(&self) -> Result<(), DisplayError> {
        let screen = window()
            .and_then(|w| w.screen().ok())
            .ok_or(DisplayError::Unavailable)?;
        let promise = screen
            .orientation()
            .lock(OrientationLockType::Landscape)
            .map_err(rejected)?;

        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("orientation lock rejected: {}", rejected(e));
            }
        });
        Ok(())
    }

    fn set_title(&self, title: &str) {
        set_title(title);
    }
}
