//! [`PlaybackSurface`] over the page's `<video>` element.

use leptos::html::Video;
use leptos::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlVideoElement;

use crate::core::PlaybackSurface;

/// Commands are dropped while the element is not mounted; the player
/// re-syncs once metadata has loaded.
#[derive(Clone, Copy)]
pub struct VideoSurface {
    node: NodeRef<Video>,
}

impl VideoSurface {
    pub fn new(node: NodeRef<Video>) -> Self {
        Self { node }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        self.node.get_untracked()
    }
}

impl PlaybackSurface for VideoSurface {
    fn play(&self) {
        let Some(video) = self.element() else {
            return;
        };
        match video.play() {
            // Autoplay policies reject unmuted playback without a gesture.
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("playback was not started: {:?}", e);
                }
            }),
            Err(e) => log::warn!("play() failed: {:?}", e),
        }
    }

    fn pause(&self) {
        if let Some(video) = self.element()
            && let Err(e) = video.pause()
        {
            log::warn!("pause() failed: {:?}", e);
        }
    }

    fn seek_to(&self, fraction: f64) {
        let Some(video) = self.element() else {
            return;
        };
        let duration = video.duration();
        if duration.is_finite() && duration > 0.0 {
            video.set_current_time(fraction * duration);
        }
    }

    fn set_muted(&self, muted: bool) {
        if let Some(video) = self.element() {
            video.set_muted(muted);
        }
    }

    fn set_playback_rate(&self, rate: f64) {
        if let Some(video) = self.element() {
            video.set_playback_rate(rate);
        }
    }
}

/// End of the last buffered range, in seconds.
pub fn buffered_end(video: &HtmlVideoElement) -> f64 {
    let ranges = video.buffered();
    match ranges.length() {
        0 => 0.0,
        n => ranges.end(n - 1).unwrap_or(0.0),
    }
}
