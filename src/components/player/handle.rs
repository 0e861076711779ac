//! Reactive wrapper around one mounted [`PlayerController`].
//!
//! The controller and the controls' visibility machine live in a local
//! stored value owned by the video page, so the handle itself is `Copy` and
//! can be captured by any event handler or reactive closure. Every action
//! ends by copying the controller's snapshots into signals for rendering.

use std::cell::RefCell;

use leptos::html::{Div, Video};
use leptos::prelude::*;

use super::surface::{VideoSurface, buffered_end};
use crate::config::CONTROLS_HIDE_DELAY_MS;
use crate::core::{
    ControlsVisibility, EndedOutcome, LocalStorageSettings, PlayerController,
};
use crate::models::{AppRoute, EntryInfo, PlaybackState, PlayerSettings};
use crate::utils::BrowserTimer;
use crate::utils::dom::BrowserDisplay;

type Controller = PlayerController<VideoSurface, BrowserDisplay, LocalStorageSettings>;

struct Parts {
    controller: RefCell<Controller>,
    visibility: ControlsVisibility<BrowserTimer>,
}

#[derive(Clone, Copy)]
pub struct PlayerHandle {
    parts: StoredValue<Parts, LocalStorage>,
    node: NodeRef<Video>,

    pub state: RwSignal<PlaybackState>,
    pub settings: RwSignal<PlayerSettings>,
    /// Decoded path of the video being played. Changes on auto-advance.
    pub video_path: RwSignal<String>,
    pub controls_shown: RwSignal<bool>,
    pub speed_menu_open: RwSignal<bool>,
    pub panel_open: RwSignal<bool>,
}

impl PlayerHandle {
    /// `container` is the element taken fullscreen.
    pub fn new(path: &str, node: NodeRef<Video>, container: NodeRef<Div>) -> Self {
        let controls_shown = RwSignal::new(true);
        let visibility = ControlsVisibility::new(BrowserTimer, CONTROLS_HIDE_DELAY_MS, move |shown| {
            let _ = controls_shown.try_set(shown);
        });

        let controller = PlayerController::new(
            path,
            VideoSurface::new(node),
            BrowserDisplay::new(container),
            LocalStorageSettings::new(),
        );

        let handle = Self {
            node,
            state: RwSignal::new(controller.state().clone()),
            settings: RwSignal::new(controller.settings().clone()),
            video_path: RwSignal::new(controller.current_path().to_string()),
            controls_shown,
            speed_menu_open: RwSignal::new(false),
            panel_open: RwSignal::new(false),
            parts: StoredValue::new_local(Parts {
                controller: RefCell::new(controller),
                visibility,
            }),
        };

        on_cleanup(move || {
            handle.parts.try_with_value(|parts| parts.visibility.teardown());
        });

        handle
    }

    /// Run `f` on the controller and publish the resulting snapshots.
    fn act<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let (out, state, settings) = self.parts.try_with_value(|parts| {
            let Ok(mut controller) = parts.controller.try_borrow_mut() else {
                log::debug!("player action skipped: controller busy");
                return None;
            };
            let out = f(&mut controller);
            Some((out, controller.state().clone(), controller.settings().clone()))
        })??;

        self.state.set(state);
        self.settings.set(settings);
        Some(out)
    }

    fn with_visibility(&self, f: impl FnOnce(&ControlsVisibility<BrowserTimer>)) {
        self.parts.try_with_value(|parts| f(&parts.visibility));
    }

    fn handle_outcome(&self, outcome: EndedOutcome) {
        if let EndedOutcome::Advance(next) = outcome {
            // The route signal keeps the page mounted; only the address and
            // the source change.
            AppRoute::new(&next).replace();
            self.video_path.set(next);
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    pub fn toggle_play(&self) {
        self.act(|c| c.toggle_play());
    }

    pub fn seek_from_pointer(&self, offset_x: f64, width: f64) {
        self.act(|c| c.seek_from_pointer(offset_x, width));
    }

    pub fn skip(&self, delta_seconds: f64) {
        if let Some(Some(outcome)) = self.act(|c| c.skip(delta_seconds)) {
            self.handle_outcome(outcome);
        }
    }

    // =========================================================================
    // Element Events
    // =========================================================================

    /// Metadata is known: apply preferences and the play state.
    pub fn loaded(&self) {
        let duration = self.node.get_untracked().map(|v| v.duration());
        self.act(|c| {
            if let Some(duration) = duration {
                c.on_duration(duration);
            }
            c.sync_surface();
        });
    }

    pub fn duration_changed(&self) {
        if let Some(video) = self.node.get_untracked() {
            let duration = video.duration();
            self.act(|c| c.on_duration(duration));
        }
    }

    /// Read the position and buffered amount from the element.
    pub fn progress(&self) {
        let Some(video) = self.node.get_untracked() else {
            return;
        };
        let duration = video.duration();
        let played_seconds = video.current_time();
        let (played, loaded) = if duration.is_finite() && duration > 0.0 {
            (played_seconds / duration, buffered_end(&video) / duration)
        } else {
            (0.0, 0.0)
        };
        self.act(|c| c.on_progress(played, played_seconds, loaded));
    }

    pub fn ended(&self) {
        if let Some(outcome) = self.act(|c| c.on_ended()) {
            self.handle_outcome(outcome);
        }
    }

    pub fn set_siblings(&self, siblings: Vec<EntryInfo>) {
        self.act(|c| c.set_siblings(siblings));
    }

    // =========================================================================
    // Preferences and Display
    // =========================================================================

    pub fn toggle_muted(&self) {
        self.act(|c| c.toggle_muted());
    }

    pub fn set_playback_rate(&self, rate: &str) {
        self.act(|c| c.set_playback_rate(rate));
    }

    pub fn toggle_fullscreen(&self) {
        self.act(|c| c.toggle_fullscreen());
    }

    // =========================================================================
    // Controls Visibility
    // =========================================================================

    pub fn pointer_activity(&self) {
        self.with_visibility(|v| v.pointer_activity());
    }

    pub fn pointer_on_controls(&self) {
        self.with_visibility(|v| v.pointer_on_controls());
    }

    pub fn pointer_left(&self) {
        self.with_visibility(|v| v.pointer_left());
    }

    pub fn touch(&self) {
        self.with_visibility(|v| v.touch());
    }

    pub fn set_speed_menu_open(&self, open: bool) {
        self.speed_menu_open.set(open);
        self.with_visibility(|v| v.set_speed_menu_open(open));
    }

    pub fn set_panel_open(&self, open: bool) {
        self.panel_open.set(open);
        if open {
            self.speed_menu_open.set(false);
        }
        self.with_visibility(|v| {
            if open {
                v.set_speed_menu_open(false);
            }
            v.set_panel_open(open);
        });
    }
}
