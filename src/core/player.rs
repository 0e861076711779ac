//! Playback-state controller.
//!
//! Owns the mutable state of one mounted video. The media element, the
//! document (fullscreen, title) and preference storage are reached only
//! through injected capabilities:
//!
//! - [`PlaybackSurface`] receives commands (`play`, `pause`, `seek_to`, ...)
//! - [`DisplayControl`] handles fullscreen, orientation and the title
//! - [`SettingsStore`] persists [`PlayerSettings`]
//!
//! Events from the media element come back in through `on_duration`,
//! `on_progress` and `on_ended`.

use crate::core::error::DisplayError;
use crate::core::path::{decode_path, get_next_video, path_join};
use crate::core::settings::SettingsStore;
use crate::models::{EntryInfo, PlaybackState, PlayerSettings};

/// Command sink for a media element.
pub trait PlaybackSurface {
    fn play(&self);
    fn pause(&self);
    /// Jump to `fraction` (in `[0, 1]`) of the total duration.
    fn seek_to(&self, fraction: f64);
    fn set_muted(&self, muted: bool);
    fn set_playback_rate(&self, rate: f64);
}

/// Document-level display capabilities. All requests are best-effort.
pub trait DisplayControl {
    fn request_fullscreen(&self) -> Result<(), DisplayError>;
    fn exit_fullscreen(&self) -> Result<(), DisplayError>;
    fn is_fullscreen(&self) -> bool;
    fn lock_landscape(&self) -> Result<(), DisplayError>;
    fn set_title(&self, title: &str);
}

/// What happened when the current video finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndedOutcome {
    /// Playback moved on to this (decoded) path.
    Advance(String),
    /// No later video in the directory; playback stopped.
    Stay,
}

pub struct PlayerController<P, D, S> {
    surface: P,
    display: D,
    store: S,
    settings: PlayerSettings,
    state: PlaybackState,
    /// Decoded, normalized path of the video being played.
    current_path: String,
    /// Listing of the current video's directory, used for auto-advance.
    siblings: Vec<EntryInfo>,
}

impl<P, D, S> PlayerController<P, D, S>
where
    P: PlaybackSurface,
    D: DisplayControl,
    S: SettingsStore,
{
    /// Mount a player for `path`, restoring persisted settings.
    pub fn new(path: &str, surface: P, display: D, store: S) -> Self {
        let settings = store.get();
        let controller = Self {
            surface,
            display,
            store,
            settings,
            state: PlaybackState::default(),
            current_path: path_join(&[decode_path(path)]),
            siblings: Vec::new(),
        };
        controller.announce_title();
        controller
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Push muted, rate and play state to the surface, e.g. after the
    /// element (re)loaded its source.
    pub fn sync_surface(&self) {
        self.surface.set_muted(self.settings.is_muted);
        self.surface.set_playback_rate(self.settings.rate_value());
        if self.state.playing {
            self.surface.play();
        } else {
            self.surface.pause();
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    pub fn toggle_play(&mut self) {
        self.state.playing = !self.state.playing;
        if self.state.playing {
            self.surface.play();
        } else {
            self.surface.pause();
        }
    }

    /// Seek to `fraction` of the duration, updating the position right away.
    pub fn seek_to(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.surface.seek_to(fraction);
        self.state.played_fraction = fraction;
        if self.state.has_duration() {
            self.state.played_seconds = fraction * self.state.total_seconds;
        }
    }

    /// Seek from a click `offset_x` pixels into a bar `width` pixels wide.
    pub fn seek_from_pointer(&mut self, offset_x: f64, width: f64) {
        if width <= 0.0 {
            return;
        }
        self.seek_to(offset_x / width);
    }

    /// Jump by `delta_seconds`. Reaching the end counts as completion.
    ///
    /// Does nothing until the duration is known. Returns the completion
    /// outcome when the jump ran past the end.
    pub fn skip(&mut self, delta_seconds: f64) -> Option<EndedOutcome> {
        if !self.state.has_duration() {
            log::debug!("skip ignored: duration not known yet");
            return None;
        }

        let target = self.state.played_fraction + delta_seconds / self.state.total_seconds;
        if target >= 1.0 {
            return Some(self.on_ended());
        }
        self.seek_to(target.max(0.0));
        None
    }

    // =========================================================================
    // Surface Events
    // =========================================================================

    pub fn on_duration(&mut self, total_seconds: f64) {
        self.state.total_seconds = if total_seconds.is_finite() && total_seconds > 0.0 {
            total_seconds
        } else {
            0.0
        };
    }

    pub fn on_progress(&mut self, played_fraction: f64, played_seconds: f64, loaded_fraction: f64) {
        self.state.played_fraction = unit_fraction(played_fraction);
        self.state.loaded_fraction = unit_fraction(loaded_fraction);
        self.state.played_seconds = if played_seconds.is_finite() {
            played_seconds.max(0.0)
        } else {
            0.0
        };
    }

    /// Advance to the next video in the directory, if there is one.
    ///
    /// On advance all transient playback state is reset and playback
    /// continues; otherwise the player stays stopped on the last frame.
    pub fn on_ended(&mut self) -> EndedOutcome {
        match get_next_video(&self.current_path, &self.siblings) {
            Some(next) => {
                log::info!("advancing to '/{}'", next);
                self.current_path = next.clone();
                self.state = PlaybackState::default();
                self.announce_title();
                EndedOutcome::Advance(next)
            }
            None => {
                // A skip can reach the end while the element is still playing.
                if self.state.playing {
                    self.surface.pause();
                }
                self.state.playing = false;
                EndedOutcome::Stay
            }
        }
    }

    /// Replace the directory listing used for auto-advance.
    pub fn set_siblings(&mut self, siblings: Vec<EntryInfo>) {
        self.siblings = siblings;
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.is_muted = muted;
        self.surface.set_muted(muted);
        self.store.set(&self.settings);
    }

    pub fn toggle_muted(&mut self) {
        self.set_muted(!self.settings.is_muted);
    }

    /// `rate` is the menu label, e.g. `"1.25"`.
    pub fn set_playback_rate(&mut self, rate: &str) {
        self.settings.playback_rate = rate.to_string();
        self.surface.set_playback_rate(self.settings.rate_value());
        self.store.set(&self.settings);
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Enter fullscreen (locking landscape if possible) or leave it.
    pub fn toggle_fullscreen(&self) {
        if self.display.is_fullscreen() {
            if let Err(e) = self.display.exit_fullscreen() {
                log::warn!("exit fullscreen failed: {}", e);
            }
            return;
        }

        if let Err(e) = self.display.request_fullscreen() {
            log::warn!("fullscreen request failed: {}", e);
            return;
        }
        if let Err(e) = self.display.lock_landscape() {
            log::debug!("orientation lock unavailable: {}", e);
        }
    }

    fn announce_title(&self) {
        let name = self.current_path.rsplit('/').next().unwrap_or_default();
        self.display.set_title(name);
    }
}

/// Clamp into `[0, 1]`; NaN and infinities count as zero.
fn unit_fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::core::settings::MemorySettings;
    use crate::models::EntryKind;

    #[derive(Clone, Debug, PartialEq)]
    enum Command {
        Play,
        Pause,
        Seek(f64),
        Muted(bool),
        Rate(f64),
    }

    #[derive(Clone, Default)]
    struct FakeSurface {
        log: Rc<RefCell<Vec<Command>>>,
    }

    impl FakeSurface {
        fn commands(&self) -> Vec<Command> {
            self.log.borrow().clone()
        }
    }

    impl PlaybackSurface for FakeSurface {
        fn play(&self) {
            self.log.borrow_mut().push(Command::Play);
        }
        fn pause(&self) {
            self.log.borrow_mut().push(Command::Pause);
        }
        fn seek_to(&self, fraction: f64) {
            self.log.borrow_mut().push(Command::Seek(fraction));
        }
        fn set_muted(&self, muted: bool) {
            self.log.borrow_mut().push(Command::Muted(muted));
        }
        fn set_playback_rate(&self, rate: f64) {
            self.log.borrow_mut().push(Command::Rate(rate));
        }
    }

    #[derive(Clone, Default)]
    struct FakeDisplay {
        fullscreen: Rc<Cell<bool>>,
        deny_fullscreen: bool,
        deny_orientation: bool,
        landscape_locked: Rc<Cell<bool>>,
        title: Rc<RefCell<String>>,
    }

    impl DisplayControl for FakeDisplay {
        fn request_fullscreen(&self) -> Result<(), DisplayError> {
            if self.deny_fullscreen {
                return Err(DisplayError::Rejected("denied".to_string()));
            }
            self.fullscreen.set(true);
            Ok(())
        }
        fn exit_fullscreen(&self) -> Result<(), DisplayError> {
            self.fullscreen.set(false);
            Ok(())
        }
        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }
        fn lock_landscape(&self) -> Result<(), DisplayError> {
            if self.deny_orientation {
                return Err(DisplayError::Unavailable);
            }
            self.landscape_locked.set(true);
            Ok(())
        }
        fn set_title(&self, title: &str) {
            *self.title.borrow_mut() = title.to_string();
        }
    }

    type TestPlayer = PlayerController<FakeSurface, FakeDisplay, MemorySettings>;

    fn player(path: &str) -> (TestPlayer, FakeSurface, FakeDisplay, MemorySettings) {
        let surface = FakeSurface::default();
        let display = FakeDisplay::default();
        let store = MemorySettings::default();
        let controller = PlayerController::new(path, surface.clone(), display.clone(), store.clone());
        (controller, surface, display, store)
    }

    fn siblings() -> Vec<EntryInfo> {
        vec![
            EntryInfo::new("img1.png", EntryKind::Image),
            EntryInfo::new("vidA.mp4", EntryKind::Video),
            EntryInfo::new("vidB.mp4", EntryKind::Video),
            EntryInfo::new("vidC.mp4", EntryKind::Video),
        ]
    }

    #[test]
    fn test_mount_restores_settings_and_sets_title() {
        let store = MemorySettings::with_raw(r#"{"isMuted":true,"playbackRate":"1.5"}"#);
        let surface = FakeSurface::default();
        let display = FakeDisplay::default();
        let controller =
            PlayerController::new("/show/ep%201.mp4", surface.clone(), display.clone(), store);

        assert!(controller.settings().is_muted);
        assert_eq!(controller.settings().playback_rate, "1.5");
        assert_eq!(controller.current_path(), "show/ep 1.mp4");
        assert_eq!(*display.title.borrow(), "ep 1.mp4");
        assert!(controller.state().playing);

        controller.sync_surface();
        assert_eq!(
            surface.commands(),
            vec![Command::Muted(true), Command::Rate(1.5), Command::Play]
        );
    }

    #[test]
    fn test_toggle_play() {
        let (mut controller, surface, _, _) = player("/v.mp4");
        controller.toggle_play();
        assert!(!controller.state().playing);
        controller.toggle_play();
        assert!(controller.state().playing);
        assert_eq!(surface.commands(), vec![Command::Pause, Command::Play]);
    }

    #[test]
    fn test_seek_is_optimistic_and_clamped() {
        let (mut controller, surface, _, _) = player("/v.mp4");
        controller.on_duration(200.0);

        controller.seek_from_pointer(50.0, 200.0);
        assert_eq!(controller.state().played_fraction, 0.25);
        assert_eq!(controller.state().played_seconds, 50.0);

        controller.seek_to(1.2);
        assert_eq!(controller.state().played_fraction, 1.0);

        controller.seek_from_pointer(10.0, 0.0);
        assert_eq!(surface.commands(), vec![Command::Seek(0.25), Command::Seek(1.0)]);
    }

    #[test]
    fn test_skip_without_duration_is_noop() {
        let (mut controller, surface, _, _) = player("/v.mp4");
        assert_eq!(controller.skip(10.0), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_skip_seeks_within_video() {
        let (mut controller, surface, _, _) = player("/v.mp4");
        controller.on_duration(100.0);
        controller.on_progress(0.5, 50.0, 0.7);

        assert_eq!(controller.skip(10.0), None);
        assert!((controller.state().played_fraction - 0.6).abs() < 1e-9);

        assert_eq!(controller.skip(-85.0), None);
        assert_eq!(controller.state().played_fraction, 0.0);

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands.last(), Some(&Command::Seek(0.0)));
    }

    #[test]
    fn test_skip_past_end_advances() {
        let (mut controller, _, display, _) = player("/shows/vidA.mp4");
        controller.set_siblings(siblings());
        controller.on_duration(100.0);
        controller.on_progress(0.95, 95.0, 1.0);

        let outcome = controller.skip(10.0);
        assert_eq!(outcome, Some(EndedOutcome::Advance("shows/vidB.mp4".to_string())));
        assert_eq!(controller.current_path(), "shows/vidB.mp4");
        assert_eq!(controller.state(), &PlaybackState::default());
        assert_eq!(*display.title.borrow(), "vidB.mp4");
    }

    #[test]
    fn test_ended_on_last_video_stays() {
        let (mut controller, _, _, _) = player("/shows/vidC.mp4");
        controller.set_siblings(siblings());
        controller.on_duration(100.0);
        controller.on_progress(1.0, 100.0, 1.0);

        assert_eq!(controller.on_ended(), EndedOutcome::Stay);
        assert_eq!(controller.current_path(), "shows/vidC.mp4");
        assert!(!controller.state().playing);
        assert_eq!(controller.state().played_fraction, 1.0);
    }

    #[test]
    fn test_skip_past_end_of_last_video_pauses() {
        let (mut controller, surface, _, _) = player("/shows/vidC.mp4");
        controller.set_siblings(siblings());
        controller.on_duration(100.0);
        controller.on_progress(0.5, 50.0, 1.0);

        assert_eq!(controller.skip(85.0), Some(EndedOutcome::Stay));
        assert!(!controller.state().playing);
        assert_eq!(surface.commands(), vec![Command::Pause]);

        // One press resumes; the element and the state agree again.
        controller.toggle_play();
        assert!(controller.state().playing);
        assert_eq!(surface.commands(), vec![Command::Pause, Command::Play]);
    }

    #[test]
    fn test_progress_is_sanitized() {
        let (mut controller, _, _, _) = player("/v.mp4");
        controller.on_progress(1.0000001, 12.5, f64::NAN);
        assert_eq!(controller.state().played_fraction, 1.0);
        assert_eq!(controller.state().loaded_fraction, 0.0);
        assert_eq!(controller.state().played_seconds, 12.5);

        controller.on_duration(f64::INFINITY);
        assert!(!controller.state().has_duration());
    }

    #[test]
    fn test_preferences_persist_on_change() {
        let (mut controller, surface, _, store) = player("/v.mp4");

        controller.toggle_muted();
        assert_eq!(
            store.raw().as_deref(),
            Some(r#"{"isMuted":true,"playbackRate":"1.0"}"#)
        );

        controller.set_playback_rate("2.0");
        assert_eq!(
            store.raw().as_deref(),
            Some(r#"{"isMuted":true,"playbackRate":"2.0"}"#)
        );
        assert_eq!(surface.commands(), vec![Command::Muted(true), Command::Rate(2.0)]);

        // A later mount sees the stored preferences.
        let again = PlayerController::new(
            "/w.mp4",
            FakeSurface::default(),
            FakeDisplay::default(),
            store.clone(),
        );
        assert_eq!(again.settings(), controller.settings());
    }

    #[test]
    fn test_fullscreen_toggle() {
        let (controller, _, display, _) = player("/v.mp4");
        controller.toggle_fullscreen();
        assert!(display.fullscreen.get());
        assert!(display.landscape_locked.get());

        controller.toggle_fullscreen();
        assert!(!display.fullscreen.get());
    }

    #[test]
    fn test_fullscreen_failures_are_ignored() {
        let display = FakeDisplay {
            deny_orientation: true,
            ..FakeDisplay::default()
        };
        let controller = PlayerController::new(
            "/v.mp4",
            FakeSurface::default(),
            display.clone(),
            MemorySettings::default(),
        );
        controller.toggle_fullscreen();
        assert!(display.fullscreen.get());
        assert!(!display.landscape_locked.get());

        let display = FakeDisplay {
            deny_fullscreen: true,
            ..FakeDisplay::default()
        };
        let controller = PlayerController::new(
            "/v.mp4",
            FakeSurface::default(),
            display.clone(),
            MemorySettings::default(),
        );
        controller.toggle_fullscreen();
        assert!(!display.fullscreen.get());
        assert!(!display.landscape_locked.get());
    }
}
