//! Core logic of the media browser.
//!
//! This module provides:
//! - [`path`] normalization and next-video resolution
//! - [`listing`] the entry-listing client with its latest-request guard
//! - [`player`] the playback-state controller
//! - [`visibility`] the auto-hide state machine for player controls
//! - [`settings`] persistence of player preferences

pub mod error;
pub mod listing;
pub mod path;
pub mod player;
pub mod settings;
pub mod visibility;

pub use listing::{ApiClient, EntrySource, LatestRequest, LoadState, load_latest};
pub use player::{DisplayControl, EndedOutcome, PlaybackSurface, PlayerController};
pub use settings::LocalStorageSettings;
pub use visibility::{ControlsVisibility, Timer};
