//! Data models and types for the application.
//!
//! - [`EntryInfo`], [`EntryKind`], [`DirListing`] - Remote tree metadata
//! - [`PlayerSettings`], [`PlaybackState`] - Video player state
//! - [`AppRoute`] - Pathname-based navigation

mod entry;
mod player;
mod route;

pub use entry::{DirListing, EntryInfo, EntryKind};
pub use player::{PlaybackState, PlayerSettings};
pub use route::AppRoute;
