//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_json`] - Network fetching with timeout
//! - [`dom`] - Window, storage, history and display access
//! - [`format`] - Playback time formatting
//! - [`logging`] - Console backend for the `log` facade
//! - [`BrowserTimer`] - `setTimeout`-backed timer for control auto-hide

pub mod dom;
mod fetch;
pub mod format;
pub mod logging;
mod timer;

pub use fetch::fetch_json;
pub use timer::BrowserTimer;
