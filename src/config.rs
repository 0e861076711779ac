//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API origin is read from the build environment.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used as the document title at the root.
pub const APP_NAME: &str = "simedia";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;

/// Maximum level forwarded to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// =============================================================================
// Network Configuration
// =============================================================================

/// Origin of the listing API and media server, e.g. `http://nas.local:3000`.
///
/// Set `SIMEDIA_API_URL` when building. Empty means the page's own origin.
pub const API_BASE_URL: &str = match option_env!("SIMEDIA_API_URL") {
    Some(url) => url,
    None => "",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Player Configuration
// =============================================================================

/// localStorage key for persisted player settings.
pub const PLAYER_SETTINGS_KEY: &str = "playerSettings";

/// Playback rate used when nothing valid is stored.
pub const DEFAULT_PLAYBACK_RATE: &str = "1.0";

/// Rates offered by the speed menu, fastest first.
pub const PLAYBACK_RATES: &[&str] = &["2.0", "1.5", "1.25", "1.0", "0.5"];

/// Accepted range for stored playback rates.
pub const MIN_PLAYBACK_RATE: f64 = 0.0625;
pub const MAX_PLAYBACK_RATE: f64 = 16.0;

/// Skip buttons, in seconds.
pub const SKIP_STEPS: &[i32] = &[-85, -10, 10, 85];

/// Controls hide after this much pointer inactivity.
pub const CONTROLS_HIDE_DELAY_MS: u32 = 1000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
