//! Player preferences and per-mount playback state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{DEFAULT_PLAYBACK_RATE, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE};

/// User preferences that survive navigation and reloads.
///
/// The playback rate is kept in its string form (`"1.25"`) because that is
/// what the speed menu offers and what is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub is_muted: bool,
    pub playback_rate: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            is_muted: false,
            playback_rate: DEFAULT_PLAYBACK_RATE.to_string(),
        }
    }
}

impl PlayerSettings {
    /// Parse persisted text leniently.
    ///
    /// Each field falls back to its default on its own when it is missing or
    /// has the wrong JSON type. Text that is not a JSON object yields the
    /// defaults. Never fails.
    pub fn from_persisted(raw: &str) -> Self {
        let mut settings = Self::default();
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return settings;
        };

        if let Some(Value::Bool(muted)) = map.get("isMuted") {
            settings.is_muted = *muted;
        }
        if let Some(Value::String(rate)) = map.get("playbackRate") {
            settings.playback_rate = rate.clone();
        }
        settings
    }

    /// Serialize for persistence.
    pub fn to_persisted(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Numeric playback rate for the media element.
    ///
    /// Unparsable or out-of-range strings play at normal speed.
    pub fn rate_value(&self) -> f64 {
        self.playback_rate
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && (MIN_PLAYBACK_RATE..=MAX_PLAYBACK_RATE).contains(r))
            .unwrap_or(1.0)
    }
}

/// Transient state for one mounted video.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    /// Position as a fraction of total duration.
    pub played_fraction: f64,
    pub played_seconds: f64,
    /// Zero until the media element reports metadata.
    pub total_seconds: f64,
    pub loaded_fraction: f64,
}

impl Default for PlaybackState {
    /// Videos autoplay on mount.
    fn default() -> Self {
        Self {
            playing: true,
            played_fraction: 0.0,
            played_seconds: 0.0,
            total_seconds: 0.0,
            loaded_fraction: 0.0,
        }
    }
}

impl PlaybackState {
    pub fn has_duration(&self) -> bool {
        self.total_seconds > 0.0
    }
}
