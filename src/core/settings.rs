//! Persistence of player preferences.
//!
//! The controller depends on [`SettingsStore`] rather than on localStorage
//! directly, so it can be driven with an in-memory store in tests.

use crate::config::PLAYER_SETTINGS_KEY;
use crate::core::error::StorageError;
use crate::models::PlayerSettings;
use crate::utils::dom;

/// Read/write access to the persisted [`PlayerSettings`].
pub trait SettingsStore {
    /// Stored settings, or defaults when nothing usable is stored.
    fn get(&self) -> PlayerSettings;

    /// Persist the full settings object. Failures are logged, not returned.
    fn set(&self, settings: &PlayerSettings);
}

/// [`SettingsStore`] backed by `localStorage`.
#[derive(Clone, Copy, Debug)]
pub struct LocalStorageSettings {
    key: &'static str,
}

impl LocalStorageSettings {
    pub fn new() -> Self {
        Self {
            key: PLAYER_SETTINGS_KEY,
        }
    }

    fn write(&self, settings: &PlayerSettings) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(self.key, &settings.to_persisted())
            .map_err(|_| StorageError::SaveFailed)
    }
}

impl Default for LocalStorageSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for LocalStorageSettings {
    fn get(&self) -> PlayerSettings {
        dom::local_storage()
            .and_then(|storage| storage.get_item(self.key).ok().flatten())
            .map(|raw| PlayerSettings::from_persisted(&raw))
            .unwrap_or_default()
    }

    fn set(&self, settings: &PlayerSettings) {
        if let Err(e) = self.write(settings) {
            log::warn!("could not persist player settings: {}", e);
        }
    }
}

/// In-memory store holding the serialized text, as localStorage would.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    raw: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemorySettings {
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::default();
        *store.raw.borrow_mut() = Some(raw.to_string());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

#[cfg(test)]
impl SettingsStore for MemorySettings {
    fn get(&self) -> PlayerSettings {
        self.raw
            .borrow()
            .as_deref()
            .map(PlayerSettings::from_persisted)
            .unwrap_or_default()
    }

    fn set(&self, settings: &PlayerSettings) {
        *self.raw.borrow_mut() = Some(settings.to_persisted());
    }
}
