use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// The browser's `window.localStorage` (wasm32 only).
///
/// Browsers throw a `QuotaExceededError` when a write does not fit; any
/// rejected `setItem` is reported as `CoreError::StorageFull`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Bind to the current window's local storage.
    pub fn open() -> Result<Self, CoreError> {
        let window =
            web_sys::window().ok_or_else(|| CoreError::Storage("No window available".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CoreError::Storage(format!("localStorage unavailable: {e:?}")))?
            .ok_or_else(|| CoreError::Storage("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| CoreError::Storage(format!("localStorage read failed: {e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| CoreError::StorageFull)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CoreError::Storage(format!("localStorage remove failed: {e:?}")))
    }
}
