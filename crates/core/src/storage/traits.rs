use crate::errors::CoreError;

/// Trait abstraction for the local key-value store the ledger persists to.
///
/// The browser's `localStorage` is the reference backend: string keys,
/// string values, and a size limit that can reject writes. Implementations
/// report a rejected write as `CoreError::StorageFull` and any other
/// failure as `CoreError::Storage`.
pub trait KeyValueStore {
    /// Human-readable name of this backend (for logs).
    fn name(&self) -> &str;

    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}
