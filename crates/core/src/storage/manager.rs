use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::format;
use super::traits::KeyValueStore;

/// High-level persistence: load/save the ledger under a single key.
///
/// Reads are permissive (bad or missing data never blocks startup); writes
/// are explicit about failure so the user can be told to export or clear.
pub struct StorageManager;

impl StorageManager {
    /// Load the ledger stored under `key`.
    ///
    /// Absent, blank, unreadable or corrupt data all yield an empty ledger.
    /// Corruption is logged, never returned.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Ledger {
        match Self::try_load(store, key) {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(store = store.name(), key, error = %e, "resetting ledger to empty");
                Ledger::new()
            }
        }
    }

    /// Strict variant of [`StorageManager::load`] that reports why the stored
    /// data could not be used.
    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Ledger, CoreError> {
        let raw = match store.get(key)? {
            Some(raw) => raw,
            None => {
                debug!(store = store.name(), key, "no stored transactions");
                return Ok(Ledger::new());
            }
        };
        let transactions = format::decode(&raw)?;
        debug!(store = store.name(), key, count = transactions.len(), "loaded transactions");
        Ok(Ledger::from_transactions(transactions))
    }

    /// Serialize the ledger and write it under `key`.
    ///
    /// The ledger is written as-is; the caller enforces the record cap first.
    /// Returns `CoreError::StorageFull` if the store rejected the write.
    pub fn save<S: KeyValueStore + ?Sized>(
        store: &mut S,
        key: &str,
        ledger: &Ledger,
    ) -> Result<(), CoreError> {
        let data = format::encode(ledger.transactions())?;
        store.set(key, &data)?;
        debug!(store = store.name(), key, count = ledger.len(), bytes = data.len(), "saved transactions");
        Ok(())
    }
}

/// Outcome of the save that follows every mutation.
///
/// A failed save is a warning, not an error: the in-memory ledger is
/// already updated and stays authoritative for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SaveStatus {
    /// The ledger was written.
    Saved,
    /// Nothing changed, so nothing was written.
    Unchanged,
    /// The store rejected the write for lack of space. The user should
    /// export or clear transactions.
    StorageFull,
    /// The store failed for another reason.
    Failed(String),
}

impl SaveStatus {
    /// `true` unless the write was attempted and failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, SaveStatus::Saved | SaveStatus::Unchanged)
    }

    /// Message to show the user when the save did not go through.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        match self {
            SaveStatus::Saved | SaveStatus::Unchanged => None,
            SaveStatus::StorageFull => Some(CoreError::StorageFull.to_string()),
            SaveStatus::Failed(message) => Some(message.clone()),
        }
    }
}

impl From<Result<(), CoreError>> for SaveStatus {
    fn from(result: Result<(), CoreError>) -> Self {
        match result {
            Ok(()) => SaveStatus::Saved,
            Err(CoreError::StorageFull) => SaveStatus::StorageFull,
            Err(e) => SaveStatus::Failed(e.to_string()),
        }
    }
}

/// A mutation's result paired with the status of the save that followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persisted<T> {
    pub value: T,
    pub save: SaveStatus,
}
