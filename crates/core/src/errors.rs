use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── User Input ──────────────────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    // ── Persistence ─────────────────────────────────────────────────
    #[error("Storage limit exceeded! Please export or clear old transactions.")]
    StorageFull,

    #[error("Stored transactions are corrupt: {0}")]
    CorruptPersistedData(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ── Import / Export ─────────────────────────────────────────────
    #[error("Could not import: {0}")]
    InvalidImportFormat(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
