use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Versioned key under which the ledger is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "expense-tracker:txns:v1";

/// Maximum number of transactions retained.
pub const DEFAULT_MAX_RECORDS: usize = 500;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Categories always offered in the filter, in this order.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Salary",
    "Other",
];

/// Tracker configuration. Missing fields in a JSON config fall back to
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Key of the persisted entry in the key-value store.
    pub storage_key: String,

    /// Records beyond this count are dropped (oldest first) on every save.
    pub max_records: usize,

    /// Symbol prefixed to formatted amounts (e.g., "₹", "$").
    pub currency_symbol: String,

    /// Categories listed before any observed in the data.
    pub default_categories: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_records: DEFAULT_MAX_RECORDS,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: TrackerConfig = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::Validation(
                "Configuration storage_key must not be empty".into(),
            ));
        }
        if self.max_records == 0 {
            return Err(CoreError::Validation(
                "Configuration max_records must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
