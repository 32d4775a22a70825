use crate::errors::CoreError;
use crate::models::transaction::Transaction;

/// Serialize transactions into the persisted layout: a compact JSON array of
/// `{id, type, date, desc, category, amount}` objects, amounts as
/// two-decimal strings.
pub fn encode(transactions: &[Transaction]) -> Result<String, CoreError> {
    serde_json::to_string(transactions)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions: {e}")))
}

/// Parse the persisted layout.
///
/// A blank value decodes to an empty list. Anything that is not an array of
/// well-formed records is `CoreError::CorruptPersistedData`.
pub fn decode(raw: &str) -> Result<Vec<Transaction>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| CoreError::CorruptPersistedData(e.to_string()))
}
