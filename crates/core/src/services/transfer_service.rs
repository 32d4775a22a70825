use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::amount::Amount;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionType};
use crate::services::ledger_service::LedgerService;

/// Suggested file name for an exported document.
pub const EXPORT_FILE_NAME: &str = "transactions.json";

/// Media type of an exported document.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Description given to imported records that have none.
pub const IMPORTED_DESCRIPTION: &str = "Imported";

/// Category given to imported records that have none.
pub const FALLBACK_CATEGORY: &str = "Other";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts the ledger to and from a portable JSON document.
///
/// Export writes the full record shape. Import accepts any JSON array and
/// fills in whatever each element lacks, so partial or hand-written files
/// still load. Imported records always get fresh ids.
pub struct TransferService {
    ledger_service: LedgerService,
}

impl TransferService {
    pub fn new() -> Self {
        Self {
            ledger_service: LedgerService::new(),
        }
    }

    /// Pretty-printed JSON array of every transaction, unfiltered.
    pub fn export_all(&self, ledger: &Ledger) -> Result<String, CoreError> {
        serde_json::to_string_pretty(ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}")))
    }

    /// Parse an import document into normalized transactions.
    ///
    /// Fails with `CoreError::InvalidImportFormat` if the text is not JSON
    /// or its top-level value is not an array.
    pub fn parse_document(&self, document: &str, today: NaiveDate) -> Result<Vec<Transaction>, CoreError> {
        let value: Value = serde_json::from_str(document)
            .map_err(|e| CoreError::InvalidImportFormat(format!("not valid JSON ({e})")))?;

        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(CoreError::InvalidImportFormat(format!(
                    "expected a list of transactions, found {}",
                    json_kind(&other)
                )))
            }
        };

        debug!(count = records.len(), "normalizing imported records");
        Ok(records
            .iter()
            .map(|record| self.normalize_record(record, today))
            .collect())
    }

    /// Parse `document` and prepend its records to the ledger as one block.
    /// The ledger is unchanged if parsing fails. Returns the number imported.
    pub fn import_append(
        &self,
        ledger: &mut Ledger,
        document: &str,
        today: NaiveDate,
    ) -> Result<usize, CoreError> {
        let imported = self.parse_document(document, today)?;
        let count = imported.len();
        self.ledger_service.prepend_all(ledger, imported);
        info!(count, total = ledger.len(), "imported transactions");
        Ok(count)
    }

    /// Build a transaction from one element of an import document.
    ///
    /// - `type`: `"income"` is income, anything else an expense
    /// - `date`: re-written as zero-padded `YYYY-MM-DD` if it reads as a
    ///   date, otherwise `today`
    /// - `desc`: kept if non-blank, otherwise "Imported"
    /// - `category`: kept if non-empty, otherwise "Other"
    /// - `amount`: number or numeric string within range, else 0; made
    ///   non-negative
    ///
    /// Elements that are not objects are treated as empty objects.
    pub fn normalize_record(&self, record: &Value, today: NaiveDate) -> Transaction {
        let empty = Map::new();
        let fields = record.as_object().unwrap_or(&empty);
        let text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::trim);

        let kind = text("type")
            .map(TransactionType::from_label)
            .unwrap_or_default();

        let date = text("date")
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
            .unwrap_or(today)
            .format(DATE_FORMAT)
            .to_string();

        let description = text("desc")
            .filter(|d| !d.is_empty())
            .unwrap_or(IMPORTED_DESCRIPTION);

        let category = fields
            .get("category")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(FALLBACK_CATEGORY);

        let amount = fields
            .get("amount")
            .and_then(amount_from_value)
            .unwrap_or(Amount::ZERO)
            .abs();

        Transaction::new(kind, date, description, category, amount)
    }
}

fn amount_from_value(value: &Value) -> Option<Amount> {
    match value {
        Value::Number(n) => Amount::parse(&n.to_string()),
        Value::String(s) => Amount::parse(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl Default for TransferService {
    fn default() -> Self {
        Self::new()
    }
}
