use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::amount::Amount;

/// Direction of a ledger entry. The sign of an amount is implied by this,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    /// Default for new form entries and for imported records with no type
    #[default]
    Expense,
}

impl TransactionType {
    /// Lenient mapping used by import: only the exact label `"income"`
    /// selects income, everything else is an expense.
    pub fn from_label(label: &str) -> Self {
        if label == "income" {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identifier of a transaction, stable for the record's lifetime.
///
/// New ids are v4 UUIDs. Any string is accepted when loading so records
/// written by other tools keep their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Mint a fresh, unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single income or expense record.
///
/// Immutable once created: an edit removes the record and the user submits
/// a replacement. Field names on the wire follow the stored layout
/// (`id, type, date, desc, category, amount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// ISO 8601 calendar date (`YYYY-MM-DD`), as supplied
    pub date: String,

    /// Short free-text description, trimmed
    #[serde(rename = "desc")]
    pub description: String,

    /// Free-form category label (e.g., "Food", "Salary")
    pub category: String,

    /// Always non-negative, fixed to two decimals
    pub amount: Amount,
}

impl Transaction {
    /// Create a transaction with a fresh id. The description is trimmed and
    /// the amount made non-negative.
    pub fn new(
        kind: TransactionType,
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            kind,
            date: date.into(),
            description: description.into().trim().to_string(),
            category: category.into(),
            amount: amount.abs(),
        }
    }

    pub fn income(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self::new(TransactionType::Income, date, description, category, amount)
    }

    pub fn expense(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self::new(TransactionType::Expense, date, description, category, amount)
    }

    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The same record under a newly minted id.
    #[must_use]
    pub fn with_fresh_id(self) -> Self {
        Self {
            id: TransactionId::generate(),
            ..self
        }
    }

    /// Amount as shown in a list row: `+₹50,000.00` for income,
    /// `-₹1,200.00` for expenses.
    #[must_use]
    pub fn signed_display(&self, currency_symbol: &str) -> String {
        let sign = if self.is_income() { '+' } else { '-' };
        format!("{sign}{}", self.amount.format_currency(currency_symbol))
    }
}
