use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::amount::Amount;
use super::transaction::{Transaction, TransactionType};

/// Category preselected on a freshly reset form.
pub const DEFAULT_FORM_CATEGORY: &str = "Food";

/// Raw values from the entry form, before validation.
///
/// The form surface hands one of these to `ExpenseTracker::submit`, and
/// receives one back when an existing record is opened for editing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl TransactionDraft {
    /// A reset form: expense, dated today, default category, no amount.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            date: today.format("%Y-%m-%d").to_string(),
            description: String::new(),
            category: DEFAULT_FORM_CATEGORY.to_string(),
            amount: String::new(),
        }
    }

    /// Prefill values for editing an existing record.
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            kind: txn.kind,
            date: txn.date.clone(),
            description: txn.description.clone(),
            category: txn.category.clone(),
            amount: txn.amount.to_string(),
        }
    }

    /// Check the draft and return the parsed amount.
    ///
    /// Rules are applied in order and the first failure wins:
    /// date present, description non-blank, amount present, amount a
    /// positive number no larger than `MAX_WHOLE_UNITS`.
    pub fn validate(&self) -> Result<Amount, CoreError> {
        if self.date.trim().is_empty() {
            return Err(CoreError::Validation("Please choose a date.".into()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please add a short description.".into(),
            ));
        }
        if self.amount.trim().is_empty() {
            return Err(CoreError::Validation("Please enter an amount.".into()));
        }
        match Amount::parse(&self.amount) {
            Some(amount) if amount.is_positive() => Ok(amount),
            _ => Err(CoreError::Validation(
                "Amount must be a positive number.".into(),
            )),
        }
    }

    /// Validate and build a new transaction with a fresh id.
    pub fn into_transaction(self) -> Result<Transaction, CoreError> {
        let amount = self.validate()?;
        Ok(Transaction::new(
            self.kind,
            self.date.trim(),
            self.description,
            self.category,
            amount,
        ))
    }
}
