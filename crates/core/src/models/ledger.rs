use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionId};

/// The ordered collection of all transactions, newest first.
///
/// Order is insertion order (new and imported records go to the front),
/// not date order. Serialized as a bare JSON array, which is also the
/// persisted layout. Mutation goes through `LedgerService`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    pub(crate) transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Most recently added record.
    #[must_use]
    pub fn head(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    #[must_use]
    pub fn contains(&self, id: &TransactionId) -> bool {
        self.transactions.iter().any(|t| &t.id == id)
    }

    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
