use rust_decimal::Decimal;
use tracing::warn;

use crate::models::amount::Amount;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionId};

/// Owns the mutation rules of the ledger: prepend, delete, replace, cap.
///
/// Pure business logic, no I/O. Records handed to it are assumed to be
/// validated already; ids must be unique.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Insert a transaction at the front (newest first).
    pub fn add(&self, ledger: &mut Ledger, txn: Transaction) {
        ledger.transactions.insert(0, txn);
    }

    /// Prepend a block of transactions, keeping their relative order.
    pub fn prepend_all(&self, ledger: &mut Ledger, block: Vec<Transaction>) {
        ledger.transactions.splice(0..0, block);
    }

    /// Remove the transaction with `id`. Returns the removed record, or
    /// `None` (and leaves the ledger untouched) if there is no such id.
    pub fn delete_by_id(&self, ledger: &mut Ledger, id: &TransactionId) -> Option<Transaction> {
        let idx = ledger.transactions.iter().position(|t| &t.id == id)?;
        Some(ledger.transactions.remove(idx))
    }

    /// Swap the entire contents of the ledger. Returns the previous records.
    pub fn replace_all(&self, ledger: &mut Ledger, transactions: Vec<Transaction>) -> Vec<Transaction> {
        std::mem::replace(&mut ledger.transactions, transactions)
    }

    /// Drop the oldest records so at most `max_records` remain.
    /// Returns how many were dropped.
    pub fn enforce_cap(&self, ledger: &mut Ledger, max_records: usize) -> usize {
        let len = ledger.transactions.len();
        if len <= max_records {
            return 0;
        }
        ledger.transactions.truncate(max_records);
        let dropped = len - max_records;
        warn!(dropped, max_records, "ledger over capacity, dropped oldest transactions");
        dropped
    }

    /// Look up a transaction by id.
    pub fn find<'a>(&self, ledger: &'a Ledger, id: &TransactionId) -> Option<&'a Transaction> {
        ledger.transactions.iter().find(|t| &t.id == id)
    }

    /// A small demo month: one salary and three everyday expenses, each with
    /// a fresh id. Prepended as a block, salary first.
    pub fn sample_transactions(&self) -> Vec<Transaction> {
        vec![
            Transaction::income("2025-08-01", "Salary", "Salary", amount(50_000_00)),
            Transaction::expense("2025-08-02", "Groceries", "Food", amount(1_200_00)),
            Transaction::expense("2025-08-03", "Movie", "Entertainment", amount(350_00)),
            Transaction::expense("2025-08-04", "Bus pass", "Transport", amount(300_00)),
        ]
    }
}

fn amount(cents: i64) -> Amount {
    Amount::new(Decimal::new(cents, 2))
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
