use crate::models::amount::Amount;
use crate::models::analytics::Totals;
use crate::models::filter::CategoryFilter;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionType};

/// Filtered views and running totals for the list and summary figures.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Transactions matching `filter`, in ledger order.
    pub fn filter_by_category<'a>(
        &self,
        ledger: &'a Ledger,
        filter: &CategoryFilter,
    ) -> Vec<&'a Transaction> {
        ledger.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Income, expense and net over `transactions`, summed as exact decimals.
    pub fn totals<'a, I>(&self, transactions: I) -> Totals
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Amount::ZERO;
        let mut expense = Amount::ZERO;
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income = income + txn.amount,
                TransactionType::Expense => expense = expense + txn.amount,
            }
        }
        Totals::new(income, expense)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
