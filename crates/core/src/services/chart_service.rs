use std::collections::HashMap;

use crate::models::chart::{CategoryBreakdown, CategorySlice};
use crate::models::transaction::Transaction;

/// Builds the category breakdown the chart collaborator draws.
///
/// Only expenses count. Slices appear in the order their category is first
/// seen, which is the ledger's newest-first order.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    pub fn group_expenses_by_category<'a, I>(&self, transactions: I) -> CategoryBreakdown
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut slices: Vec<CategorySlice> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for txn in transactions.into_iter().filter(|t| t.is_expense()) {
            match index.get(txn.category.as_str()) {
                Some(&i) => slices[i].total = slices[i].total + txn.amount,
                None => {
                    index.insert(txn.category.as_str(), slices.len());
                    slices.push(CategorySlice {
                        category: txn.category.clone(),
                        total: txn.amount,
                    });
                }
            }
        }

        CategoryBreakdown { slices }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
