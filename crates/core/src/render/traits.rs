use crate::models::analytics::Totals;
use crate::models::filter::CategoryFilter;
use crate::models::transaction::Transaction;

/// Everything the list/summary view needs to redraw.
#[derive(Debug, Clone)]
pub struct LedgerView<'a> {
    /// Transactions passing the active filter, newest first
    pub transactions: Vec<&'a Transaction>,

    /// Totals over `transactions` only
    pub totals: Totals,

    /// The active category filter
    pub filter: &'a CategoryFilter,

    /// Choices for the filter control
    pub categories: Vec<String>,

    /// Symbol to prefix formatted amounts with
    pub currency_symbol: &'a str,
}

/// Draws the transaction list and the summary figures.
///
/// Called after every mutation and every filter change.
pub trait LedgerRenderer {
    fn render(&mut self, view: &LedgerView<'_>);
}

/// Draws the proportional category breakdown.
///
/// `labels` and `values` have the same length and may both be empty, in
/// which case nothing should be drawn.
pub trait ChartRenderer {
    fn render_chart(&mut self, labels: &[String], values: &[f64]);
}
