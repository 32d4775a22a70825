use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Running totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income amounts
    pub income: Amount,

    /// Sum of all expense amounts
    pub expense: Amount,

    /// income - expense (may be negative)
    pub net: Amount,
}

impl Totals {
    pub fn new(income: Amount, expense: Amount) -> Self {
        Self {
            income,
            expense,
            net: income - expense,
        }
    }
}
