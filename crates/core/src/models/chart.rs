use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Summed expenses for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub total: Amount,
}

/// Expense totals per category, in order of first appearance.
///
/// The core computes the numbers; the chart collaborator only draws them.
/// An empty breakdown means there is nothing to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
}

impl CategoryBreakdown {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Total for a category, if any expense was recorded under it.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.slices
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.total)
    }

    /// Chart labels, one per slice.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.slices.iter().map(|s| s.category.clone()).collect()
    }

    /// Chart values, one per slice, rounded to two decimals.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.total.to_f64()).collect()
    }
}
