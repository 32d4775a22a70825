use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Category selector applied to the list view and its totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every transaction
    #[default]
    All,
    /// Only transactions whose category matches exactly
    Category(String),
}

impl CategoryFilter {
    /// Selector value that stands for "all categories".
    pub const ALL_SELECTOR: &'static str = "all";

    /// Parse a selector as it comes from the filter control.
    /// `"all"` and the empty string select everything.
    pub fn from_selector(selector: &str) -> Self {
        if selector.is_empty() || selector == Self::ALL_SELECTOR {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(selector.to_string())
        }
    }

    /// The selector value to put back into the filter control.
    pub fn selector(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_SELECTOR,
            CategoryFilter::Category(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => &txn.category == name,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All categories"),
            CategoryFilter::Category(name) => write!(f, "{name}"),
        }
    }
}
