use std::collections::HashSet;

use crate::models::ledger::Ledger;

/// Maintains the set of categories offered by the filter control.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Defaults first in their fixed order, then categories seen in the
    /// ledger in first-seen order, without duplicates.
    pub fn available_categories<S: AsRef<str>>(&self, ledger: &Ledger, defaults: &[S]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories = Vec::new();

        let observed = ledger.iter().map(|t| t.category.as_str());
        for category in defaults.iter().map(|c| c.as_ref()).chain(observed) {
            if seen.insert(category) {
                categories.push(category.to_string());
            }
        }
        categories
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
