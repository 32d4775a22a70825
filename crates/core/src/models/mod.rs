pub mod amount;
pub mod analytics;
pub mod chart;
pub mod draft;
pub mod filter;
pub mod ledger;
pub mod settings;
pub mod transaction;
