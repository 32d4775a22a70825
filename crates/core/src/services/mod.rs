pub mod aggregation_service;
pub mod category_service;
pub mod chart_service;
pub mod ledger_service;
pub mod transfer_service;
