// ═══════════════════════════════════════════════════════════════════
// Integration Tests — ExpenseTracker facade end to end
// ═══════════════════════════════════════════════════════════════════

use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::amount::Amount;
use expense_tracker_core::models::draft::TransactionDraft;
use expense_tracker_core::models::filter::CategoryFilter;
use expense_tracker_core::models::settings::{TrackerConfig, DEFAULT_STORAGE_KEY};
use expense_tracker_core::models::transaction::{Transaction, TransactionId, TransactionType};
use expense_tracker_core::render::recorder::RecordingRenderer;
use expense_tracker_core::storage::file::FileStore;
use expense_tracker_core::storage::manager::SaveStatus;
use expense_tracker_core::storage::memory::MemoryStore;
use expense_tracker_core::storage::traits::KeyValueStore;
use expense_tracker_core::ExpenseTracker;

fn amt(s: &str) -> Amount {
    Amount::parse(s).unwrap()
}

fn draft(kind: TransactionType, desc: &str, category: &str, amount: &str) -> TransactionDraft {
    TransactionDraft {
        kind,
        date: "2025-08-02".into(),
        description: desc.into(),
        category: category.into(),
        amount: amount.into(),
    }
}

fn groceries() -> TransactionDraft {
    draft(TransactionType::Expense, "Groceries", "Food", "1200")
}

fn with_recorder(tracker: &mut ExpenseTracker<MemoryStore>) -> RecordingRenderer {
    let recorder = RecordingRenderer::new();
    tracker.attach_renderer(Box::new(recorder.clone()));
    tracker.attach_chart_renderer(Box::new(recorder.clone()));
    recorder
}

// ═══════════════════════════════════════════════════════════════════
// Opening and configuration
// ═══════════════════════════════════════════════════════════════════

mod opening {
    use super::*;

    #[test]
    fn empty_store_opens_empty() {
        let tracker = ExpenseTracker::in_memory();
        assert_eq!(tracker.transaction_count(), 0);
        assert_eq!(tracker.filter(), &CategoryFilter::All);
        assert_eq!(tracker.config(), &TrackerConfig::default());
    }

    #[test]
    fn corrupt_store_opens_empty() {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_STORAGE_KEY, "{garbage").unwrap();
        let tracker = ExpenseTracker::open_default(store);
        assert_eq!(tracker.transaction_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = TrackerConfig {
            max_records: 0,
            ..TrackerConfig::default()
        };
        let result = ExpenseTracker::open(MemoryStore::new(), config);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn custom_storage_key() {
        let config = TrackerConfig {
            storage_key: "custom:key".into(),
            ..TrackerConfig::default()
        };
        let mut tracker = ExpenseTracker::open(MemoryStore::new(), config).unwrap();
        let result = tracker.submit(groceries()).unwrap();
        assert_eq!(result.save, SaveStatus::Saved);

        assert!(tracker.store().get("custom:key").unwrap().is_some());
        assert!(tracker.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn config_from_json_drives_currency() {
        let config = TrackerConfig::from_json(r#"{"currency_symbol":"$"}"#).unwrap();
        let tracker = ExpenseTracker::open(MemoryStore::new(), config).unwrap();
        assert_eq!(tracker.format_amount(amt("1234.5")), "$1,234.50");
    }

    #[test]
    fn default_currency_formatting() {
        let tracker = ExpenseTracker::in_memory();
        assert_eq!(tracker.format_amount(amt("-1200")), "₹-1,200.00");
    }

    #[test]
    fn debug_output_summarizes() {
        let tracker = ExpenseTracker::in_memory();
        let debug = format!("{tracker:?}");
        assert!(debug.contains("ExpenseTracker"));
        assert!(debug.contains("memory"));
    }

    #[test]
    fn tracing_init_is_idempotent() {
        expense_tracker_core::logging::init_tracing();
        expense_tracker_core::logging::init_tracing();
    }

    #[test]
    fn log_directives_come_from_environment() {
        use expense_tracker_core::logging::{env_filter, DEFAULT_DIRECTIVE};

        let custom = env_filter(Some("expense_tracker_core=debug")).to_string();
        assert!(custom.contains("expense_tracker_core=debug"), "{custom}");
        assert!(!custom.contains("info"), "{custom}");

        for fallback in [None, Some(""), Some("expense_tracker_core=loud")] {
            let filter = env_filter(fallback).to_string();
            assert!(filter.contains(DEFAULT_DIRECTIVE), "{fallback:?} -> {filter}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Adding, deleting, editing
// ═══════════════════════════════════════════════════════════════════

mod mutations {
    use super::*;

    #[test]
    fn submit_persists_and_reloads() {
        let mut tracker = ExpenseTracker::in_memory();
        let result = tracker.submit(groceries()).unwrap();
        assert_eq!(result.save, SaveStatus::Saved);

        let head = tracker.transactions()[0].clone();
        assert_eq!(head.id, result.value);
        assert_eq!(head.amount.to_string(), "1200.00");
        assert_eq!(head.description, "Groceries");

        let reopened = ExpenseTracker::open_default(tracker.into_store());
        assert_eq!(reopened.transactions(), &[head]);
    }

    #[test]
    fn reload_reads_back_from_store() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(groceries()).unwrap();
        let before = tracker.transactions().to_vec();
        tracker.reload();
        assert_eq!(tracker.transactions(), before.as_slice());
    }

    #[test]
    fn newest_first() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(draft(TransactionType::Expense, "first", "Food", "1")).unwrap();
        tracker.submit(draft(TransactionType::Expense, "second", "Food", "2")).unwrap();
        let descs: Vec<_> = tracker.transactions().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descs, vec!["second", "first"]);
    }

    #[test]
    fn validation_failure_changes_nothing() {
        let mut tracker = ExpenseTracker::in_memory();
        let bad = draft(TransactionType::Expense, "   ", "Food", "10");
        match tracker.submit(bad) {
            Err(CoreError::Validation(msg)) => assert_eq!(msg, "Please add a short description."),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(tracker.transaction_count(), 0);
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn non_positive_amount_rejected() {
        let mut tracker = ExpenseTracker::in_memory();
        for amount in ["0", "-5", "abc"] {
            let result = tracker.submit(draft(TransactionType::Expense, "x", "Food", amount));
            assert!(matches!(result, Err(CoreError::Validation(_))), "amount {amount}");
        }
        assert_eq!(tracker.transaction_count(), 0);
    }

    #[test]
    fn add_transaction_directly() {
        let mut tracker = ExpenseTracker::in_memory();
        let txn = Transaction::income("2025-08-01", "Salary", "Salary", amt("50000"));
        let id = txn.id.clone();
        assert_eq!(tracker.add_transaction(txn), SaveStatus::Saved);
        assert_eq!(tracker.get_transaction(&id).unwrap().kind, TransactionType::Income);
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut tracker = ExpenseTracker::in_memory();
        let id = tracker.submit(groceries()).unwrap().value;
        assert_eq!(tracker.delete_transaction(&id), SaveStatus::Saved);
        assert_eq!(tracker.transaction_count(), 0);

        let reopened = ExpenseTracker::open_default(tracker.into_store());
        assert_eq!(reopened.transaction_count(), 0);
    }

    #[test]
    fn delete_unknown_id_is_unchanged() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(groceries()).unwrap();
        let before = tracker.transactions().to_vec();

        let status = tracker.delete_transaction(&TransactionId::from("does-not-exist"));
        assert_eq!(status, SaveStatus::Unchanged);
        assert_eq!(tracker.transactions(), before.as_slice());
    }

    #[test]
    fn begin_edit_removes_and_prefills() {
        let mut tracker = ExpenseTracker::in_memory();
        let id = tracker.submit(groceries()).unwrap().value;

        let edit = tracker.begin_edit(&id).unwrap();
        assert_eq!(edit.save, SaveStatus::Saved);
        assert_eq!(tracker.transaction_count(), 0);

        let prefilled = edit.value;
        assert_eq!(prefilled.description, "Groceries");
        assert_eq!(prefilled.category, "Food");
        assert_eq!(prefilled.amount, "1200.00");
        assert_eq!(prefilled.kind, TransactionType::Expense);

        let resubmitted = tracker
            .submit(TransactionDraft {
                amount: "1300".into(),
                ..prefilled
            })
            .unwrap();
        assert_ne!(resubmitted.value, id);
        assert_eq!(tracker.transactions()[0].amount, amt("1300"));
        assert_eq!(tracker.transaction_count(), 1);
    }

    #[test]
    fn begin_edit_unknown_id() {
        let mut tracker = ExpenseTracker::in_memory();
        assert!(tracker.begin_edit(&TransactionId::from("nope")).is_none());
    }

    #[test]
    fn clear_all_empties_store() {
        let mut tracker = ExpenseTracker::in_memory();
        assert!(tracker.add_sample_data().is_ok());
        assert_eq!(tracker.clear_all(), SaveStatus::Saved);
        assert_eq!(tracker.transaction_count(), 0);

        let reopened = ExpenseTracker::open_default(tracker.into_store());
        assert_eq!(reopened.transaction_count(), 0);
    }

    #[test]
    fn sample_data_prepends_four() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(groceries()).unwrap();
        assert_eq!(tracker.add_sample_data(), SaveStatus::Saved);
        assert_eq!(tracker.transaction_count(), 5);
        assert_eq!(tracker.transactions()[0].description, "Salary");
        assert_eq!(tracker.transactions()[4].description, "Groceries");

        let totals = tracker.totals();
        assert_eq!(totals.income, amt("50000"));
        assert_eq!(totals.expense, amt("3050"));
        assert_eq!(totals.net, amt("46950"));
    }

    #[test]
    fn blank_draft_defaults() {
        let tracker = ExpenseTracker::in_memory();
        let blank = tracker.blank_draft();
        assert_eq!(blank.kind, TransactionType::Expense);
        assert_eq!(blank.date.len(), 10);
        assert!(blank.description.is_empty());
        assert!(blank.amount.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Capacity and storage failures
// ═══════════════════════════════════════════════════════════════════

mod capacity {
    use super::*;

    #[test]
    fn cap_keeps_newest_five_hundred() {
        let mut tracker = ExpenseTracker::in_memory();
        for i in 0..=500 {
            let status = tracker.add_transaction(Transaction::expense(
                "2025-08-02",
                format!("txn {i}"),
                "Food",
                amt("1"),
            ));
            assert!(status.is_ok());
        }
        assert_eq!(tracker.transaction_count(), 500);
        assert_eq!(tracker.transactions()[0].description, "txn 500");
        assert_eq!(tracker.transactions()[499].description, "txn 1");
        assert!(tracker.transactions().iter().all(|t| t.description != "txn 0"));

        let reopened = ExpenseTracker::open_default(tracker.into_store());
        assert_eq!(reopened.transaction_count(), 500);
    }

    #[test]
    fn cap_applies_to_imports() {
        let config = TrackerConfig {
            max_records: 3,
            ..TrackerConfig::default()
        };
        let mut tracker = ExpenseTracker::open(MemoryStore::new(), config).unwrap();
        tracker.submit(groceries()).unwrap();
        let imported = tracker
            .import_json(r#"[{"desc":"a"},{"desc":"b"},{"desc":"c"}]"#)
            .unwrap();
        assert_eq!(imported.value, 3);
        let descs: Vec<_> = tracker.transactions().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descs, vec!["a", "b", "c"]);
    }

    #[test]
    fn storage_full_keeps_in_memory_state() {
        let mut tracker = ExpenseTracker::open_default(MemoryStore::with_quota(0));
        let result = tracker.submit(groceries()).unwrap();
        assert_eq!(result.save, SaveStatus::StorageFull);
        assert_eq!(
            result.save.warning().as_deref(),
            Some("Storage limit exceeded! Please export or clear old transactions.")
        );
        assert_eq!(tracker.transaction_count(), 1);
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn storage_full_then_space_freed() {
        let mut tracker = ExpenseTracker::open_default(MemoryStore::with_quota(0));
        let _ = tracker.submit(groceries()).unwrap();
        let mut store = tracker.into_store();
        store.set_quota(None);

        // Nothing was written while full, so a reopen starts empty
        let tracker = ExpenseTracker::open_default(store);
        assert_eq!(tracker.transaction_count(), 0);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let mut first = ExpenseTracker::open_default(FileStore::new(&path));
        let id = first.submit(groceries()).unwrap().value;
        drop(first);

        let second = ExpenseTracker::open_default(FileStore::new(&path));
        assert_eq!(second.transaction_count(), 1);
        assert!(second.get_transaction(&id).is_some());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Filtering, totals, chart data
// ═══════════════════════════════════════════════════════════════════

mod views {
    use super::*;

    fn populated() -> ExpenseTracker<MemoryStore> {
        let mut tracker = ExpenseTracker::in_memory();
        let _ = tracker.add_sample_data();
        tracker
    }

    #[test]
    fn filter_narrows_list_and_totals() {
        let mut tracker = populated();
        tracker.select_category("Food");
        assert_eq!(tracker.filter(), &CategoryFilter::Category("Food".into()));
        assert_eq!(tracker.filtered_transactions().len(), 1);

        let totals = tracker.totals();
        assert_eq!(totals.income, Amount::ZERO);
        assert_eq!(totals.expense, amt("1200"));
        assert_eq!(tracker.overall_totals().income, amt("50000"));
    }

    #[test]
    fn selecting_all_clears_filter() {
        let mut tracker = populated();
        tracker.select_category("Food");
        tracker.select_category("all");
        assert_eq!(tracker.filter(), &CategoryFilter::All);
        assert_eq!(tracker.filtered_transactions().len(), 4);
    }

    #[test]
    fn breakdown_ignores_filter() {
        let mut tracker = populated();
        tracker.select_category("Salary");
        let breakdown = tracker.category_breakdown();
        assert_eq!(breakdown.labels(), vec!["Food", "Entertainment", "Transport"]);
        assert_eq!(breakdown.values(), vec![1200.0, 350.0, 300.0]);
    }

    #[test]
    fn available_categories_include_observed() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(draft(TransactionType::Expense, "vet", "Pets", "40")).unwrap();
        let cats = tracker.available_categories();
        assert_eq!(cats.first().map(String::as_str), Some("Food"));
        assert_eq!(cats.last().map(String::as_str), Some("Pets"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Import / export
// ═══════════════════════════════════════════════════════════════════

mod transfer {
    use super::*;

    #[test]
    fn export_clear_import_round_trip() {
        let mut tracker = ExpenseTracker::in_memory();
        let _ = tracker.add_sample_data();
        let totals = tracker.overall_totals();
        let exported = tracker.export_json().unwrap();

        let _ = tracker.clear_all();
        let imported = tracker.import_json(&exported).unwrap();
        assert_eq!(imported.value, 4);
        assert_eq!(imported.save, SaveStatus::Saved);
        assert_eq!(tracker.overall_totals(), totals);
    }

    #[test]
    fn export_ignores_filter() {
        let mut tracker = ExpenseTracker::in_memory();
        let _ = tracker.add_sample_data();
        tracker.select_category("Food");
        let exported: serde_json::Value =
            serde_json::from_str(&tracker.export_json().unwrap()).unwrap();
        assert_eq!(exported.as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn non_array_import_leaves_ledger() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.submit(groceries()).unwrap();
        let before = tracker.transactions().to_vec();
        let stored = tracker.store().get(DEFAULT_STORAGE_KEY).unwrap();

        let result = tracker.import_json(r#"{"a":1}"#);
        assert!(matches!(result, Err(CoreError::InvalidImportFormat(_))));
        assert_eq!(tracker.transactions(), before.as_slice());
        assert_eq!(tracker.store().get(DEFAULT_STORAGE_KEY).unwrap(), stored);
    }

    #[test]
    fn import_normalizes_records() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker
            .import_json(r#"[{"amount": -50, "category": "Food"}]"#)
            .unwrap();
        let t = &tracker.transactions()[0];
        assert_eq!(t.amount.to_string(), "50.00");
        assert_eq!(t.kind, TransactionType::Expense);
        assert_eq!(t.description, "Imported");
        assert_eq!(t.date.len(), 10);
    }

    #[test]
    fn oversized_amounts_import_as_zero() {
        let mut tracker = ExpenseTracker::in_memory();
        let recorder = with_recorder(&mut tracker);
        let doc = r#"[{"amount":"50000000000000000000000000000"},
                      {"amount":"50000000000000000000000000000"}]"#;
        let imported = tracker.import_json(doc).unwrap();
        assert_eq!(imported.value, 2);

        assert!(tracker.overall_totals().expense.is_zero());
        assert_eq!(tracker.category_breakdown().values(), vec![0.0]);
        assert_eq!(recorder.last_view().unwrap().transactions.len(), 2);

        let exported: serde_json::Value =
            serde_json::from_str(&tracker.export_json().unwrap()).unwrap();
        assert_eq!(exported[0]["amount"], "0.00");

        let mut reopened = ExpenseTracker::open_default(tracker.into_store());
        let recorder = with_recorder(&mut reopened);
        assert_eq!(reopened.transaction_count(), 2);
        assert!(recorder.last_chart().is_some());
    }

    #[test]
    fn largest_amounts_sum_across_full_ledger() {
        let mut tracker = ExpenseTracker::in_memory();
        let _ = with_recorder(&mut tracker);
        let record = r#"{"type":"income","amount":"1000000000000"}"#;
        let doc = format!("[{}]", vec![record; 500].join(","));
        tracker.import_json(&doc).unwrap();
        assert_eq!(tracker.overall_totals().income.to_string(), "500000000000000.00");
    }

    #[test]
    fn imported_dates_are_zero_padded() {
        let mut tracker = ExpenseTracker::in_memory();
        tracker.import_json(r#"[{"date":"2025-8-1"}]"#).unwrap();
        assert_eq!(tracker.transactions()[0].date, "2025-08-01");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Renderer contract
// ═══════════════════════════════════════════════════════════════════

mod rendering {
    use super::*;

    #[test]
    fn attaching_draws_once_each() {
        let mut tracker = ExpenseTracker::in_memory();
        let recorder = with_recorder(&mut tracker);
        assert_eq!(recorder.views().len(), 1);
        assert_eq!(recorder.charts().len(), 1);

        let chart = recorder.last_chart().unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.values.is_empty());
    }

    #[test]
    fn every_mutation_redraws_both() {
        let mut tracker = ExpenseTracker::in_memory();
        let recorder = with_recorder(&mut tracker);
        recorder.clear();

        let id = tracker.submit(groceries()).unwrap().value;
        let _ = tracker.delete_transaction(&id);
        let _ = tracker.add_sample_data();
        let _ = tracker.clear_all();
        assert_eq!(recorder.views().len(), 4);
        assert_eq!(recorder.charts().len(), 4);
    }

    #[test]
    fn failed_validation_does_not_redraw() {
        let mut tracker = ExpenseTracker::in_memory();
        let recorder = with_recorder(&mut tracker);
        recorder.clear();
        let _ = tracker.submit(draft(TransactionType::Expense, "x", "Food", ""));
        assert!(recorder.views().is_empty());
        assert!(recorder.charts().is_empty());
    }

    #[test]
    fn filter_change_redraws_list_only() {
        let mut tracker = ExpenseTracker::in_memory();
        let _ = tracker.add_sample_data();
        let recorder = with_recorder(&mut tracker);
        recorder.clear();

        tracker.select_category("Food");
        assert_eq!(recorder.views().len(), 1);
        assert!(recorder.charts().is_empty());

        let view = recorder.last_view().unwrap();
        assert_eq!(view.filter, CategoryFilter::Category("Food".into()));
        assert_eq!(view.transactions.len(), 1);
        assert_eq!(view.totals.expense, amt("1200"));
    }

    #[test]
    fn view_carries_categories_and_chart_carries_expenses() {
        let mut tracker = ExpenseTracker::in_memory();
        let recorder = with_recorder(&mut tracker);
        tracker.submit(draft(TransactionType::Expense, "vet", "Pets", "40")).unwrap();
        tracker.submit(draft(TransactionType::Income, "pay", "Salary", "100")).unwrap();

        let view = recorder.last_view().unwrap();
        assert!(view.categories.contains(&"Pets".to_string()));
        assert_eq!(view.totals.net, amt("60"));

        let chart = recorder.last_chart().unwrap();
        assert_eq!(chart.labels, vec!["Pets".to_string()]);
        assert_eq!(chart.values, vec![40.0]);
    }

    #[test]
    fn storage_full_still_redraws() {
        let mut tracker = ExpenseTracker::open_default(MemoryStore::with_quota(0));
        let recorder = RecordingRenderer::new();
        tracker.attach_renderer(Box::new(recorder.clone()));
        recorder.clear();

        let result = tracker.submit(groceries()).unwrap();
        assert_eq!(result.save, SaveStatus::StorageFull);
        assert_eq!(recorder.last_view().unwrap().transactions.len(), 1);
    }
}
