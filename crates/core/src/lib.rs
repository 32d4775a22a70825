pub mod errors;
pub mod logging;
pub mod models;
pub mod render;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use tracing::{info, warn};

use errors::CoreError;
use models::{
    amount::Amount,
    analytics::Totals,
    chart::CategoryBreakdown,
    draft::TransactionDraft,
    filter::CategoryFilter,
    ledger::Ledger,
    settings::TrackerConfig,
    transaction::{Transaction, TransactionId},
};
use render::traits::{ChartRenderer, LedgerRenderer, LedgerView};
use services::{
    aggregation_service::AggregationService, category_service::CategoryService,
    chart_service::ChartService, ledger_service::LedgerService,
    transfer_service::TransferService,
};
use storage::manager::{Persisted, SaveStatus, StorageManager};
use storage::memory::MemoryStore;
use storage::traits::KeyValueStore;

/// Main entry point for the Expense Tracker core library.
///
/// Owns the ledger, the store it persists to, the active filter and the
/// attached renderers. Every command mutates the ledger, saves it, then
/// redraws; a failed save comes back as a [`SaveStatus`] warning while the
/// in-memory ledger stays as mutated.
#[must_use]
pub struct ExpenseTracker<S: KeyValueStore> {
    ledger: Ledger,
    store: S,
    config: TrackerConfig,
    filter: CategoryFilter,
    ledger_service: LedgerService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
    category_service: CategoryService,
    transfer_service: TransferService,
    renderer: Option<Box<dyn LedgerRenderer>>,
    chart_renderer: Option<Box<dyn ChartRenderer>>,
}

impl<S: KeyValueStore> std::fmt::Debug for ExpenseTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("transactions", &self.ledger.len())
            .field("store", &self.store.name())
            .field("config", &self.config)
            .field("filter", &self.filter)
            .field("renderer", &self.renderer.is_some())
            .field("chart_renderer", &self.chart_renderer.is_some())
            .finish()
    }
}

impl ExpenseTracker<MemoryStore> {
    /// An empty tracker on an unlimited in-memory store, default settings.
    pub fn in_memory() -> Self {
        Self::open_default(MemoryStore::new())
    }
}

impl<S: KeyValueStore> ExpenseTracker<S> {
    /// Load the ledger from `store` using `config`.
    ///
    /// Missing or corrupt stored data yields an empty ledger; only an
    /// invalid configuration is an error.
    pub fn open(store: S, config: TrackerConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::build(store, config))
    }

    /// Load the ledger from `store` with default settings.
    pub fn open_default(store: S) -> Self {
        Self::build(store, TrackerConfig::default())
    }

    // ── Collaborators ───────────────────────────────────────────────

    /// Attach the list/summary renderer and draw the current state.
    pub fn attach_renderer(&mut self, renderer: Box<dyn LedgerRenderer>) {
        self.renderer = Some(renderer);
        self.render_view();
    }

    /// Attach the chart renderer and draw the current breakdown.
    pub fn attach_chart_renderer(&mut self, renderer: Box<dyn ChartRenderer>) {
        self.chart_renderer = Some(renderer);
        self.render_chart();
    }

    /// Redraw every attached renderer.
    pub fn refresh(&mut self) {
        self.render_view();
        self.render_chart();
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Validate a form submission and add it as a new transaction.
    ///
    /// Returns `CoreError::Validation` (ledger untouched) if the draft is
    /// incomplete, otherwise the new id and the save status.
    pub fn submit(&mut self, draft: TransactionDraft) -> Result<Persisted<TransactionId>, CoreError> {
        let txn = draft.into_transaction()?;
        let id = txn.id.clone();
        let save = self.add_transaction(txn);
        Ok(Persisted { value: id, save })
    }

    /// Add an already-valid transaction at the front of the ledger.
    pub fn add_transaction(&mut self, txn: Transaction) -> SaveStatus {
        self.ledger_service.add(&mut self.ledger, txn);
        self.commit()
    }

    /// Delete a transaction. An unknown id changes nothing and returns
    /// `SaveStatus::Unchanged`.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> SaveStatus {
        match self.ledger_service.delete_by_id(&mut self.ledger, id) {
            Some(_) => self.commit(),
            None => SaveStatus::Unchanged,
        }
    }

    /// Open a transaction for editing.
    ///
    /// The record is removed from the ledger and returned as a prefilled
    /// draft; the edit completes when the user submits the draft again.
    /// Returns `None` if there is no such id.
    pub fn begin_edit(&mut self, id: &TransactionId) -> Option<Persisted<TransactionDraft>> {
        let removed = self.ledger_service.delete_by_id(&mut self.ledger, id)?;
        let draft = TransactionDraft::from_transaction(&removed);
        let save = self.commit();
        Some(Persisted { value: draft, save })
    }

    /// Remove every transaction.
    pub fn clear_all(&mut self) -> SaveStatus {
        let previous = self.ledger_service.replace_all(&mut self.ledger, Vec::new());
        info!(cleared = previous.len(), "cleared all transactions");
        self.commit()
    }

    /// Prepend the demo transactions.
    pub fn add_sample_data(&mut self) -> SaveStatus {
        let sample = self.ledger_service.sample_transactions();
        self.ledger_service.prepend_all(&mut self.ledger, sample);
        self.commit()
    }

    /// Import a JSON document, prepending its records as one block.
    ///
    /// Returns `CoreError::InvalidImportFormat` (ledger untouched) if the
    /// document is not a JSON array, otherwise the number imported.
    pub fn import_json(&mut self, document: &str) -> Result<Persisted<usize>, CoreError> {
        let count = self
            .transfer_service
            .import_append(&mut self.ledger, document, today())?;
        let save = self.commit();
        Ok(Persisted { value: count, save })
    }

    /// Export every transaction (ignoring the filter) as pretty JSON.
    pub fn export_json(&self) -> Result<String, CoreError> {
        self.transfer_service.export_all(&self.ledger)
    }

    /// Change the category filter and redraw the list.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.render_view();
    }

    /// Change the filter from a filter-control selector (`"all"` or a
    /// category name).
    pub fn select_category(&mut self, selector: &str) {
        self.set_filter(CategoryFilter::from_selector(selector));
    }

    /// Discard in-memory state and read the ledger back from the store.
    pub fn reload(&mut self) {
        self.ledger = StorageManager::load(&self.store, &self.config.storage_key);
        self.refresh();
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All transactions, newest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    #[must_use]
    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.ledger_service.find(&self.ledger, id)
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Transactions passing the active filter, newest first.
    #[must_use]
    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.aggregation_service
            .filter_by_category(&self.ledger, &self.filter)
    }

    /// Totals over the filtered transactions (what the summary shows).
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.aggregation_service
            .totals(self.filtered_transactions())
    }

    /// Totals over the whole ledger, regardless of filter.
    #[must_use]
    pub fn overall_totals(&self) -> Totals {
        self.aggregation_service.totals(&self.ledger)
    }

    /// Expense totals per category over the whole ledger.
    #[must_use]
    pub fn category_breakdown(&self) -> CategoryBreakdown {
        self.chart_service.group_expenses_by_category(&self.ledger)
    }

    /// Choices for the filter control.
    #[must_use]
    pub fn available_categories(&self) -> Vec<String> {
        self.category_service
            .available_categories(&self.ledger, &self.config.default_categories)
    }

    /// A reset entry form: expense, dated today.
    #[must_use]
    pub fn blank_draft(&self) -> TransactionDraft {
        TransactionDraft::blank(today())
    }

    /// Format an amount with the configured currency symbol.
    #[must_use]
    pub fn format_amount(&self, amount: Amount) -> String {
        amount.format_currency(&self.config.currency_symbol)
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(store: S, config: TrackerConfig) -> Self {
        let ledger = StorageManager::load(&store, &config.storage_key);
        info!(store = store.name(), count = ledger.len(), "opened ledger");

        Self {
            ledger,
            store,
            config,
            filter: CategoryFilter::All,
            ledger_service: LedgerService::new(),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
            category_service: CategoryService::new(),
            transfer_service: TransferService::new(),
            renderer: None,
            chart_renderer: None,
        }
    }

    /// Save then redraw. Runs after every mutation.
    fn commit(&mut self) -> SaveStatus {
        let save = self.persist();
        self.refresh();
        save
    }

    fn persist(&mut self) -> SaveStatus {
        self.ledger_service
            .enforce_cap(&mut self.ledger, self.config.max_records);
        let save = SaveStatus::from(StorageManager::save(
            &mut self.store,
            &self.config.storage_key,
            &self.ledger,
        ));
        if let Some(message) = save.warning() {
            warn!(store = self.store.name(), count = self.ledger.len(), "save failed: {message}");
        }
        save
    }

    fn render_view(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let transactions = self
            .aggregation_service
            .filter_by_category(&self.ledger, &self.filter);
        let totals = self.aggregation_service.totals(transactions.iter().copied());
        let categories = self
            .category_service
            .available_categories(&self.ledger, &self.config.default_categories);
        let view = LedgerView {
            transactions,
            totals,
            filter: &self.filter,
            categories,
            currency_symbol: &self.config.currency_symbol,
        };
        renderer.render(&view);
    }

    fn render_chart(&mut self) {
        let Some(renderer) = self.chart_renderer.as_mut() else {
            return;
        };
        let breakdown = self.chart_service.group_expenses_by_category(&self.ledger);
        renderer.render_chart(&breakdown.labels(), &breakdown.values());
    }
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
