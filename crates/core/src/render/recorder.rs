use std::cell::RefCell;
use std::rc::Rc;

use crate::models::analytics::Totals;
use crate::models::filter::CategoryFilter;
use crate::models::transaction::Transaction;

use super::traits::{ChartRenderer, LedgerRenderer, LedgerView};

/// An owned copy of one list/summary redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    pub filter: CategoryFilter,
    pub categories: Vec<String>,
}

/// An owned copy of one chart redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Headless renderer that keeps every frame it is asked to draw.
///
/// Clones share the same history, so one handle can be attached to a
/// tracker while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    views: Rc<RefCell<Vec<RenderedView>>>,
    charts: Rc<RefCell<Vec<RenderedChart>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn views(&self) -> Vec<RenderedView> {
        self.views.borrow().clone()
    }

    #[must_use]
    pub fn charts(&self) -> Vec<RenderedChart> {
        self.charts.borrow().clone()
    }

    #[must_use]
    pub fn last_view(&self) -> Option<RenderedView> {
        self.views.borrow().last().cloned()
    }

    #[must_use]
    pub fn last_chart(&self) -> Option<RenderedChart> {
        self.charts.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.views.borrow_mut().clear();
        self.charts.borrow_mut().clear();
    }
}

impl LedgerRenderer for RecordingRenderer {
    fn render(&mut self, view: &LedgerView<'_>) {
        self.views.borrow_mut().push(RenderedView {
            transactions: view.transactions.iter().map(|t| (*t).clone()).collect(),
            totals: view.totals,
            filter: view.filter.clone(),
            categories: view.categories.clone(),
        });
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_chart(&mut self, labels: &[String], values: &[f64]) {
        self.charts.borrow_mut().push(RenderedChart {
            labels: labels.to_vec(),
            values: values.to_vec(),
        });
    }
}
