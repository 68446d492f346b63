//! The score view controller.
//!
//! A `Scorecard` owns everything one mounted score view knows: the load
//! phase, the full collection once it arrives, the two search inputs, the
//! applied query, the filtered view and the current page. It is created on
//! mount and dropped on unmount; nothing here is global.

use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::debug;

use crate::error::FetchError;
use crate::filter::{filter_indices, ScoreQuery};
use crate::loader::LoadResult;
use crate::model::ScoreRecord;
use crate::paginate::Paginator;

/// Where the initial load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
enum LoadState {
    Loading,
    Ready(Vec<ScoreRecord>),
    Failed(FetchError),
}

/// State controller for one score view.
#[derive(Debug)]
pub struct Scorecard {
    load: LoadState,
    email_input: String,
    module_input: String,
    applied: ScoreQuery,
    /// Indices into the full collection, ascending.
    filtered: Vec<usize>,
    paginator: Paginator,
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::with_paginator(Paginator::default())
    }
}

impl Scorecard {
    /// A freshly mounted view in the loading phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self::with_paginator(Paginator::new(page_size))
    }

    fn with_paginator(paginator: Paginator) -> Self {
        Self {
            load: LoadState::Loading,
            email_input: String::new(),
            module_input: String::new(),
            applied: ScoreQuery::default(),
            filtered: Vec::new(),
            paginator,
        }
    }

    /// Apply the outcome of the initial load.
    ///
    /// Only the first call has any effect; the phase is terminal afterwards.
    /// Returns whether the result was applied.
    pub fn finish_load(&mut self, result: LoadResult) -> bool {
        if !matches!(self.load, LoadState::Loading) {
            debug!("load already finished, ignoring late result");
            return false;
        }
        match result {
            Ok(records) => {
                debug!(count = records.len(), "score view ready");
                self.filtered = (0..records.len()).collect();
                self.load = LoadState::Ready(records);
            }
            Err(e) => {
                debug!(kind = e.kind(), "score view failed");
                self.load = LoadState::Failed(e);
            }
        }
        self.paginator.reset();
        true
    }

    pub fn phase(&self) -> Phase {
        match self.load {
            LoadState::Loading => Phase::Loading,
            LoadState::Ready(_) => Phase::Ready,
            LoadState::Failed(_) => Phase::Failed,
        }
    }

    /// The failure that ended the load, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        match &self.load {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// The full collection; empty until the load succeeds.
    pub fn records(&self) -> &[ScoreRecord] {
        match &self.load {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }

    /// Update the email search input. Does not filter until `search`.
    pub fn set_email_query(&mut self, text: impl Into<String>) {
        self.email_input = text.into();
    }

    /// Update the module search input. Does not filter until `search`.
    pub fn set_module_query(&mut self, text: impl Into<String>) {
        self.module_input = text.into();
    }

    pub fn email_query(&self) -> &str {
        &self.email_input
    }

    pub fn module_query(&self) -> &str {
        &self.module_input
    }

    /// The query that produced the current filtered view.
    pub fn applied_query(&self) -> &ScoreQuery {
        &self.applied
    }

    /// Filter the full collection by the current inputs and go to page 1.
    pub fn search(&mut self) {
        self.applied = ScoreQuery::new(self.email_input.clone(), self.module_input.clone());
        self.filtered = filter_indices(self.records(), &self.applied);
        self.paginator.reset();
        debug!(
            email = self.applied.email(),
            module = self.applied.module(),
            matches = self.filtered.len(),
            "search applied"
        );
    }

    /// Empty both inputs, show the full collection and go to page 1.
    pub fn clear(&mut self) {
        self.email_input.clear();
        self.module_input.clear();
        self.applied = ScoreQuery::default();
        self.filtered = (0..self.records().len()).collect();
        self.paginator.reset();
        debug!("search cleared");
    }

    /// Records in the filtered view, in collection order.
    pub fn filtered(&self) -> impl Iterator<Item = &ScoreRecord> + '_ {
        let records = self.records();
        self.filtered.iter().filter_map(move |&i| records.get(i))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.filtered.len())
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    /// Go to `page` if it exists; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.paginator.go_to(page, self.filtered.len());
        if !moved {
            debug!(page, total = self.total_pages(), "page out of range, ignored");
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    /// What should be on screen right now.
    pub fn view(&self) -> View<'_> {
        match &self.load {
            LoadState::Loading => View::Loading,
            LoadState::Failed(error) => View::Failed {
                message: error.user_message(),
                error,
            },
            LoadState::Ready(records) => View::Ready(self.page_view(records)),
        }
    }

    fn page_view<'a>(&'a self, records: &'a [ScoreRecord]) -> PageView<'a> {
        let len = self.filtered.len();
        let rows = self.filtered[self.paginator.range(len)]
            .iter()
            .enumerate()
            .filter_map(|(local, &i)| {
                records.get(i).map(|record| PageRow {
                    number: self.paginator.row_number(local),
                    record,
                })
            })
            .collect();
        PageView {
            rows,
            current_page: self.paginator.current(),
            total_pages: self.paginator.total_pages(len),
            total_matches: len,
            has_prev: self.paginator.has_prev(),
            has_next: self.paginator.has_next(len),
        }
    }
}

/// The renderable state of a score view.
#[derive(Debug)]
pub enum View<'a> {
    /// The initial load has not finished; no table or controls.
    Loading,
    /// The initial load failed; show `message` instead of the table.
    Failed {
        message: &'static str,
        error: &'a FetchError,
    },
    /// Data is loaded; show the current page.
    Ready(PageView<'a>),
}

/// One page of the filtered view plus its pagination controls.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub rows: Vec<PageRow<'a>>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    /// Whether "Prev" is enabled.
    pub has_prev: bool,
    /// Whether "Next" is enabled.
    pub has_next: bool,
}

impl PageView<'_> {
    /// The "Page X of Y" label.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// A visible row: its sequential number and the record behind it.
#[derive(Debug, Serialize)]
pub struct PageRow<'a> {
    pub number: usize,
    #[serde(flatten)]
    pub record: &'a ScoreRecord,
}
