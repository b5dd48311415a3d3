//! Caller-owned view state and the combined query pipeline.
//!
//! The engine functions in this module's siblings are pure; all mutable
//! state (search term, active filters, sort key, page window) lives in
//! [`ListViewState`], owned by the caller and threaded through
//! [`run_query`] on every render. This replaces the source's implicit
//! re-render-triggered recomputation with explicit, testable functions.

use std::collections::BTreeMap;

use super::filter::{ActiveFilters, FilterSelection, apply_filters, apply_search, count_by_category};
use super::page::{PageInfo, PageWindow, paginate};
use super::record::ListRecord;
use super::sort::{SortKey, apply_sort};
use super::view_config::ViewConfig;

/// Mutable view-model state for one list view.
///
/// Invariant: `1 <= current_page <= max(1, total_pages)`. The setters
/// uphold it by resetting to page 1 whenever the search term, a filter, or
/// the sort key changes; the page movers take the current total so they
/// never step outside the range. The source reset the page only on search
/// changes, leaving it out of range after a tab change, which this
/// deliberately does not reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    search_term: String,
    filters: ActiveFilters,
    sort: Option<SortKey>,
    window: PageWindow,
}

impl ListViewState {
    /// Creates state with an empty search, no filters, no sort, page 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: ActiveFilters::new(),
            sort: None,
            window: PageWindow::first(page_size),
        }
    }

    /// Returns the current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the active filters.
    #[must_use]
    pub const fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Returns the active sort key, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Returns the current page window.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        self.window
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.window.current_page
    }

    /// Replaces the search term, resetting to page 1 when it changes.
    pub fn set_search_term(&mut self, term: &str) {
        if self.search_term != term {
            self.search_term = term.to_owned();
            self.window.current_page = 1;
        }
    }

    /// Appends a character to the search term and resets to page 1.
    pub fn push_search_char(&mut self, ch: char) {
        self.search_term.push(ch);
        self.window.current_page = 1;
    }

    /// Removes the last character of the search term and resets to page 1.
    pub fn pop_search_char(&mut self) {
        if self.search_term.pop().is_some() {
            self.window.current_page = 1;
        }
    }

    /// Clears the search term, resetting to page 1 if it was non-empty.
    pub fn clear_search(&mut self) {
        self.set_search_term("");
    }

    /// Sets a category selection, resetting to page 1.
    pub fn set_filter(&mut self, field: &str, selection: FilterSelection) {
        self.filters.set(field, selection);
        self.window.current_page = 1;
    }

    /// Sets or clears the sort key, resetting to page 1.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
        self.window.current_page = 1;
    }

    /// Jumps straight to the supplied page (1-based); 0 is treated as 1.
    ///
    /// The page is not clamped against a total here: an out-of-range
    /// page stays representable and renders as an empty window, the same
    /// contract [`super::page::paginate`] documents.
    pub const fn set_page(&mut self, page: usize) {
        self.window.current_page = if page == 0 { 1 } else { page };
    }

    /// Advances one page, saturating at the supplied total.
    pub const fn next_page(&mut self, total_pages: usize) {
        if self.window.current_page < total_pages {
            self.window.current_page += 1;
        }
    }

    /// Retreats one page, saturating at page 1.
    pub const fn previous_page(&mut self) {
        if self.window.current_page > 1 {
            self.window.current_page -= 1;
        }
    }

    /// Clamps the page into `1..=max(1, total_pages)`.
    ///
    /// The setters already keep the invariant; this exists for callers
    /// that shrink the underlying collection out from under the state.
    pub const fn clamp_page(&mut self, total_pages: usize) {
        let limit = if total_pages == 0 { 1 } else { total_pages };
        if self.window.current_page > limit {
            self.window.current_page = limit;
        }
        if self.window.current_page == 0 {
            self.window.current_page = 1;
        }
    }
}

/// The engine's output for one render: the visible window plus the counts
/// needed to label pagination and tab controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewOutput {
    /// Indices of the records visible on the current page, in display order.
    pub visible: Vec<usize>,
    /// Derived page state for the filtered result.
    pub page: PageInfo,
    /// Count of records after filters and search, before pagination.
    pub filtered_count: usize,
    /// Base counts per category value over the unfiltered collection.
    pub base_counts: BTreeMap<String, usize>,
}

/// Runs the full pipeline: filter, search, sort, paginate, count.
///
/// The record slice is borrowed immutably end to end; the output holds
/// indices into it. Calling this twice with identical inputs yields
/// identical outputs.
#[must_use]
pub fn run_query<R: ListRecord>(
    records: &[R],
    config: &ViewConfig,
    state: &ListViewState,
) -> ListViewOutput {
    let filtered = apply_filters(records, state.filters());
    let searched = apply_search(
        records,
        &filtered,
        state.search_term(),
        config.searchable_fields,
    );
    let sorted = apply_sort(records, &searched, state.sort());
    let (visible, page) = paginate(&sorted, state.window());
    let base_counts = count_by_category(records, config.category_field);

    ListViewOutput {
        visible,
        page,
        filtered_count: sorted.len(),
        base_counts,
    }
}
