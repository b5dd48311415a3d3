//! Static configuration describing a parameterised list view.
//!
//! The source duplicated one management screen per entity, each with its own
//! copy of the filtering code. Here a single engine is driven by a
//! [`ViewConfig`] naming the searchable fields, the category (tab) field,
//! the table columns, and the page size, so each section is configuration
//! rather than a separate code path.

use super::filter::FilterSelection;

/// A table column: the record field it reads and how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Record field name supplied to [`ListRecord::field`].
    ///
    /// [`ListRecord::field`]: super::record::ListRecord::field
    pub field: &'static str,
    /// Column header label.
    pub label: &'static str,
    /// Display width in columns.
    pub width: usize,
}

/// A filter tab: its label and the category value it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    /// Tab label shown in the tab bar.
    pub label: &'static str,
    /// Category value this tab requires, or `None` for the "All" sentinel.
    pub value: Option<&'static str>,
}

impl TabSpec {
    /// Returns the filter selection this tab applies.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        self.value
            .map_or(FilterSelection::All, |value| {
                FilterSelection::Equals(value.to_owned())
            })
    }
}

/// Configuration for one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Section title shown above the table.
    pub title: &'static str,
    /// Fields searched by the free-text query.
    pub searchable_fields: &'static [&'static str],
    /// Field whose values drive the tab filter and tab badge counts.
    pub category_field: &'static str,
    /// Tabs offered for the category field, starting with the "All" tab.
    pub tabs: &'static [TabSpec],
    /// Table columns in display order.
    pub columns: &'static [ColumnSpec],
    /// Fixed number of records per page.
    pub page_size: usize,
}
