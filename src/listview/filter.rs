//! Category filtering, free-text search, and tab badge counts.
//!
//! All three operations are total functions over an immutable record slice.
//! Filtering and search return index vectors into the slice; the source
//! collection itself is never reordered or mutated. An empty result is a
//! normal state, not an error.

use std::collections::BTreeMap;

use super::record::ListRecord;

/// One category constraint: either the "All" sentinel or a required value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// No constraint for this category; the predicate always holds.
    #[default]
    All,
    /// The record's category field must equal this value exactly.
    Equals(String),
}

impl FilterSelection {
    /// Returns true when the selection admits the given field text.
    #[must_use]
    pub fn matches(&self, field_text: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Equals(expected) => field_text == Some(expected.as_str()),
        }
    }
}

/// The set of active category filters, keyed by category field name.
///
/// Categories absent from the map behave as [`FilterSelection::All`]. A
/// record is retained iff every entry's predicate holds (logical AND).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveFilters {
    selections: BTreeMap<String, FilterSelection>,
}

impl ActiveFilters {
    /// Creates an empty filter set admitting every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection for a category field.
    ///
    /// Setting [`FilterSelection::All`] removes the entry, keeping the map
    /// minimal so `is_unfiltered` stays meaningful.
    pub fn set(&mut self, field: &str, selection: FilterSelection) {
        match selection {
            FilterSelection::All => {
                self.selections.remove(field);
            }
            FilterSelection::Equals(_) => {
                self.selections.insert(field.to_owned(), selection);
            }
        }
    }

    /// Returns the selection for a category field.
    #[must_use]
    pub fn selection(&self, field: &str) -> FilterSelection {
        self.selections.get(field).cloned().unwrap_or_default()
    }

    /// Returns true when no category constrains the view.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.selections.is_empty()
    }

    /// Returns true when the record satisfies every active selection.
    #[must_use]
    pub fn admits<R: ListRecord>(&self, record: &R) -> bool {
        self.selections.iter().all(|(field, selection)| {
            let text = record.field(field).map(|value| value.as_text());
            selection.matches(text.as_deref())
        })
    }
}

/// Retains the indices of records satisfying every active filter.
///
/// An empty `records` slice yields an empty result. The output is always a
/// subset of `0..records.len()` in insertion order.
#[must_use]
pub fn apply_filters<R: ListRecord>(records: &[R], filters: &ActiveFilters) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.admits(*record))
        .map(|(index, _)| index)
        .collect()
}

/// Retains the candidates whose searchable fields contain the term.
///
/// An empty term is the identity. Matching is a case-insensitive substring
/// test over the configured searchable fields, so the result is identical
/// regardless of the term's casing. Candidates referencing indices outside
/// `records` are dropped.
#[must_use]
pub fn apply_search<R: ListRecord>(
    records: &[R],
    candidates: &[usize],
    term: &str,
    searchable_fields: &[&str],
) -> Vec<usize> {
    if term.is_empty() {
        return candidates.to_vec();
    }

    let needle = term.to_lowercase();
    candidates
        .iter()
        .copied()
        .filter(|&index| {
            records.get(index).is_some_and(|record| {
                searchable_fields.iter().any(|field| {
                    record
                        .field(field)
                        .is_some_and(|value| value.as_text().to_lowercase().contains(&needle))
                })
            })
        })
        .collect()
}

/// Counts records per category value over the *unfiltered* collection.
///
/// Tab badges show base totals, not "currently visible" counts, so this is
/// always computed before any filter or search narrows the view. Records
/// lacking the category field are not counted.
#[must_use]
pub fn count_by_category<R: ListRecord>(
    records: &[R],
    category_field: &str,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        if let Some(value) = record.field(category_field) {
            *counts.entry(value.as_text()).or_insert(0) += 1;
        }
    }
    counts
}
