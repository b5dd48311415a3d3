//! Stable sorting of filtered candidates by a named field.

use std::cmp::Ordering;

use super::record::ListRecord;

/// Sort direction for a [`SortKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A field name plus direction describing an optional sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Record field to order by.
    pub field: String,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl SortKey {
    /// Creates an ascending sort key for the given field.
    #[must_use]
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort key for the given field.
    #[must_use]
    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            direction: SortDirection::Descending,
        }
    }
}

/// Orders candidates by the sort key's field, ties preserving their
/// relative order.
///
/// With no key this is the identity: insertion order is preserved. Records
/// lacking the field sort before records that have it and the pairwise
/// ordering between two absent values is a tie, so the stable sort keeps
/// their original order too.
#[must_use]
pub fn apply_sort<R: ListRecord>(
    records: &[R],
    candidates: &[usize],
    sort: Option<&SortKey>,
) -> Vec<usize> {
    let mut ordered = candidates.to_vec();
    let Some(key) = sort else {
        return ordered;
    };

    ordered.sort_by(|&left, &right| {
        let left_value = records.get(left).and_then(|r| r.field(&key.field));
        let right_value = records.get(right).and_then(|r| r.field(&key.field));
        let ascending = match (&left_value, &right_value) {
            (Some(lhs), Some(rhs)) => lhs.natural_cmp(rhs),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        key.direction.apply(ascending)
    });
    ordered
}
