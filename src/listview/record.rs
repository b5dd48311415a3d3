//! Record abstraction consumed by the list view engine.
//!
//! The engine never sees concrete domain types. It addresses rows through
//! the [`ListRecord`] trait, which exposes a stable key and named field
//! lookup yielding a [`FieldValue`]. Domain types in the registry implement
//! this trait once and every list view (table, search, tab filter,
//! pagination) works against it.

use std::cmp::Ordering;

/// A single field value surfaced by a record.
///
/// Values are primitives only: free text, integers, badge labels (closed
/// enumerations such as statuses), and booleans. Badges carry their display
/// label so category filters can compare against the same string the tab
/// bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free-form text (names, subjects, formatted dates).
    Text(String),
    /// An integer quantity (device counts).
    Number(i64),
    /// A closed-enumeration label (statuses, roles).
    Badge(String),
    /// A yes/no attribute (police report filed).
    Flag(bool),
}

impl FieldValue {
    /// Returns the string form of the value, used for substring search and
    /// for category equality.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) | Self::Badge(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Flag(flag) => if *flag { "Yes" } else { "No" }.to_owned(),
        }
    }

    /// Compares two values by their natural ordering.
    ///
    /// Numbers compare numerically and flags compare with `false < true`.
    /// Everything else, including mismatched variants, falls back to
    /// lexicographic comparison of the string form, which matches how the
    /// table variant of the source ordered its columns.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => left.cmp(right),
            (Self::Flag(left), Self::Flag(right)) => left.cmp(right),
            _ => self.as_text().cmp(&other.as_text()),
        }
    }
}

/// A row in a list view.
///
/// Records are immutable from the engine's perspective: every operation
/// takes the full collection by shared reference and returns index vectors
/// into it, never a mutated copy.
pub trait ListRecord {
    /// Returns the unique, stable key identifying this record.
    fn key(&self) -> &str;

    /// Looks up a field by name.
    ///
    /// Returns `None` for unknown field names and for optional fields that
    /// are absent on this record. Absent fields never match a search and
    /// sort before present ones.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use std::cmp::Ordering;

    #[test]
    fn numbers_compare_numerically_not_lexicographically() {
        let two = FieldValue::Number(2);
        let ten = FieldValue::Number(10);
        assert_eq!(two.natural_cmp(&ten), Ordering::Less);
    }

    #[test]
    fn text_compares_lexicographically() {
        let alpha = FieldValue::Text("alpha".to_owned());
        let beta = FieldValue::Text("beta".to_owned());
        assert_eq!(alpha.natural_cmp(&beta), Ordering::Less);
    }

    #[test]
    fn flags_render_as_yes_no() {
        assert_eq!(FieldValue::Flag(true).as_text(), "Yes");
        assert_eq!(FieldValue::Flag(false).as_text(), "No");
    }

    #[test]
    fn mixed_variants_fall_back_to_text_form() {
        let number = FieldValue::Number(5);
        let text = FieldValue::Text("5".to_owned());
        assert_eq!(number.natural_cmp(&text), Ordering::Equal);
    }
}
