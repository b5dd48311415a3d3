//! Record table component for displaying the current page of a list view.
//!
//! The table is generic over [`ListRecord`], so the same renderer serves
//! every dashboard section. Columns come from the section's
//! [`ColumnSpec`] list; cells are padded and truncated to the declared
//! column width using display width, not byte length.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::listview::{ColumnSpec, ListRecord};

/// Placeholder shown when the filtered result is empty.
const NO_RECORDS_PLACEHOLDER: &str =
    "  No records found. Try adjusting your search terms or filters.";

/// Context for rendering one page of records.
///
/// Bundles the data needed to render the table without per-frame
/// allocations beyond the output string.
#[derive(Debug, Clone)]
pub struct RecordTableViewContext<'a, R: ListRecord> {
    /// Full record collection the indices point into.
    pub records: &'a [R],
    /// Indices of the records on the current page, in display order.
    pub visible: &'a [usize],
    /// Column layout for this section.
    pub columns: &'a [ColumnSpec],
    /// Row cursor within the visible page (0-indexed).
    pub cursor: usize,
}

/// Renders the header row, a separator, and one line per visible record.
#[must_use]
pub fn view<R: ListRecord>(ctx: &RecordTableViewContext<'_, R>) -> String {
    let mut output = String::new();

    output.push_str("  ");
    for column in ctx.columns {
        output.push_str(&pad_cell(column.label, column.width));
        output.push_str("  ");
    }
    output.push('\n');

    let rule_width: usize = ctx
        .columns
        .iter()
        .map(|column| column.width + 2)
        .sum::<usize>()
        + 2;
    output.push_str(&"\u{2500}".repeat(rule_width));
    output.push('\n');

    if ctx.visible.is_empty() {
        output.push_str(NO_RECORDS_PLACEHOLDER);
        output.push('\n');
        return output;
    }

    for (row, &index) in ctx.visible.iter().enumerate() {
        let Some(record) = ctx.records.get(index) else {
            continue;
        };
        let prefix = if row == ctx.cursor { "> " } else { "  " };
        output.push_str(prefix);
        for column in ctx.columns {
            let value = record
                .field(column.field)
                .map(|field| field.as_text())
                .unwrap_or_default();
            output.push_str(&pad_cell(&value, column.width));
            output.push_str("  ");
        }
        output.push('\n');
    }

    output
}

/// Pads or truncates a cell to the column's display width.
///
/// Truncation appends an ellipsis and counts widths per character, so
/// wide characters never push a row out of alignment.
fn pad_cell(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let padding = width - text_width;
        let mut cell = text.to_owned();
        cell.extend(std::iter::repeat_n(' ', padding));
        return cell;
    }

    let budget = width.saturating_sub(1);
    let mut cell = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        cell.push(ch);
        used += ch_width;
    }
    cell.push('\u{2026}');
    let cell_width = UnicodeWidthStr::width(cell.as_str());
    cell.extend(std::iter::repeat_n(' ', width.saturating_sub(cell_width)));
    cell
}
