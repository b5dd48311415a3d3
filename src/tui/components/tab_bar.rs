//! Tab bar component showing the category filter tabs with counts.
//!
//! Counts come from the engine's base (unfiltered) category census, so a
//! tab's badge never changes as other filters are applied. The "All" tab
//! shows the collection total.

use std::collections::BTreeMap;

use crate::listview::TabSpec;

/// Context for rendering the tab bar.
#[derive(Debug, Clone)]
pub struct TabBarViewContext<'a> {
    /// Tabs in display order, starting with the "All" sentinel.
    pub tabs: &'a [TabSpec],
    /// Index of the active tab.
    pub active: usize,
    /// Total records in the unfiltered collection.
    pub total: usize,
    /// Per-category counts over the unfiltered collection.
    pub base_counts: &'a BTreeMap<String, usize>,
}

/// Renders the tab bar as a single line.
#[must_use]
pub fn view(ctx: &TabBarViewContext<'_>) -> String {
    let mut output = String::new();
    for (index, tab) in ctx.tabs.iter().enumerate() {
        let count = tab.value.map_or(ctx.total, |value| {
            ctx.base_counts.get(value).copied().unwrap_or(0)
        });
        let entry = if index == ctx.active {
            format!("[{} ({count})]", tab.label)
        } else {
            format!(" {} ({count}) ", tab.label)
        };
        if index > 0 {
            output.push(' ');
        }
        output.push_str(&entry);
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{TabBarViewContext, view};
    use crate::listview::TabSpec;

    const TABS: &[TabSpec] = &[
        TabSpec {
            label: "All Devices",
            value: None,
        },
        TabSpec {
            label: "Stolen",
            value: Some("Stolen"),
        },
    ];

    #[test]
    fn all_tab_shows_the_collection_total() {
        let mut counts = BTreeMap::new();
        counts.insert("Stolen".to_owned(), 1);
        let ctx = TabBarViewContext {
            tabs: TABS,
            active: 0,
            total: 7,
            base_counts: &counts,
        };
        let output = view(&ctx);
        assert!(output.contains("[All Devices (7)]"));
        assert!(output.contains("Stolen (1)"));
    }

    #[test]
    fn missing_category_counts_render_as_zero() {
        let counts = BTreeMap::new();
        let ctx = TabBarViewContext {
            tabs: TABS,
            active: 1,
            total: 0,
            base_counts: &counts,
        };
        let output = view(&ctx);
        assert!(output.contains("[Stolen (0)]"));
    }
}
