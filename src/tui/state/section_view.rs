//! Per-section view state: list query state, mode, tab, and cursor.

use crate::listview::{ListViewState, ViewConfig};

/// What the section is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// The paginated record table.
    List,
    /// The detail pane for the record with the given key.
    Detail(String),
    /// The compose form (communications section only).
    Compose,
}

/// Mutable state for one dashboard section.
///
/// Each section keeps its own [`ListViewState`], so switching sections
/// preserves search terms, tab selections, and page positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionViewState {
    /// Engine-facing query state (search, filters, sort, page).
    pub list: ListViewState,
    /// Current mode: list, detail, or compose.
    pub mode: ViewMode,
    /// Row cursor within the visible page (0-indexed).
    pub cursor: usize,
    /// Index of the active filter tab.
    pub active_tab: usize,
    /// Whether search input is being edited.
    pub searching: bool,
}

impl SectionViewState {
    /// Creates list-mode state on the "All" tab with an empty search.
    #[must_use]
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            list: ListViewState::new(config.page_size),
            mode: ViewMode::List,
            cursor: 0,
            active_tab: 0,
            searching: false,
        }
    }

    /// Advances the active tab, wrapping, and applies its filter.
    ///
    /// The filter change resets the list to page 1, so the cursor is
    /// repositioned to the first row as well.
    pub fn cycle_tab(&mut self, config: &ViewConfig) {
        if config.tabs.is_empty() {
            return;
        }
        self.active_tab = (self.active_tab + 1) % config.tabs.len();
        if let Some(tab) = config.tabs.get(self.active_tab) {
            self.list.set_filter(config.category_field, tab.selection());
        }
        self.cursor = 0;
    }

    /// Moves the cursor up one row, saturating at the top.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, saturating at the last visible row.
    pub fn cursor_down(&mut self, visible_len: usize) {
        let last = visible_len.saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Clamps the cursor into the visible row range after the page shrank.
    pub fn clamp_cursor(&mut self, visible_len: usize) {
        let last = visible_len.saturating_sub(1);
        if self.cursor > last {
            self.cursor = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SectionViewState, ViewMode};
    use crate::registry::Section;

    fn devices_state() -> SectionViewState {
        SectionViewState::new(Section::Devices.view_config())
    }

    #[test]
    fn new_state_starts_in_list_mode_on_the_all_tab() {
        let state = devices_state();
        assert_eq!(state.mode, ViewMode::List);
        assert_eq!(state.active_tab, 0);
        assert_eq!(state.list.current_page(), 1);
    }

    #[test]
    fn cycle_tab_wraps_and_resets_cursor_and_page() {
        let config = Section::Devices.view_config();
        let mut state = devices_state();
        state.cursor = 3;
        for _ in 0..config.tabs.len() {
            state.cycle_tab(config);
        }
        assert_eq!(state.active_tab, 0);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.list.current_page(), 1);
    }

    #[test]
    fn cursor_movement_saturates_at_both_ends() {
        let mut state = devices_state();
        state.cursor_up();
        assert_eq!(state.cursor, 0);
        state.cursor_down(3);
        state.cursor_down(3);
        state.cursor_down(3);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn clamp_cursor_recovers_from_a_shorter_page() {
        let mut state = devices_state();
        state.cursor = 7;
        state.clamp_cursor(2);
        assert_eq!(state.cursor, 1);
    }
}
