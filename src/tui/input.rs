//! Input handling for the dashboard TUI.
//!
//! Key-to-message mapping is mode-aware: while the search bar or the
//! compose form is capturing text, printable characters feed the text
//! field instead of triggering shortcuts.

use super::messages::{AppMsg, RecordAction};
use crate::registry::Section;

/// Which input mode the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation: single-key shortcuts.
    Browse,
    /// The search bar is capturing text.
    Search,
    /// The compose form is capturing text.
    Compose,
}

/// Maps a key event to an application message for the given mode.
///
/// Returns `None` for unrecognised key events, allowing them to be
/// ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, mode: InputMode) -> Option<AppMsg> {
    match mode {
        InputMode::Browse => map_browse_key(key),
        InputMode::Search => map_search_key(key),
        InputMode::Compose => map_compose_key(key),
    }
}

fn map_browse_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('1') => Some(AppMsg::ShowOverview),
        KeyCode::Char('2') => Some(AppMsg::ShowSection(Section::Devices)),
        KeyCode::Char('3') => Some(AppMsg::ShowSection(Section::Users)),
        KeyCode::Char('4') => Some(AppMsg::ShowSection(Section::Thefts)),
        KeyCode::Char('5') => Some(AppMsg::ShowSection(Section::Communications)),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => Some(AppMsg::PreviousPage),
        KeyCode::Tab => Some(AppMsg::CycleTab),
        KeyCode::Char('/') => Some(AppMsg::StartSearch),
        KeyCode::Enter => Some(AppMsg::Dispatch(RecordAction::View)),
        KeyCode::Char('e') => Some(AppMsg::Dispatch(RecordAction::Edit)),
        KeyCode::Char('d') => Some(AppMsg::Dispatch(RecordAction::Delete)),
        KeyCode::Char('f') => Some(AppMsg::Dispatch(RecordAction::Flag)),
        KeyCode::Char('a') => Some(AppMsg::Dispatch(RecordAction::Approve)),
        KeyCode::Char('x') => Some(AppMsg::Dispatch(RecordAction::Reject)),
        KeyCode::Char('r') => Some(AppMsg::Dispatch(RecordAction::Reply)),
        KeyCode::Char('c') => Some(AppMsg::StartCompose),
        KeyCode::Esc => Some(AppMsg::BackToList),
        _ => None,
    }
}

fn map_search_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::CancelSearch),
        KeyCode::Enter => Some(AppMsg::ConfirmSearch),
        KeyCode::Backspace => Some(AppMsg::SearchBackspace),
        KeyCode::Char(ch) => Some(AppMsg::SearchChar(ch)),
        _ => None,
    }
}

fn map_compose_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::CancelCompose),
        KeyCode::Tab => Some(AppMsg::ComposeNextField),
        KeyCode::F(2) => Some(AppMsg::CycleTemplate),
        KeyCode::Enter => Some(AppMsg::SubmitCompose),
        KeyCode::Backspace => Some(AppMsg::ComposeBackspace),
        KeyCode::Char(ch) => Some(AppMsg::ComposeChar(ch)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputMode, map_key_to_message};
    use crate::tui::messages::{AppMsg, RecordAction};

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'))]
    fn browse_q_quits(#[case] code: KeyCode) {
        assert!(matches!(
            map_key_to_message(&key(code), InputMode::Browse),
            Some(AppMsg::Quit)
        ));
    }

    #[test]
    fn browse_slash_starts_search() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Char('/')), InputMode::Browse),
            Some(AppMsg::StartSearch)
        ));
    }

    #[test]
    fn browse_enter_views_the_selected_record() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Enter), InputMode::Browse),
            Some(AppMsg::Dispatch(RecordAction::View))
        ));
    }

    #[test]
    fn search_mode_captures_printable_characters() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Char('q')), InputMode::Search),
            Some(AppMsg::SearchChar('q'))
        ));
    }

    #[test]
    fn compose_mode_captures_printable_characters() {
        assert!(matches!(
            map_key_to_message(&key(KeyCode::Char('n')), InputMode::Compose),
            Some(AppMsg::ComposeChar('n'))
        ));
        assert!(matches!(
            map_key_to_message(&key(KeyCode::F(2)), InputMode::Compose),
            Some(AppMsg::CycleTemplate)
        ));
    }

    #[test]
    fn unrecognised_keys_map_to_none() {
        assert!(map_key_to_message(&key(KeyCode::F(12)), InputMode::Browse).is_none());
    }
}
