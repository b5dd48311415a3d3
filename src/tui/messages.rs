//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::registry::{EmailLogEntry, Section};

/// An action dispatched against the selected record.
///
/// The source routed these through a single stringly-typed handler; here
/// they are a closed enum so the update loop can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    /// Open the record's detail view.
    View,
    /// Simulate editing the record.
    Edit,
    /// Simulate deleting the record.
    Delete,
    /// Simulate flagging the record for follow-up.
    Flag,
    /// Simulate approving the record's pending transfer.
    Approve,
    /// Simulate rejecting the record's pending transfer.
    Reject,
    /// Start a reply to the selected email log entry.
    Reply,
}

impl RecordAction {
    /// Returns the lowercase label used in status lines and telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Flag => "flag",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Reply => "reply",
        }
    }
}

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the row cursor up one item.
    CursorUp,
    /// Move the row cursor down one item.
    CursorDown,
    /// Advance to the next page of the current list.
    NextPage,
    /// Go back to the previous page of the current list.
    PreviousPage,
    /// Switch to the overview pane.
    ShowOverview,
    /// Switch to a list-bearing section.
    ShowSection(Section),
    /// Advance the active filter tab, wrapping at the end.
    CycleTab,
    /// Leave the detail view and return to the list.
    BackToList,

    // Search
    /// Enter search-editing mode for the current section.
    StartSearch,
    /// Append a character to the search term.
    SearchChar(char),
    /// Remove the last character of the search term.
    SearchBackspace,
    /// Keep the search term and leave search-editing mode.
    ConfirmSearch,
    /// Clear the search term and leave search-editing mode.
    CancelSearch,

    // Record actions
    /// Dispatch an action against the selected record.
    Dispatch(RecordAction),

    // Compose
    /// Open a blank compose form in the communications section.
    StartCompose,
    /// Append a character to the focused compose field.
    ComposeChar(char),
    /// Remove the last character of the focused compose field.
    ComposeBackspace,
    /// Move focus to the next compose field.
    ComposeNextField,
    /// Advance the compose template, applying its subject and body.
    CycleTemplate,
    /// Validate the compose form and start the simulated send.
    SubmitCompose,
    /// Discard the compose form and return to the email list.
    CancelCompose,
    /// The simulated send finished; log the entry.
    EmailSendCompleted(EmailLogEntry),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
