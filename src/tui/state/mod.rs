//! State management for the dashboard TUI.
//!
//! This module provides the per-section view state (mode, cursor, tab,
//! and list query state) and the compose form state for the simulated
//! email send flow.

mod compose;
mod section_view;

pub use compose::{ComposeField, ComposeForm};
pub use section_view::{SectionViewState, ViewMode};
