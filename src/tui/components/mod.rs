//! Reusable UI components for the dashboard TUI.
//!
//! Components are pure render functions: they take a context struct
//! borrowing the data they display and return the rendered string. All
//! state lives in the application model.

pub mod compose_form;
pub mod detail_panel;
pub mod record_table;
pub mod stat_cards;
pub mod tab_bar;

pub use compose_form::ComposeFormViewContext;
pub use record_table::RecordTableViewContext;
pub use tab_bar::TabBarViewContext;
