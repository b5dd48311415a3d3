//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//!
//! - [`dashboard`]: Interactive dashboard TUI
//! - [`output`]: Non-interactive section listing to stdout

pub mod dashboard;
pub mod output;
