//! Dashboard TUI mode.
//!
//! This module provides the entry point for the interactive terminal
//! user interface over the registry sections.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use crate::config::SecuretrackConfig;
use crate::registry::{Registry, RegistryError};
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use crate::tui::{DashboardApp, set_initial_registry, set_telemetry_sink};

/// Runs the dashboard TUI mode.
///
/// # Errors
///
/// Returns [`RegistryError::Terminal`] if the TUI fails to initialise or
/// run.
pub async fn run(config: &SecuretrackConfig) -> Result<(), RegistryError> {
    // Store the registry in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this
    // is a no-op and the existing data remains.
    let _ = set_initial_registry(Registry::sample());

    let sink: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };
    let _ = set_telemetry_sink(sink);

    run_tui().await.map_err(|error| RegistryError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // DashboardApp::init() will retrieve data from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
