//! Terminal User Interface for the device registry dashboard.
//!
//! This module provides an interactive TUI for browsing the registry's
//! sections using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` function
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Per-section view state and the compose form
//! - [`components`]: Reusable UI components
//! - [`input`]: Mode-aware key-to-message mapping
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_registry`] (and optionally [`set_telemetry_sink`]) before
//! starting the program, and `DashboardApp::init()` will automatically
//! retrieve them.

use std::sync::{Arc, OnceLock};

use crate::registry::Registry;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::{DashboardApp, Pane};

/// Global storage for the initial registry.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static INITIAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the initial registry for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// registry will be read by `DashboardApp::init()` when the program
/// starts.
///
/// # Returns
///
/// `true` if the registry was set, `false` if it was already set.
pub fn set_initial_registry(registry: Registry) -> bool {
    INITIAL_REGISTRY.set(registry).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Optional; without it the dashboard uses [`NoopTelemetrySink`] and the
/// simulated actions leave no trace beyond the status line.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial registry from storage.
///
/// Called internally by `DashboardApp::init()`. Returns the stored
/// registry or the seeded sample if not set. `OnceLock` does not support
/// consuming the value, hence the clone.
pub(crate) fn initial_registry() -> Registry {
    INITIAL_REGISTRY
        .get()
        .cloned()
        .unwrap_or_else(Registry::sample)
}

/// Gets the configured telemetry sink, defaulting to the no-op sink.
pub(crate) fn telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}
