//! SecureTrack library crate: a device-registry admin dashboard.
//!
//! The crate is built around a generic, pure list view engine
//! ([`listview`]) that filters, searches, sorts, paginates, and counts
//! in-memory records. The [`registry`] module supplies the typed domain
//! records and per-section view configurations; [`tui`] renders them as
//! an interactive dashboard and [`cli`] as a non-interactive listing.
//! All mutating actions are simulations recorded through [`telemetry`].

pub mod cli;
pub mod config;
pub mod listview;
pub mod registry;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, SecuretrackConfig};
pub use listview::{
    ActiveFilters, ColumnSpec, FieldValue, FilterSelection, ListRecord, ListViewOutput,
    ListViewState, PageInfo, PageWindow, SortDirection, SortKey, TabSpec, ViewConfig, run_query,
};
pub use registry::{Registry, RegistryError, Section};
