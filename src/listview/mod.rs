//! Client-side list view engine: filter, search, sort, paginate, count.
//!
//! Every management screen in SecureTrack is the same machine with
//! different labels: a collection of records narrowed by category tabs and
//! a free-text search, optionally sorted, and shown one fixed-size page at
//! a time with tab badges counting the unfiltered base. This module is
//! that machine, extracted once.
//!
//! # Design
//!
//! - Operations are pure, total functions over an immutable record slice.
//!   They return index vectors into the slice and never mutate or copy it.
//! - All mutable state lives in the caller-owned
//!   [`ListViewState`]; the engine holds none.
//! - The only "failure" is an empty result set, which is an ordinary
//!   value rendered as an empty-state message.
//!
//! # Modules
//!
//! - [`record`]: the [`ListRecord`] trait and [`FieldValue`] primitives
//! - [`filter`]: category filters, free-text search, tab badge counts
//! - [`sort`]: optional stable sorting by a named field
//! - [`page`]: page windows and derived page totals
//! - [`query`]: caller-owned state and the combined pipeline
//! - [`view_config`]: static per-view configuration

pub mod filter;
pub mod page;
pub mod query;
pub mod record;
pub mod sort;
pub mod view_config;

pub use filter::{ActiveFilters, FilterSelection, apply_filters, apply_search, count_by_category};
pub use page::{PageInfo, PageWindow, paginate, total_pages};
pub use query::{ListViewOutput, ListViewState, run_query};
pub use record::{FieldValue, ListRecord};
pub use sort::{SortDirection, SortKey, apply_sort};
pub use view_config::{ColumnSpec, TabSpec, ViewConfig};
