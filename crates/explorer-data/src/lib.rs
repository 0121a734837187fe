//! Loading layer for the Fitbit explorer.
//!
//! Discovers export files, turns CSV time series, nightly sleep logs and
//! per-metric summaries into [`Table`]s, and provides the index and
//! reporting helpers used while exploring them.
//!
//! [`Table`]: explorer_core::table::Table

pub mod csv_combiner;
pub mod index;
pub mod reader;
pub mod report;
pub mod sleep;
pub mod summary;

pub use explorer_core as core;
