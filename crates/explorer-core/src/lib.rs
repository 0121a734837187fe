//! Core types for the Fitbit explorer.
//!
//! Holds the tabular data model shared by every loader, timestamp parsing,
//! text rendering helpers, settings and the error type.

pub mod error;
pub mod formatting;
pub mod settings;
pub mod table;
pub mod time_utils;

pub use error::{ExplorerError, Result};
pub use table::{Column, Index, Table, Value};
