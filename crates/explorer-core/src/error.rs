use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Fitbit explorer.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or did not have the expected shape.
    #[error("Failed to parse JSON in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A CSV document could not be parsed.
    #[error("Failed to parse CSV in {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A JSON document lacked a required top-level key.
    #[error("Key \"{key}\" not found in {path}")]
    MissingKey { path: PathBuf, key: String },

    /// A sleep export contained an empty `sleep` array.
    #[error("No sleep sessions recorded in {0}")]
    EmptySleepLog(PathBuf),

    /// A named column does not exist in the table.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// A column name would appear twice in one table.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// An index label appears more than once where labels must be unique.
    #[error("Cannot align on duplicate index label: {0}")]
    DuplicateIndex(String),

    /// Column lengths disagree with the row count of the table.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A concatenation was requested over zero tables.
    #[error("No tables to concatenate")]
    EmptyConcat,

    /// The expected data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No file matching the pattern was found in the directory.
    #[error("No files matching {pattern} found in {dir}")]
    NoDataFiles { dir: PathBuf, pattern: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the explorer crates.
pub type Result<T> = std::result::Result<T, ExplorerError>;
