use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};

/// Base directory of a Fitbit export when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "../Files";

// ── DataLayout ────────────────────────────────────────────────────────────────

/// Where the sleep and summary exports live below a base directory.
///
/// ```
/// use explorer_core::settings::DataLayout;
/// use std::path::Path;
///
/// let layout = DataLayout::new("/data/fitbit");
/// assert_eq!(layout.sleep_dir(), Path::new("/data/fitbit/Sleep"));
/// assert_eq!(
///     layout.summary_file("steps"),
///     Path::new("/data/fitbit/Summaries/steps.txt")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    base_dir: PathBuf,
}

impl DataLayout {
    /// File pattern of nightly sleep exports inside [`DataLayout::sleep_dir`].
    pub const SLEEP_PATTERN: &'static str = "*.txt";

    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn sleep_dir(&self) -> PathBuf {
        self.base_dir.join("Sleep")
    }

    pub fn summaries_dir(&self) -> PathBuf {
        self.base_dir.join("Summaries")
    }

    /// Path of the per-metric summary export, e.g. `Summaries/steps.txt`.
    pub fn summary_file(&self, metric: &str) -> PathBuf {
        self.summaries_dir().join(format!("{}.txt", metric))
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Load and inspect Fitbit data exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fitbit-explorer",
    about = "Load and inspect Fitbit data exports",
    version
)]
pub struct Settings {
    /// Base directory holding the Sleep/ and Summaries/ exports
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, global = true, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Number of rows to preview after loading
    #[arg(long, global = true, default_value = "5")]
    pub rows: usize,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to load.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Combine every same-schema CSV file in a directory
    Csv {
        /// Directory containing the CSV exports
        dir: PathBuf,

        /// File name pattern to match
        #[arg(long, default_value = "*.csv")]
        pattern: String,

        /// Display name used in the column listing
        #[arg(long, default_value = "csv")]
        name: String,
    },
    /// Read nightly sleep logs from <data-dir>/Sleep
    Sleep {
        /// Display name used in the column listing
        #[arg(long, default_value = "sleep")]
        name: String,
    },
    /// Combine per-metric summaries from <data-dir>/Summaries
    Summaries {
        /// Metric names, e.g. steps calories
        #[arg(required = true)]
        metrics: Vec<String>,
    },
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Parse an explicit argument list, exiting with clap's usage message on
    /// invalid input.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Settings::parse_from(args).apply_debug_flag()
    }

    /// The export layout rooted at `--data-dir`.
    pub fn layout(&self) -> DataLayout {
        DataLayout::new(&self.data_dir)
    }

    fn apply_debug_flag(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }
}

/// Map a level name to a `tracing` filter directive.
///
/// Accepts the CLI spellings case-insensitively plus `warn`/`trace`.
pub fn log_directive(level: &str) -> Result<&'static str> {
    match level.to_uppercase().as_str() {
        "TRACE" => Ok("trace"),
        "DEBUG" => Ok("debug"),
        "INFO" => Ok("info"),
        "WARN" | "WARNING" => Ok("warn"),
        "ERROR" => Ok("error"),
        other => Err(ExplorerError::Config(format!("unknown log level {}", other))),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
