//! Export file discovery and raw loading.
//!
//! Finds the files of one export kind inside a directory and reads them into
//! memory with errors that carry the offending path.

use std::path::{Path, PathBuf};

use explorer_core::error::{ExplorerError, Result};
use regex::Regex;
use tracing::{debug, warn};

// ── FilePattern ───────────────────────────────────────────────────────────────

/// A shell-style file name pattern such as `*.csv` or `sleep-????.txt`.
///
/// `*` matches any run of characters, `?` a single character; everything
/// else is literal. The whole file name must match.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let mut expr = String::with_capacity(pattern.len() + 8);
        expr.push('^');
        let mut literal = String::new();
        for c in pattern.chars() {
            match c {
                '*' | '?' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();
                    expr.push_str(if c == '*' { ".*" } else { "." });
                }
                other => literal.push(other),
            }
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let regex = Regex::new(&expr)
            .map_err(|e| ExplorerError::Config(format!("bad file pattern {}: {}", pattern, e)))?;
        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find regular files directly inside `dir` whose names match `pattern`,
/// sorted by path.
///
/// Sub-directories are not descended into.
pub fn find_files(dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        warn!("Data path does not exist: {}", dir.display());
        return Err(ExplorerError::DataPathNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|err| ExplorerError::FileRead {
            path: err.path().unwrap_or(dir).to_path_buf(),
            source: err.into(),
        })?;
        let matched = entry
            .file_name()
            .to_str()
            .map(|name| pattern.matches(name))
            .unwrap_or(false);
        if entry.file_type().is_file() && matched {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(
        "Found {} files matching {} in {}",
        files.len(),
        pattern.as_str(),
        dir.display()
    );
    Ok(files)
}

/// Like [`find_files`] but an empty result is a [`ExplorerError::NoDataFiles`].
pub fn find_required_files(dir: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
    let files = find_files(dir, pattern)?;
    if files.is_empty() {
        warn!("No files matching {} in {}", pattern.as_str(), dir.display());
        return Err(ExplorerError::NoDataFiles {
            dir: dir.to_path_buf(),
            pattern: pattern.as_str().to_string(),
        });
    }
    Ok(files)
}

/// Read a whole file into a string.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ExplorerError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file and parse it as a single JSON document.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = read_text(path)?;
    parse_json(path, &content)
}

/// Parse `content` as `T`, attributing failures to `path`.
pub fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| ExplorerError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
