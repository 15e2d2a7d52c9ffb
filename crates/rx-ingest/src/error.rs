//! Error types for medication source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a medication source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file missing or unreadable.
    #[error("medication source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// One or more required columns are absent from the header row.
    #[error("required column(s) {} not found in {path}", .missing.join(", "))]
    SchemaError { path: PathBuf, missing: Vec<String> },

    /// Failed to parse the delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
