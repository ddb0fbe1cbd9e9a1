//! Data source error module.
//!
//! This module defines error types raised while reading a vocabulary from a file.
//! The lexicon engine itself never fails; every error here belongs to ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading `(word, definition)` entries.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error when no source path was configured.
    #[error("No vocabulary source configured")]
    NotConfigured,

    /// Error when the source file does not exist.
    #[error("Source file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when the source format cannot be determined.
    #[error("Cannot determine source format for {0}")]
    UnknownFormat(PathBuf),

    /// IO errors while reading the source.
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text.
    #[error("Malformed delimited record: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON document.
    #[error("Malformed JSON source: {0}")]
    Json(#[from] serde_json::Error),

    /// A structurally valid document whose records cannot be read as entries.
    #[error("Invalid record at {position}: {message}")]
    InvalidRecord {
        /// Position of the record in the source (1-based)
        position: usize,
        /// What was wrong with it
        message: String,
    },
}
