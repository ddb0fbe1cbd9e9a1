//! Vocabulary data sources.
//!
//! A data source yields the ordered `(word, definition)` entries a lexicon is
//! bulk-loaded from. Reading and parsing happen here; the lexicon only ever sees
//! finished entries. Entries with a blank word are skipped by every source.
//!
//! Supported formats:
//!
//! * Delimited text (CSV, TSV): the first field is the word, the remaining
//!   fields joined back together form the definition.
//! * JSON: an object mapping words to definitions, or an array of
//!   `{ "word": ..., "definition": ... }` records.

mod delimited;
mod json;

use std::path::Path;

use crate::config::source::{SourceConfig, SourceFormat};
use crate::error::source::SourceError;
use crate::lexicon::{Lexicon, LoadReport};

pub use delimited::DelimitedSource;
pub use json::JsonSource;

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// A single `(word, definition)` pair read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The word, as written in the source
    pub word: String,

    /// Its definition, empty when the source has none
    pub definition: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new<W: Into<String>, D: Into<String>>(word: W, definition: D) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// A supplier of vocabulary entries.
#[cfg_attr(test, mockall::automock)]
pub trait DataSource {
    /// Human readable name of the source, used in logs.
    fn name(&self) -> String;

    /// Reads every entry in source order.
    fn entries(&mut self) -> SourceResult<Vec<Entry>>;
}

/// Bulk-loads every entry of `source` into `lexicon`.
///
/// Nothing is inserted if the source fails to read.
pub fn load(lexicon: &mut Lexicon, source: &mut dyn DataSource) -> SourceResult<LoadReport> {
    let name = source.name();
    let entries = source.entries()?;
    tracing::debug!(source = %name, entries = entries.len(), "Read vocabulary entries");

    let report = lexicon.insert_all(
        entries
            .into_iter()
            .map(|entry| (entry.word, entry.definition)),
    );

    tracing::info!(
        source = %name,
        inserted = report.inserted,
        updated = report.updated,
        unchanged = report.unchanged,
        words = lexicon.len(),
        "Vocabulary loaded"
    );
    Ok(report)
}

/// Opens the source described by the configuration.
pub fn open(config: &SourceConfig) -> SourceResult<Box<dyn DataSource>> {
    let path = config.path.as_deref().ok_or(SourceError::NotConfigured)?;
    open_path(path, config.format, config.has_headers)
}

/// Opens a vocabulary file in the given format.
///
/// [`SourceFormat::Auto`] picks the format from the file extension.
pub fn open_path(
    path: &Path,
    format: SourceFormat,
    has_headers: bool,
) -> SourceResult<Box<dyn DataSource>> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.to_path_buf()));
    }

    match format.resolve(path) {
        Some(SourceFormat::Csv) => Ok(Box::new(DelimitedSource::from_path(
            path,
            b',',
            has_headers,
        )?)),
        Some(SourceFormat::Tsv) => Ok(Box::new(DelimitedSource::from_path(
            path,
            b'\t',
            has_headers,
        )?)),
        Some(SourceFormat::Json) => Ok(Box::new(JsonSource::from_path(path)?)),
        Some(SourceFormat::Auto) | None => Err(SourceError::UnknownFormat(path.to_path_buf())),
    }
}
