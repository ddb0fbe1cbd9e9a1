//! Delimited text source (CSV, TSV).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::{DataSource, Entry, SourceResult};

/// Reads entries from delimited text, one record per line.
///
/// The first field of a record is the word. The remaining fields are joined back
/// together with the delimiter to form the definition, so an unquoted comma in a
/// CSV definition survives. Records are allowed to have different field counts.
///
/// The source is single-use: [`DataSource::entries`] consumes the underlying
/// reader, so a second call yields no entries. Open the file again to re-read it.
#[derive(Debug)]
pub struct DelimitedSource<R: Read> {
    name: String,
    reader: csv::Reader<R>,
    delimiter: u8,
}

impl DelimitedSource<File> {
    /// Opens a delimited file.
    ///
    /// # Arguments
    ///
    /// * `path` - The file to read.
    /// * `delimiter` - Field separator, `b','` for CSV or `b'\t'` for TSV.
    /// * `has_headers` - Whether the first record is a header row to skip.
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8, has_headers: bool) -> SourceResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::from_reader(
            path.display().to_string(),
            file,
            delimiter,
            has_headers,
        ))
    }
}

impl<R: Read> DelimitedSource<R> {
    /// Reads delimited text from any reader.
    pub fn from_reader<N: Into<String>>(name: N, reader: R, delimiter: u8, has_headers: bool) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_headers)
            .flexible(true)
            .trim(Trim::None)
            // Tab separated files carry quotes verbatim
            .quoting(delimiter != b'\t')
            .from_reader(reader);

        Self {
            name: name.into(),
            reader,
            delimiter,
        }
    }
}

impl<R: Read> DataSource for DelimitedSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn entries(&mut self) -> SourceResult<Vec<Entry>> {
        let separator = char::from(self.delimiter).to_string();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for record in self.reader.records() {
            let record = record?;
            let mut fields = record.iter();

            let word = fields.next().map(str::trim).unwrap_or_default();
            if word.is_empty() {
                skipped += 1;
                continue;
            }

            let definition = fields.collect::<Vec<_>>().join(&separator);
            entries.push(Entry::new(word, definition.trim()));
        }

        if skipped > 0 {
            tracing::warn!(source = %self.name, skipped, "Skipped records with a blank word");
        }
        Ok(entries)
    }
}
