//! JSON source.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{DataSource, Entry, SourceResult};
use crate::error::source::SourceError;

/// Accepted document shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    /// `{ "apple": "a fruit", ... }`
    Map(serde_json::Map<String, Value>),
    /// `[{ "word": "apple", "definition": "a fruit" }, ...]`
    Records(Vec<JsonRecord>),
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    word: String,
    #[serde(default)]
    definition: Value,
}

/// Reads entries from a JSON document.
///
/// Definitions may be strings, `null` or missing (no definition), or numbers and
/// booleans (kept as their JSON text). Objects and arrays are rejected. Both
/// document shapes load in document order.
#[derive(Debug, Clone)]
pub struct JsonSource {
    name: String,
    text: String,
}

impl JsonSource {
    /// Reads a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(path.display().to_string(), text))
    }

    /// Uses an in-memory JSON document.
    pub fn from_text<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

fn definition_text(position: usize, value: Value) -> SourceResult<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => Err(SourceError::InvalidRecord {
            position,
            message: "definition must be a string".to_string(),
        }),
    }
}

impl DataSource for JsonSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn entries(&mut self) -> SourceResult<Vec<Entry>> {
        let pairs: Vec<(String, Value)> = match serde_json::from_str(&self.text)? {
            JsonDocument::Map(map) => map.into_iter().collect(),
            JsonDocument::Records(records) => records
                .into_iter()
                .map(|record| (record.word, record.definition))
                .collect(),
        };

        let mut entries = Vec::with_capacity(pairs.len());
        let mut skipped = 0usize;
        for (index, (word, definition)) in pairs.into_iter().enumerate() {
            let word = word.trim();
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            entries.push(Entry::new(word, definition_text(index + 1, definition)?));
        }

        if skipped > 0 {
            tracing::warn!(source = %self.name, skipped, "Skipped records with a blank word");
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> SourceResult<Vec<Entry>> {
        JsonSource::from_text("test", text).entries()
    }

    #[test]
    fn test_object_document() {
        let entries = read(r#"{"apple": "a fruit", "cat": null, "pi": 3.14}"#).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("apple", "a fruit"),
                Entry::new("cat", ""),
                Entry::new("pi", "3.14"),
            ]
        );
    }

    #[test]
    fn test_object_document_keeps_document_order() {
        let text = r#"{"zebra": "z", "apple": "first", "Apple": "second"}"#;
        let entries = read(text).unwrap();
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "Apple"]);

        let mut lexicon = crate::lexicon::Lexicon::new();
        crate::source::load(&mut lexicon, &mut JsonSource::from_text("test", text)).unwrap();
        assert_eq!(lexicon.words(), ["zebra".to_string(), "apple".to_string()]);
        assert_eq!(lexicon.lookup("apple").definition, "second");
    }

    #[test]
    fn test_record_document() {
        let entries = read(
            r#"[
                {"word": "apply", "definition": "to request"},
                {"word": "app"},
                {"word": "  ", "definition": "nothing"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![Entry::new("apply", "to request"), Entry::new("app", "")]
        );
    }

    #[test]
    fn test_nested_definition_is_rejected() {
        let err = read(r#"[{"word": "a"}, {"word": "b", "definition": ["x"]}]"#).unwrap_err();
        assert!(matches!(err, SourceError::InvalidRecord { position: 2, .. }));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(read("{not json"), Err(SourceError::Json(_))));
        assert!(matches!(read("42"), Err(SourceError::Json(_))));
    }
}
