//! Data source configuration module.
//!
//! This module defines where the vocabulary is read from and how the file is parsed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File format of a vocabulary source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Pick the format from the file extension
    #[default]
    Auto,
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
    /// JSON object or array of records
    Json,
}

impl SourceFormat {
    /// Resolves [`SourceFormat::Auto`] against a file extension.
    ///
    /// Returns `None` when the format is `Auto` and the extension is not recognized.
    pub fn resolve(self, path: &Path) -> Option<SourceFormat> {
        if self != SourceFormat::Auto {
            return Some(self);
        }

        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            "json" => Some(SourceFormat::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(SourceFormat::Auto),
            "csv" => Ok(SourceFormat::Csv),
            "tsv" => Ok(SourceFormat::Tsv),
            "json" => Ok(SourceFormat::Json),
            other => Err(ConfigError::InvalidValueType {
                key: "source.format".to_string(),
                expected: "one of auto, csv, tsv, json".to_string(),
                actual: other.to_string(),
            }),
        }
    }
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Path to the vocabulary file (None when words are supplied another way)
    pub path: Option<PathBuf>,

    /// File format
    pub format: SourceFormat,

    /// Whether delimited files start with a header row
    pub has_headers: bool,
}

impl Validate for SourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "source.path must not be empty".to_string(),
                ));
            }

            if self.format.resolve(path).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "Cannot infer source format from {path:?}, set source.format explicitly"
                )));
            }
        }

        Ok(())
    }
}
