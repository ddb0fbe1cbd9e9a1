//! Engine configuration module.
//!
//! This module defines the default query limits used by front ends and the
//! accumulation policy of the suggestion engine.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default number of prefix completions returned per query
    pub max_suggestions: usize,

    /// Default number of "did you mean" corrections returned per query
    pub max_corrections: usize,

    /// Default maximum edit distance for corrections
    pub max_distance: usize,

    /// Completions gathered per requested suggestion before deduplication
    pub accumulation_factor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            max_corrections: 5,
            max_distance: 2,
            accumulation_factor: 3,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be greater than 0".to_string(),
            ));
        }

        if self.max_corrections == 0 {
            return Err(ConfigError::ValidationError(
                "max_corrections must be greater than 0".to_string(),
            ));
        }

        if self.accumulation_factor == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "engine.accumulation_factor".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
