//! Mauka Lexicon Library
//!
//! This library contains the dictionary engine of Mauka Lexicon: a trie-backed
//! store of words and definitions answering exact lookups, prefix completions and
//! "did you mean" corrections, together with the configuration, error handling
//! and data sources used to load it. The library is designed to be used by the
//! binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures`]: the Hua Trie store
//! - [`lexicon`]: the engine (lookup, suggestion, fuzzy matching)
//! - [`source`]: CSV, TSV and JSON vocabulary sources
//! - [`config`], [`error`]: ambient configuration and error types
//!
//! The engine performs no I/O and never fails; loading a vocabulary is a
//! separate step that feeds it `(word, definition)` pairs.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod lexicon;
pub mod source;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use lexicon::{Lexicon, LookupResult, SharedLexicon};

/// Version information for the Mauka Lexicon.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a lexicon from the configured data source.
///
/// # Returns
///
/// * `Ok(Lexicon)` loaded with every entry of the source
/// * `Err(LexiconError)` if the source is not configured or cannot be read
pub fn build_lexicon(config: &config::LexiconConfig) -> error::LexiconResult<Lexicon> {
    let mut lexicon = Lexicon::with_config(&config.engine);
    let mut source = source::open(&config.source)?;
    source::load(&mut lexicon, source.as_mut())?;
    Ok(lexicon)
}
