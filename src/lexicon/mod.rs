//! Lexicon Engine
//!
//! The lexicon ties the [`HuaTrie`] store to the two collaborators that keep it
//! queryable as a dictionary:
//!
//! * a set of normalized words, used to reject duplicate insertion
//! * an insertion-ordered word sequence, used as the candidate pool for
//!   edit-distance correction
//!
//! All three always describe the same set of words. Words are lower-cased
//! before they are stored or looked up, so every query is case-insensitive and
//! the original casing is not retained.
//!
//! # Example
//!
//! ```
//! use mauka_lexicon_lib::lexicon::Lexicon;
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.insert("apple", "a fruit");
//! lexicon.insert("apply", "to request");
//! lexicon.insert("app", "a program");
//!
//! let result = lexicon.lookup("APPLE");
//! assert!(result.found);
//! assert_eq!(result.definition, "a fruit");
//!
//! assert_eq!(lexicon.suggest_prefix("app", 10), vec!["app", "apple", "apply"]);
//! assert_eq!(lexicon.correct("aple", 2, 5)[0], "apple");
//! ```
//!
//! # Concurrency
//!
//! Queries take `&self` and never mutate, so any number of threads may query a
//! loaded lexicon at once. For insertion while others query, wrap it in a
//! [`SharedLexicon`].

pub mod fuzzy;
pub mod shared;
pub mod suggest;

use std::borrow::Cow;

use hashbrown::HashSet;
use serde::Serialize;

use crate::config::engine::EngineConfig;
use crate::data_structures::HuaTrie;

pub use fuzzy::{edit_distance, Correction};
pub use shared::SharedLexicon;

/// Default number of completions gathered per requested suggestion.
pub const DEFAULT_ACCUMULATION_FACTOR: usize = 3;

/// Result of an exact lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LookupResult {
    /// Whether the word is stored
    pub found: bool,

    /// The stored definition, empty if none was recorded or the word is absent
    pub definition: String,
}

/// What an [`Lexicon::insert`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The word was new and has been added
    Inserted,
    /// The word existed and its definition was replaced
    Updated,
    /// The word existed and no definition was given
    Unchanged,
}

/// Tally of a bulk insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    /// Words added
    pub inserted: usize,
    /// Existing words whose definition was replaced
    pub updated: usize,
    /// Entries that changed nothing
    pub unchanged: usize,
}

impl LoadReport {
    /// Counts one insertion outcome.
    pub fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::Updated => self.updated += 1,
            InsertOutcome::Unchanged => self.unchanged += 1,
        }
    }

    /// Total number of entries processed.
    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.unchanged
    }
}

/// Lower-cases a word, borrowing it when it is already lower case.
pub fn normalize(word: &str) -> Cow<'_, str> {
    let is_lower = word.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    });

    if is_lower {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// An in-memory dictionary supporting exact lookup, prefix completion and
/// edit-distance correction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Prefix tree holding every word and its definition
    trie: HuaTrie,

    /// Normalized words currently stored
    words: HashSet<String>,

    /// Normalized words in first-insertion order
    sequence: Vec<String>,

    /// Completions gathered per requested suggestion
    accumulation_factor: usize,
}

impl Lexicon {
    /// Creates a new empty lexicon with the default accumulation factor.
    pub fn new() -> Self {
        Self {
            trie: HuaTrie::new(),
            words: HashSet::new(),
            sequence: Vec::new(),
            accumulation_factor: DEFAULT_ACCUMULATION_FACTOR,
        }
    }

    /// Creates a new empty lexicon tuned by the engine configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            accumulation_factor: config.accumulation_factor.max(1),
            ..Self::new()
        }
    }

    /// Inserts a word with an optional definition.
    ///
    /// If the normalized word is already stored, a non-empty `definition`
    /// replaces the stored one and an empty one leaves it untouched. A new word
    /// is added to the trie, the word set and the end of the word sequence.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert, in any case.
    /// * `definition` - Its definition, or an empty string for none.
    ///
    /// # Returns
    ///
    /// What the call changed, see [`InsertOutcome`].
    pub fn insert<W, D>(&mut self, word: W, definition: D) -> InsertOutcome
    where
        W: AsRef<str>,
        D: Into<String>,
    {
        let word = normalize(word.as_ref());
        let definition = definition.into();

        if self.words.contains(&*word) {
            if definition.is_empty() {
                return InsertOutcome::Unchanged;
            }
            self.trie.set_definition(&word, definition);
            return InsertOutcome::Updated;
        }

        self.trie.insert(&word, definition);
        let word = word.into_owned();
        self.words.insert(word.clone());
        self.sequence.push(word);
        InsertOutcome::Inserted
    }

    /// Inserts every `(word, definition)` pair in order.
    ///
    /// # Returns
    ///
    /// A [`LoadReport`] counting what each insertion did.
    pub fn insert_all<I, W, D>(&mut self, entries: I) -> LoadReport
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        let mut report = LoadReport::default();
        for (word, definition) in entries {
            let outcome = self.insert(word, definition);
            tracing::trace!(?outcome, "Inserted entry");
            report.record(outcome);
        }
        report
    }

    /// Looks a word up by exact (case-insensitive) match.
    ///
    /// A string that is only a prefix of stored words is not found. The empty
    /// string resolves to the root, which is only found if `""` was inserted.
    pub fn lookup<W: AsRef<str>>(&self, word: W) -> LookupResult {
        let word = normalize(word.as_ref());
        match self.trie.node(&word) {
            Some(node) => LookupResult {
                found: node.is_terminal,
                definition: node.definition.clone(),
            },
            None => LookupResult::default(),
        }
    }

    /// Checks if a word is stored.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.words.contains(&*normalize(word.as_ref()))
    }

    /// Returns up to `max_suggestions` stored words starting with `prefix`.
    ///
    /// Words come out in depth-first order with characters in code point order,
    /// so a word precedes its extensions. An unknown prefix yields an empty list.
    pub fn suggest_prefix<P: AsRef<str>>(&self, prefix: P, max_suggestions: usize) -> Vec<String> {
        let prefix = normalize(prefix.as_ref());
        suggest::suggest(
            &self.trie,
            &prefix,
            max_suggestions,
            self.accumulation_factor,
        )
    }

    /// Returns up to `max_suggestions` stored words within `max_distance` edits
    /// of `word`, closest first and alphabetical among equals.
    ///
    /// The word itself (distance 0) is never suggested.
    pub fn correct<W: AsRef<str>>(
        &self,
        word: W,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        self.rank_corrections(word, max_distance, max_suggestions)
            .into_iter()
            .map(|correction| correction.word)
            .collect()
    }

    /// Same ranking as [`Lexicon::correct`], keeping each candidate's distance.
    pub fn rank_corrections<W: AsRef<str>>(
        &self,
        word: W,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<Correction> {
        let word = normalize(word.as_ref());
        fuzzy::rank_corrections(
            &word,
            self.sequence.iter().map(String::as_str),
            max_distance,
            max_suggestions,
        )
    }

    /// Returns the stored words in first-insertion order.
    pub fn words(&self) -> &[String] {
        &self.sequence
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Checks if the lexicon stores no words.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &HuaTrie {
        &self.trie
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, D> FromIterator<(W, D)> for Lexicon
where
    W: AsRef<str>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.insert_all(iter);
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_lexicon() -> Lexicon {
        [
            ("apple", "a fruit"),
            ("apply", "to request"),
            ("app", "a program"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_normalize_borrows_lowercase() {
        assert!(matches!(normalize("apple"), Cow::Borrowed("apple")));
        assert!(matches!(normalize(""), Cow::Borrowed("")));
        assert_eq!(normalize("APPLE"), "apple");
        assert_eq!(normalize("ÉCOLE"), "école");
        // Final sigma follows the string rule
        assert_eq!(normalize("ΟΔΟΣ"), "οδο\u{3c2}");
    }

    #[test]
    fn test_insert_outcomes() {
        let mut lexicon = Lexicon::new();

        assert_eq!(lexicon.insert("Apple", "a fruit"), InsertOutcome::Inserted);
        assert_eq!(lexicon.insert("APPLE", ""), InsertOutcome::Unchanged);
        assert_eq!(lexicon.insert("apple", "a tree"), InsertOutcome::Updated);

        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.words(), ["apple".to_string()]);
        assert_eq!(lexicon.lookup("apple").definition, "a tree");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let lexicon = fruit_lexicon();

        let result = lexicon.lookup("APPLE");
        assert!(result.found);
        assert_eq!(result.definition, "a fruit");

        assert!(lexicon.contains("ApPlY"));
        assert!(!lexicon.contains("appl"));
    }

    #[test]
    fn test_lookup_prefix_and_missing() {
        let lexicon = fruit_lexicon();

        assert_eq!(lexicon.lookup("appl"), LookupResult::default());
        assert_eq!(lexicon.lookup("banana"), LookupResult::default());
        assert_eq!(lexicon.lookup("apples"), LookupResult::default());
    }

    #[test]
    fn test_empty_string_boundary() {
        let mut lexicon = fruit_lexicon();
        assert!(!lexicon.lookup("").found);

        assert_eq!(lexicon.insert("", "the empty word"), InsertOutcome::Inserted);
        let result = lexicon.lookup("");
        assert!(result.found);
        assert_eq!(result.definition, "the empty word");
        assert_eq!(lexicon.suggest_prefix("", 1), vec![""]);
    }

    #[test]
    fn test_duplicate_without_definition() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("cat", "");
        lexicon.insert("cat", "");

        let result = lexicon.lookup("cat");
        assert!(result.found);
        assert_eq!(result.definition, "");
        assert_eq!(lexicon.words(), ["cat".to_string()]);
    }

    #[test]
    fn test_insert_all_report() {
        let mut lexicon = Lexicon::new();
        let report = lexicon.insert_all([
            ("cat", ""),
            ("Cat", "a feline"),
            ("dog", ""),
            ("DOG", ""),
        ]);

        assert_eq!(
            report,
            LoadReport {
                inserted: 2,
                updated: 1,
                unchanged: 1,
            }
        );
        assert_eq!(report.total(), 4);
        assert_eq!(lexicon.words(), ["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_suggest_and_correct() {
        let lexicon = fruit_lexicon();

        assert_eq!(lexicon.suggest_prefix("APP", 10), vec!["app", "apple", "apply"]);
        assert_eq!(lexicon.suggest_prefix("app", 2), vec!["app", "apple"]);
        assert!(lexicon.suggest_prefix("x", 10).is_empty());

        assert_eq!(lexicon.correct("aple", 2, 5), vec!["apple", "app", "apply"]);
        assert_eq!(lexicon.correct("aple", 1, 5), vec!["apple"]);
        assert!(lexicon.correct("apple", 0, 5).is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = EngineConfig {
            accumulation_factor: 1,
            ..EngineConfig::default()
        };
        let mut lexicon = Lexicon::with_config(&config);
        lexicon.insert_all([("ab", ""), ("abc", ""), ("abd", "")]);

        assert_eq!(lexicon.suggest_prefix("ab", 2), vec!["ab", "abc"]);
    }
}
