//! Shared lexicon handle.
//!
//! A loaded [`Lexicon`] can be queried from many threads through `&Lexicon`
//! directly. [`SharedLexicon`] is for the remaining case: inserting words while
//! other threads are querying. Writers hold the write lock for one insertion or
//! one bulk insertion; readers hold the read lock for one query.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{Correction, InsertOutcome, Lexicon, LoadReport, LookupResult};

/// Cloneable, thread-safe handle to a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct SharedLexicon {
    inner: Arc<RwLock<Lexicon>>,
}

impl SharedLexicon {
    /// Wraps an existing lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            inner: Arc::new(RwLock::new(lexicon)),
        }
    }

    /// Inserts a word, see [`Lexicon::insert`].
    pub fn insert<W, D>(&self, word: W, definition: D) -> InsertOutcome
    where
        W: AsRef<str>,
        D: Into<String>,
    {
        self.inner.write().insert(word, definition)
    }

    /// Inserts every pair under a single write lock, see [`Lexicon::insert_all`].
    pub fn insert_all<I, W, D>(&self, entries: I) -> LoadReport
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        self.inner.write().insert_all(entries)
    }

    /// Looks a word up, see [`Lexicon::lookup`].
    pub fn lookup<W: AsRef<str>>(&self, word: W) -> LookupResult {
        self.inner.read().lookup(word)
    }

    /// Completes a prefix, see [`Lexicon::suggest_prefix`].
    pub fn suggest_prefix<P: AsRef<str>>(&self, prefix: P, max_suggestions: usize) -> Vec<String> {
        self.inner.read().suggest_prefix(prefix, max_suggestions)
    }

    /// Suggests corrections, see [`Lexicon::correct`].
    pub fn correct<W: AsRef<str>>(
        &self,
        word: W,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        self.inner.read().correct(word, max_distance, max_suggestions)
    }

    /// Ranks corrections with distances, see [`Lexicon::rank_corrections`].
    pub fn rank_corrections<W: AsRef<str>>(
        &self,
        word: W,
        max_distance: usize,
        max_suggestions: usize,
    ) -> Vec<Correction> {
        self.inner
            .read()
            .rank_corrections(word, max_distance, max_suggestions)
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the lexicon stores no words.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Locks the lexicon for several reads against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, Lexicon> {
        self.inner.read()
    }
}

impl From<Lexicon> for SharedLexicon {
    fn from(lexicon: Lexicon) -> Self {
        Self::new(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let shared = SharedLexicon::default();
        assert!(shared.is_empty());

        assert_eq!(shared.insert("Hello", "greeting"), InsertOutcome::Inserted);
        let clone = shared.clone();
        assert_eq!(clone.lookup("hello").definition, "greeting");
        assert_eq!(clone.len(), 1);

        let guard = shared.read();
        assert_eq!(guard.words(), ["hello".to_string()]);
    }

    /// Writers insert disjoint words while readers query; every word must be
    /// visible afterwards and the word sequence must hold each exactly once.
    #[test]
    fn test_shared_concurrent_insert_and_query() {
        const WRITERS: usize = 4;
        const READERS: usize = 4;
        const WORDS_PER_WRITER: usize = 50;

        let shared = SharedLexicon::default();
        let barrier = Arc::new(Barrier::new(WRITERS + READERS));
        let mut handles = Vec::with_capacity(WRITERS + READERS);

        for writer in 0..WRITERS {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                for i in 0..WORDS_PER_WRITER {
                    shared.insert(format!("word{writer}x{i}"), format!("def {writer} {i}"));
                }
            }));
        }

        for _ in 0..READERS {
            let shared = shared.clone();
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                for _ in 0..WORDS_PER_WRITER {
                    for word in shared.suggest_prefix("word", 5) {
                        assert!(shared.lookup(&word).found);
                    }
                    let _ = shared.correct("wordx", 2, 3);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(shared.len(), WRITERS * WORDS_PER_WRITER);
        let guard = shared.read();
        let mut words = guard.words().to_vec();
        words.sort();
        words.dedup();
        assert_eq!(words.len(), WRITERS * WORDS_PER_WRITER);
        assert_eq!(guard.lookup("word3x49").definition, "def 3 49");
    }
}
