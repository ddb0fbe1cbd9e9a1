//! Data structures for the Mauka Lexicon.
//!
//! This module contains the storage structures the lexicon engine is built on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned, acyclic structures with no shared ownership
//! - Deterministic iteration order

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{Completions, HuaTrie, TrieNode};
