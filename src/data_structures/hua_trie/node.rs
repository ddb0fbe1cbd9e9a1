//! Node implementation for the Hua Trie.
//!
//! This module provides the TrieNode structure used in the Hua Trie implementation.
//! Each node exclusively owns its children, so the whole trie is a plain owned tree.

use std::collections::BTreeMap;

/// A node in the Hua Trie.
///
/// Each node represents a character in a word path. Terminal nodes mark the end
/// of a stored word and carry its definition.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Map of characters to child nodes, ordered by code point
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node spells a stored word
    pub is_terminal: bool,

    /// Definition of the word ending here (empty when none was recorded)
    pub definition: String,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows `path` one character at a time from this node.
    ///
    /// Returns `None` as soon as a required edge is missing. An empty path
    /// resolves to the node itself.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`TrieNode::descend`].
    pub fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }
}
