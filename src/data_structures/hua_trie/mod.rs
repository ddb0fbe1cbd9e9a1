//! Hua Trie Implementation
//!
//! This module provides the prefix tree that backs the lexicon: words are stored
//! as character paths from the root, terminal nodes mark complete words and carry
//! their definitions.
//!
//! The trie stores keys exactly as given. Case folding is the caller's concern,
//! see [`crate::lexicon`].
//!
//! # Ordering
//!
//! Children are kept in code point order, so [`HuaTrie::completions`] yields words
//! in a reproducible depth-first pre-order: a word always precedes its extensions,
//! and siblings are visited in ascending character order.
//!
//! # Example
//!
//! ```
//! use mauka_lexicon_lib::data_structures::hua_trie::HuaTrie;
//!
//! let mut trie = HuaTrie::new();
//! trie.insert("apply", "to request");
//! trie.insert("app", "a program");
//! trie.insert("apple", "a fruit");
//!
//! let words: Vec<String> = trie.completions("app").collect();
//! assert_eq!(words, vec!["app", "apple", "apply"]);
//! ```

mod node;

use std::iter::FusedIterator;

pub use node::TrieNode;

/// Hua Trie is an owned prefix tree mapping words to definitions.
///
/// Key features:
/// * Lazy node allocation: only the unshared suffix of a new word allocates
/// * Deterministic depth-first enumeration of any subtree
/// * No removal: nodes live as long as the trie
#[derive(Debug, Default, Clone)]
pub struct HuaTrie {
    /// The root node of the trie (the empty path)
    root: TrieNode,

    /// Number of terminal nodes
    len: usize,

    /// Number of allocated nodes, excluding the root
    node_count: usize,
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word and its definition into the trie.
    ///
    /// Walks the character path from the root, creating missing nodes, marks the
    /// final node terminal and stores `definition` on it, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `key` - The word to insert. An empty key marks the root itself.
    /// * `definition` - The definition to associate with the word.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it already was.
    pub fn insert<V>(&mut self, key: &str, definition: V) -> bool
    where
        V: Into<String>,
    {
        let mut node = &mut self.root;
        for c in key.chars() {
            let created = !node.children.contains_key(&c);
            node = node.children.entry(c).or_default();
            if created {
                self.node_count += 1;
            }
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        node.definition = definition.into();

        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Replaces the definition of a word that is already stored.
    ///
    /// # Returns
    ///
    /// `true` if the word exists and was updated, `false` if it is not stored
    /// (in which case the trie is left untouched).
    pub fn set_definition<V>(&mut self, key: &str, definition: V) -> bool
    where
        V: Into<String>,
    {
        match self.root.descend_mut(key) {
            Some(node) if node.is_terminal => {
                node.definition = definition.into();
                true
            }
            _ => false,
        }
    }

    /// Returns the node reached by consuming `path` from the root, terminal or not.
    pub fn node(&self, path: &str) -> Option<&TrieNode> {
        self.root.descend(path)
    }

    /// Returns the definition of a stored word, or `None` if the word is not stored.
    ///
    /// A path that exists only as a prefix of longer words is not stored.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.node(key)
            .filter(|node| node.is_terminal)
            .map(|node| node.definition.as_str())
    }

    /// Checks if a word is stored in the trie.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Enumerates every stored word starting with `prefix`.
    ///
    /// The iterator is lazy: it only walks as much of the subtree as the caller
    /// consumes, so `completions(p).take(n)` costs at most the path to the `n`th
    /// word. A prefix that is not a path in the trie yields nothing.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        let stack = match self.node(prefix) {
            Some(node) => vec![(node, prefix.to_string())],
            None => Vec::new(),
        };
        Completions { stack }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes allocated below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

/// Depth-first iterator over the stored words of a subtree.
///
/// Created by [`HuaTrie::completions`]. Words come out in pre-order with children
/// visited in ascending character order.
#[derive(Debug)]
pub struct Completions<'a> {
    /// Pending nodes with the word spelled by their path
    stack: Vec<(&'a TrieNode, String)>,
}

impl<'a> Iterator for Completions<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, word)) = self.stack.pop() {
            // Reverse push so the smallest character is popped first
            for (c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(*c);
                self.stack.push((child, next));
            }

            if node.is_terminal {
                return Some(word);
            }
        }
        None
    }
}

impl FusedIterator for Completions<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = HuaTrie::new();

        assert!(trie.is_empty());

        assert!(trie.insert("hello", "world"));
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        assert_eq!(trie.get("hello"), Some("world"));
        assert!(trie.contains("hello"));
        assert_eq!(trie.get("nonexistent"), None);
        assert!(!trie.contains("nonexistent"));

        // Keys are stored verbatim
        assert_eq!(trie.get("HELLO"), None);

        // Re-insertion replaces the definition but does not add a word
        assert!(!trie.insert("hello", "planet"));
        assert_eq!(trie.get("hello"), Some("planet"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = HuaTrie::new();
        trie.insert("apple", "a fruit");

        assert!(trie.node("app").is_some());
        assert_eq!(trie.get("app"), None);
        assert_eq!(trie.node("app").map(|n| n.definition.as_str()), Some(""));
    }

    #[test]
    fn test_set_definition() {
        let mut trie = HuaTrie::new();
        trie.insert("apple", "");

        assert!(trie.set_definition("apple", "a fruit"));
        assert_eq!(trie.get("apple"), Some("a fruit"));

        // Only stored words can be updated
        assert!(!trie.set_definition("app", "a program"));
        assert!(!trie.set_definition("banana", "yellow"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("app"), None);
    }

    #[test]
    fn test_empty_key_is_root() {
        let mut trie = HuaTrie::new();
        trie.insert("a", "");

        assert!(trie.node("").is_some());
        assert_eq!(trie.get(""), None);

        assert!(trie.insert("", "root"));
        assert_eq!(trie.get(""), Some("root"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut trie = HuaTrie::new();
        trie.insert("apple", "");
        assert_eq!(trie.node_count(), 5);

        trie.insert("apply", "");
        assert_eq!(trie.node_count(), 6);

        trie.insert("app", "");
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_completions_order() {
        let mut trie = HuaTrie::new();
        for word in ["banana", "apply", "apple", "app", "application", "b"] {
            trie.insert(word, "");
        }

        let all: Vec<String> = trie.completions("").collect();
        assert_eq!(
            all,
            vec!["app", "apple", "application", "apply", "b", "banana"]
        );

        let apps: Vec<String> = trie.completions("appl").collect();
        assert_eq!(apps, vec!["apple", "application", "apply"]);

        assert_eq!(trie.completions("orange").count(), 0);
    }

    #[test]
    fn test_completions_unicode_order() {
        let mut trie = HuaTrie::new();
        for word in ["café", "cafe", "cafè", "caff"] {
            trie.insert(word, "");
        }

        let words: Vec<String> = trie.completions("caf").collect();
        // 'e' < 'f' < 'è' (U+00E8) < 'é' (U+00E9)
        assert_eq!(words, vec!["cafe", "caff", "cafè", "café"]);
    }

    #[test]
    fn test_completions_are_lazy_and_fused() {
        let mut trie = HuaTrie::new();
        for i in 0..100 {
            trie.insert(&format!("key{i:03}"), "");
        }

        let first: Vec<String> = trie.completions("key").take(3).collect();
        assert_eq!(first, vec!["key000", "key001", "key002"]);

        let mut iter = trie.completions("key09");
        assert_eq!(iter.by_ref().count(), 10);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
