//! Bounded prefix completion.
//!
//! Completion cost is bounded by the number of words gathered rather than by the
//! size of the subtree under the prefix, so short, high fan-out prefixes stay
//! cheap on large vocabularies.

use hashbrown::HashSet;

use crate::data_structures::HuaTrie;

/// Collects up to `max_suggestions` distinct stored words starting with `prefix`.
///
/// At most `max_suggestions * accumulation_factor` completions are gathered from
/// the trie before deduplication and truncation. `prefix` must already be
/// normalized.
pub fn suggest(
    trie: &HuaTrie,
    prefix: &str,
    max_suggestions: usize,
    accumulation_factor: usize,
) -> Vec<String> {
    if max_suggestions == 0 {
        return Vec::new();
    }

    let cap = max_suggestions.saturating_mul(accumulation_factor.max(1));
    let mut seen = HashSet::new();
    let mut suggestions: Vec<String> = trie
        .completions(prefix)
        .take(cap)
        .filter(|word| seen.insert(word.clone()))
        .collect();

    suggestions.truncate(max_suggestions);
    suggestions
}
