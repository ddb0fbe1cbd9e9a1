// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Edit-distance scoring and ranked corrections.
//!
//! Corrections are found by a full linear scan of the candidate words. Distance
//! computation dominates the cost, and candidates whose length alone rules them
//! out are skipped before the dynamic program runs.
//!
//! # Performance Characteristics
//!
//! - `edit_distance`: O(|a|·|b|) time, O(min(|a|, |b|)) space
//! - `rank_corrections`: one distance per candidate within the length window

use serde::Serialize;

/// A candidate correction and its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// The suggested word
    pub word: String,

    /// Levenshtein distance from the query word
    pub distance: usize,
}

/// Computes the Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions of a single character each cost 1.
/// Characters are Unicode scalar values.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

fn distance(a: &[char], b: &[char]) -> usize {
    // Rows span the shorter string
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            current[j + 1] = if lc == sc {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

/// Ranks candidate corrections for `word`.
///
/// Keeps candidates with `0 < distance <= max_distance`, orders them by distance
/// then by word, drops repeated words and returns at most `max_suggestions`.
/// `word` must already be normalized.
pub fn rank_corrections<'a, I>(
    word: &str,
    candidates: I,
    max_distance: usize,
    max_suggestions: usize,
) -> Vec<Correction>
where
    I: IntoIterator<Item = &'a str>,
{
    if max_distance == 0 || max_suggestions == 0 {
        return Vec::new();
    }

    let query: Vec<char> = word.chars().collect();
    let mut corrections: Vec<Correction> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let chars: Vec<char> = candidate.chars().collect();
            if chars.len().abs_diff(query.len()) > max_distance {
                return None;
            }

            let distance = distance(&query, &chars);
            (distance > 0 && distance <= max_distance).then(|| Correction {
                word: candidate.to_string(),
                distance,
            })
        })
        .collect();

    corrections.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    corrections.dedup_by(|a, b| a.word == b.word);
    corrections.truncate(max_suggestions);

    tracing::trace!(
        query = word,
        max_distance,
        found = corrections.len(),
        "Ranked corrections"
    );
    corrections
}
