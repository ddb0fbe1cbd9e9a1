//! Test modules for the Mauka Lexicon.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading, layering and validation
//! - Error display and reporting
//! - Property-based tests of the lexicon engine using proptest
//! - Data source parsing and bulk loading, with mocked and file-backed sources
//!
//! Shared strategies and fixtures live in [`test_utils`].

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{vocabulary_strategy, word_strategy, TestFixture};
