//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::source::SourceError;
use crate::error::{ErrorContext, ErrorReporter, LexiconError, LexiconResult};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LexiconError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let source_error = SourceError::from(io_error);
    let lexicon_error = LexiconError::from(source_error);

    let error_string = format!("{lexicon_error}");
    assert!(error_string.starts_with("Load failed"));
    assert!(error_string.contains("file not found"));
}

/// Test conversions through `?`.
#[test]
fn test_question_mark_conversion() {
    fn load() -> LexiconResult<()> {
        Err(ConfigError::ValidationError("bad level".to_string()))?;
        Ok(())
    }

    let error = load().unwrap_err();
    assert!(matches!(error, LexiconError::Config(_)));
    assert!(error.to_string().contains("bad level"));
}

/// Test the messages of data source errors.
#[test]
fn test_source_error_display() {
    let error = SourceError::FileNotFound(PathBuf::from("/tmp/words.csv"));
    assert!(error.to_string().contains("/tmp/words.csv"));

    let error = SourceError::InvalidRecord {
        position: 3,
        message: "definition must be a string".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid record at 3: definition must be a string"
    );

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(SourceError::from(json_error)
        .to_string()
        .starts_with("Malformed JSON source"));
}

/// Test that a span trace is only kept when captured inside a span.
#[test]
fn test_span_trace_outside_span() {
    let context = ErrorContext::new(LexiconError::Custom("x".into()), "test").with_span_trace();
    // No subscriber with an ErrorLayer is installed in unit tests
    assert!(context.trace.is_none());
}

/// Reporter that records what it was given.
#[derive(Debug, Default)]
struct RecordingReporter {
    reported_count: AtomicUsize,
    components: Mutex<Vec<String>>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
        self.components
            .lock()
            .unwrap()
            .push(context.component.clone());
    }
}

/// Test that reporters can be used behind a trait object.
#[test]
fn test_error_reporter() {
    let reporter = RecordingReporter::default();
    let dyn_reporter: &dyn ErrorReporter = &reporter;

    dyn_reporter.report(ErrorContext::new(
        LexiconError::Source(SourceError::NotConfigured),
        "source",
    ));
    dyn_reporter.report(ErrorContext::new(
        LexiconError::Custom("second".to_string()),
        "cli",
    ));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 2);
    assert_eq!(*reporter.components.lock().unwrap(), vec!["source", "cli"]);
}
