//! Unit tests for log.rs
//!
//! Tests LogSeverity, LogEntry formatting, and DefaultLogger.

use crate::log::{format_entry, DefaultLogger, LogEntry, LogSeverity, Logger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "edge3d::Projector".to_string(),
        message: "corners computed".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Info.label(), "INFO ");
}

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_entry_without_location() {
    let text = format_entry(&entry(LogSeverity::Debug, None, None), false);

    assert!(text.contains("[DEBUG]"));
    assert!(text.contains("[edge3d::Projector]"));
    assert!(text.ends_with("corners computed"));
}

#[test]
fn test_format_entry_with_location() {
    let text = format_entry(&entry(LogSeverity::Error, Some("projector.rs"), Some(42)), false);

    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("corners computed (projector.rs:42)"));
}

#[test]
fn test_format_entry_ignores_partial_location() {
    let text = format_entry(&entry(LogSeverity::Warn, Some("projector.rs"), None), false);
    assert!(!text.contains("projector.rs"));
}

#[test]
fn test_format_entry_timestamp_prefix() {
    let text = format_entry(&entry(LogSeverity::Info, None, None), false);

    // [YYYY-MM-DD HH:MM:SS.mmm]
    assert!(text.starts_with('['));
    assert_eq!(&text[24..25], "]");
}

#[test]
fn test_format_entry_colorized_keeps_message() {
    let text = format_entry(&entry(LogSeverity::Error, Some("a.rs"), Some(1)), true);
    assert!(text.contains("corners computed"));
    assert!(text.contains("(a.rs:1)"));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;

    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&entry(severity, None, None));
        logger.log(&entry(severity, Some("log_tests.rs"), Some(7)));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// CUSTOM LOGGER
// ============================================================================

struct CountingLogger {
    count: std::sync::Mutex<usize>,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        *self.count.lock().unwrap() += 1;
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { count: std::sync::Mutex::new(0) };
    let e = entry(LogSeverity::Info, None, None);

    logger.log(&e);
    logger.log(&e);

    assert_eq!(*logger.count.lock().unwrap(), 2);
}
