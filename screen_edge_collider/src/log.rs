//! Logging for the screen edge collider
//!
//! - Pluggable sink via the `Logger` trait (see `Engine::set_logger`)
//! - Five ordered severities
//! - Colored console output by default
//! - ERROR entries carry the file:line of the call site

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for log entries emitted by the crate.
///
/// # Example
///
/// ```no_run
/// use screen_edge_collider::edge3d::log::{Logger, LogEntry};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    pub timestamp: SystemTime,

    /// Emitting component (e.g., "edge3d::Projector", "edge3d::Collider")
    pub source: String,

    pub message: String,

    /// Call site file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Call site line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Render an entry as `[timestamp] [SEVERITY] [source] message (file:line)`.
///
/// The `(file:line)` suffix only appears when both are present.
/// Colors are applied when `colorize` is true.
pub fn format_entry(entry: &LogEntry, colorize: bool) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let (severity, source) = if colorize {
        let severity = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };
        (severity.to_string(), entry.source.bright_blue().to_string())
    } else {
        (entry.severity.label().to_string(), entry.source.clone())
    };

    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] [{}] {} ({}:{})",
            timestamp, severity, source, entry.message, file, line
        ),
        _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
    }
}

/// Colored console logger, installed until `Engine::set_logger` replaces it.
///
/// Trace is gray, Debug cyan, Info green, Warn yellow, Error bold red.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        println!("{}", format_entry(entry, true));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! edge_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::edge3d::Engine::log(
            $crate::edge3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```no_run
/// screen_edge_collider::edge_debug!("edge3d::Projector", "depth offset {}", 4.0);
/// ```
#[macro_export]
macro_rules! edge_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::edge3d::Engine::log(
            $crate::edge3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! edge_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::edge3d::Engine::log(
            $crate::edge3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! edge_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::edge3d::Engine::log(
            $crate::edge3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! edge_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::edge3d::Engine::log_detailed(
            $crate::edge3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an `Error` at ERROR severity and evaluate to it.
///
/// ```no_run
/// use screen_edge_collider::edge3d::{Error, Result};
///
/// fn fail() -> Result<()> {
///     Err(screen_edge_collider::edge_err!("edge3d::Example", Error::MissingCamera))
/// }
/// ```
#[macro_export]
macro_rules! edge_err {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::edge_error!($source, "{}", err);
        err
    }};
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
