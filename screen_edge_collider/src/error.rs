//! Error types for the screen edge collider
//!
//! This module defines the error types returned by projection, wall planning,
//! configuration resolution and wall materialization.

use std::fmt;

/// Result type for screen edge collider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Screen edge collider errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No camera is available from the camera provider
    MissingCamera,

    /// Screen rectangle width or height is not strictly positive
    InvalidRect(String),

    /// Zero-length outward direction (camera sits on a wall center)
    DegenerateGeometry(String),

    /// The scene materializer could not create a wall
    MaterializationFailed(String),

    /// A configuration value is out of range (non-finite depth, negative thickness, ...)
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCamera => write!(f, "No camera available"),
            Error::InvalidRect(msg) => write!(f, "Invalid screen rectangle: {}", msg),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::MaterializationFailed(msg) => write!(f, "Materialization failed: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
