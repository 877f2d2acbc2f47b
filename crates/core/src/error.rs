//! Error types for roster
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::oracle::Expectation;
use std::io;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading a config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Config parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Category tag outside the known set
    #[error("Invalid category tag: {0:?}")]
    InvalidCategory(char),

    /// No record stored under the identifier
    #[error("Key not found: {0}")]
    KeyNotFound(u32),

    /// Positional range does not fit the container
    #[error("Range {start}..{end} out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Range start
        start: usize,
        /// Range end (exclusive)
        end: usize,
        /// Container length
        len: usize,
    },

    /// Drop oracle verification failed
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

/// Drop oracle verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// `verify` called before any expectation was declared
    #[error("no expectation declared")]
    NoExpectation,

    /// Observed drop count does not satisfy the expectation
    #[error("expected {expected} drops, observed {actual}")]
    Mismatch {
        /// Declared expectation
        expected: Expectation,
        /// Drops observed since the expectation was declared
        actual: usize,
    },
}
