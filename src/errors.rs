/*!
 * Error types for the lapchapters application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when parsing a lap or offset time string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input was empty after trimming
    #[error("Empty time input")]
    EmptyInput,

    /// Input had more colon-separated groups than hours:minutes:seconds
    #[error("Too many time groups: expected at most 3, got {0}")]
    TooManyGroups(usize),

    /// A group could not be read as a number
    #[error("Invalid number in time group '{0}'")]
    InvalidNumber(String),

    /// A component was outside its wall-clock range
    #[error("Time component out of range in '{input}': {component} must be below {limit}")]
    ComponentOutOfRange {
        /// Original (trimmed) input
        input: String,
        /// Which component failed ("hours", "minutes" or "seconds")
        component: &'static str,
        /// Exclusive upper bound for the component
        limit: u32,
    },
}

/// Errors that can occur during timeline construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Fastest-lap computation was invoked on an empty lap list
    #[error("Cannot determine the fastest lap of an empty lap list")]
    EmptyLapList,

    /// A non-blank lap entry failed to parse
    #[error("Invalid lap time for {session} lap {lap}: {source}")]
    InvalidLap {
        /// Session the lap belongs to
        session: String,
        /// 1-based lap number within the session
        lap: usize,
        /// Underlying parse failure
        source: TimeParseError,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from time parsing
    #[error("Time parse error: {0}")]
    TimeParse(#[from] TimeParseError),

    /// Error from timeline construction
    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
