/*!
 * Inline validation of raw time entries.
 *
 * Raw offset and lap strings are checked against the accepted entry patterns
 * before generation, so that a malformed field is reported with its session,
 * position and a format hint instead of a bare parse failure.
 */

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::timeline::Session;

// @const: Accepted offset entry pattern: (minutes:)seconds
static OFFSET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]{1,2}:)?[0-9]{1,2}\s*$").unwrap());

// @const: Accepted lap entry pattern: (minutes:)seconds(.fraction)
static LAP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([0-9]{1,2}:)?[0-9]{1,2}(\.[0-9]+)?\s*$").unwrap());

/// Help message for malformed offsets
pub const OFFSET_HELP: &str =
    "Invalid offset time! Valid format: (minutes):[seconds]. For example: 40 or 1:32";

/// Help message for malformed lap times
pub const LAP_HELP: &str =
    "Invalid lap time! Valid format: (minutes):[seconds]:(milliseconds). For example: 40.983 or 1:32.987";

/// A single malformed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIssue {
    /// The session offset does not match the offset pattern
    InvalidOffset {
        session: String,
        value: String,
    },
    /// A non-blank lap does not match the lap pattern
    InvalidLap {
        session: String,
        /// 1-based position among the session's non-blank laps
        lap: usize,
        value: String,
    },
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::InvalidOffset { session, value } => {
                write!(f, "{} offset '{}': {}", session, value, OFFSET_HELP)
            }
            EntryIssue::InvalidLap { session, lap, value } => {
                write!(f, "{} lap {} '{}': {}", session, lap, value, LAP_HELP)
            }
        }
    }
}

/// Result of validating all entries of a session list
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Issues found, in session and field order
    pub issues: Vec<EntryIssue>,
}

impl ValidationResult {
    /// Whether every entry matched its pattern
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every raw offset and lap entry against the accepted patterns.
///
/// Empty offsets and blank laps are valid: the builder treats the former as
/// zero and skips the latter. The offset check is advisory, since generation
/// would swallow a malformed offset anyway, but surfacing it here keeps the
/// reported issues aligned with the help messages.
pub fn validate_sessions(sessions: &[Session]) -> ValidationResult {
    let mut result = ValidationResult::default();

    for session in sessions {
        if !session.offset.trim().is_empty() && !OFFSET_PATTERN.is_match(&session.offset) {
            result.issues.push(EntryIssue::InvalidOffset {
                session: session.name.clone(),
                value: session.offset.trim().to_string(),
            });
        }

        let mut lap_number = 0;
        for raw in &session.laps {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            lap_number += 1;
            if !LAP_PATTERN.is_match(raw) {
                result.issues.push(EntryIssue::InvalidLap {
                    session: session.name.clone(),
                    lap: lap_number,
                    value: trimmed.to_string(),
                });
            }
        }
    }

    result
}
