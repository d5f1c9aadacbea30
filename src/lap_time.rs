use std::fmt;
use std::ops::{Add, Sub};

use crate::errors::TimeParseError;

// @module: Lap time parsing, arithmetic and formatting

/// Fixed set of output patterns used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Lap time with milliseconds: `HH:mm:ss.SSS`
    LapTime,
    /// Chapter timestamp without fraction: `HH:mm:ss`
    Timestamp,
    /// SRT timing with comma fraction separator: `HH:mm:ss,SSS`
    Subtitle,
}

/// An exact signed elapsed time with millisecond resolution.
///
/// This is a pure duration, not a clock value: no 24h wraparound, no
/// time zones. Subtraction may yield negative values, which render with
/// an explicit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LapDuration(i64);

impl LapDuration {
    /// The zero duration
    pub const ZERO: LapDuration = LapDuration(0);

    pub fn from_millis(millis: i64) -> Self {
        LapDuration(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        LapDuration(secs * 1_000)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a loosely formatted time string into an exact duration.
    ///
    /// Accepts one to three colon-separated numeric groups. Each group with a
    /// single-digit integer portion is left-padded with a zero, then `00:`
    /// groups are prepended until the input reads as `HH:MM:SS[.frac]`. The
    /// normalized string is interpreted as a wall-clock time-of-day and
    /// returned as the duration since midnight, so a bare `"40"` is 40
    /// seconds and `"1:32.5"` is one minute 32.5 seconds.
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::EmptyInput);
        }

        let groups: Vec<&str> = trimmed.split(':').collect();
        if groups.len() > 3 {
            return Err(TimeParseError::TooManyGroups(groups.len()));
        }

        // Pad groups whose integer portion (before an optional '.') is a
        // single digit, e.g. "5.2" becomes "05.2".
        let mut padded: Vec<String> = Vec::with_capacity(3);
        for _ in 0..(3 - groups.len()) {
            padded.push("00".to_string());
        }
        for group in &groups {
            let int_len = group.find('.').unwrap_or(group.len());
            if int_len == 1 {
                padded.push(format!("0{}", group));
            } else {
                padded.push((*group).to_string());
            }
        }

        let hours = Self::parse_group(&padded[0])?;
        let minutes = Self::parse_group(&padded[1])?;
        let (seconds, millis) = Self::parse_seconds_group(&padded[2])?;

        // Wall-clock interpretation: components must be valid time-of-day
        // fields. Durations beyond 24h only ever arise from arithmetic.
        if hours >= 24 {
            return Err(TimeParseError::ComponentOutOfRange {
                input: trimmed.to_string(),
                component: "hours",
                limit: 24,
            });
        }
        if minutes >= 60 {
            return Err(TimeParseError::ComponentOutOfRange {
                input: trimmed.to_string(),
                component: "minutes",
                limit: 60,
            });
        }
        if seconds >= 60 {
            return Err(TimeParseError::ComponentOutOfRange {
                input: trimmed.to_string(),
                component: "seconds",
                limit: 60,
            });
        }

        let total =
            i64::from(hours) * 3_600_000 + i64::from(minutes) * 60_000 + i64::from(seconds) * 1_000
                + i64::from(millis);
        Ok(LapDuration(total))
    }

    /// Render the duration into one of the fixed output patterns.
    ///
    /// With `truncate` set, leading `00:` groups are stripped repeatedly, so
    /// `00:01:32.500` renders as `01:32.500` and `00:00:02.700` as `02.700`.
    /// The seconds group always survives. Hours are an unbounded magnitude
    /// field: a duration above 24 hours is never wrapped.
    pub fn format(&self, format: TimeFormat, truncate: bool) -> String {
        let ms = self.0.unsigned_abs();
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        let mut rendered = match format {
            TimeFormat::LapTime => {
                format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
            }
            TimeFormat::Timestamp => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            TimeFormat::Subtitle => {
                format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
            }
        };

        if truncate {
            while let Some(rest) = rendered.strip_prefix("00:") {
                rendered = rest.to_string();
            }
        }

        if self.0 < 0 {
            format!("-{}", rendered)
        } else {
            rendered
        }
    }

    // Parse an hours or minutes group
    fn parse_group(group: &str) -> Result<u32, TimeParseError> {
        group
            .parse::<u32>()
            .map_err(|_| TimeParseError::InvalidNumber(group.to_string()))
    }

    // Parse the seconds group with its optional fraction, returning
    // (seconds, milliseconds). Digits beyond the third fractional place are
    // rounded into the millisecond value rather than dropped.
    fn parse_seconds_group(group: &str) -> Result<(u32, u32), TimeParseError> {
        let (int_part, frac_part) = match group.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (group, None),
        };

        let seconds = int_part
            .parse::<u32>()
            .map_err(|_| TimeParseError::InvalidNumber(group.to_string()))?;

        let millis = match frac_part {
            None => 0,
            Some(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(TimeParseError::InvalidNumber(group.to_string()));
                }
                let mut millis = digits
                    .bytes()
                    .take(3)
                    .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
                // Right-pad short fractions: ".2" means 200ms
                for _ in digits.len()..3 {
                    millis *= 10;
                }
                // Round half up on the fourth fractional digit
                if digits.len() > 3 && digits.as_bytes()[3] - b'0' >= 5 {
                    millis += 1;
                }
                millis
            }
        };

        Ok((seconds, millis))
    }
}

impl Add for LapDuration {
    type Output = LapDuration;

    fn add(self, rhs: LapDuration) -> LapDuration {
        LapDuration(self.0 + rhs.0)
    }
}

impl Sub for LapDuration {
    type Output = LapDuration;

    fn sub(self, rhs: LapDuration) -> LapDuration {
        LapDuration(self.0 - rhs.0)
    }
}

impl fmt::Display for LapDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(TimeFormat::LapTime, false))
    }
}
