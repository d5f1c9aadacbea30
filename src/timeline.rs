use log::debug;
use serde::{Deserialize, Serialize};

use crate::app_config::GeneratorConfig;
use crate::errors::TimelineError;
use crate::fastest_lap;
use crate::lap_time::{LapDuration, TimeFormat};

// @module: Timeline construction from ordered sessions

/// A named session with its raw offset and raw lap time strings.
///
/// Sessions are processed in caller-supplied order; the order is significant
/// and never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Session name, e.g. "Qualifying"
    pub name: String,

    /// Raw offset string: time before the session's first lap, relative to
    /// the end of the previous session. Unparseable offsets count as zero.
    #[serde(default)]
    pub offset: String,

    /// Raw lap time strings in driving order; blanks are skipped
    #[serde(default)]
    pub laps: Vec<String>,
}

impl Session {
    pub fn new(name: &str, offset: &str, laps: &[&str]) -> Self {
        Session {
            name: name.to_string(),
            offset: offset.to_string(),
            laps: laps.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

/// One segment of the absolute timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Absolute start, measured from the beginning of the first session
    pub start: LapDuration,

    /// Absolute end; entries chain so that each end is the next entry's start
    pub end: LapDuration,

    /// Human-facing description ("Start of Race", "Lap 3: 01:29.800 (Fastest Lap)")
    pub description: String,
}

impl TimelineEntry {
    /// Elapsed time covered by this entry
    pub fn length(&self) -> LapDuration {
        self.end - self.start
    }
}

/// Builds the absolute timeline for an ordered list of sessions.
///
/// Maintains a running cursor starting at zero: each session first advances
/// it by the session offset (emitting a "Start of" entry), then by each lap
/// in order (emitting a lap entry carrying its fastest-lap delta).
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    options: GeneratorConfig,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(options: GeneratorConfig) -> Self {
        TimelineBuilder { options }
    }

    /// Build the ordered timeline entries for the given sessions.
    ///
    /// A malformed non-blank lap is a hard error; a malformed offset is
    /// silently recovered as zero.
    pub fn build(&self, sessions: &[Session]) -> Result<Vec<TimelineEntry>, TimelineError> {
        let mut entries = Vec::new();
        let mut current = LapDuration::ZERO;

        for session in sessions {
            let entry_start = current;
            let offset = match LapDuration::parse(&session.offset) {
                Ok(offset) => offset,
                Err(e) => {
                    debug!(
                        "Treating offset {:?} of session '{}' as zero: {}",
                        session.offset, session.name, e
                    );
                    LapDuration::ZERO
                }
            };
            current = current + offset;

            entries.push(TimelineEntry {
                start: entry_start,
                end: current,
                description: format!("Start of {}", session.name),
            });

            let lap_times = Self::parse_laps(session)?;
            if lap_times.is_empty() {
                debug!("Session '{}' has no laps", session.name);
                continue;
            }
            let fastest = fastest_lap::fastest(&lap_times)?;

            for (i, lap) in lap_times.iter().copied().enumerate() {
                let lap_start = current;
                current = lap_start + lap;

                let delta = fastest_lap::delta(lap, fastest);
                entries.push(TimelineEntry {
                    start: lap_start,
                    end: current,
                    description: format!(
                        "Lap {}: {} ({})",
                        i + 1,
                        lap.format(TimeFormat::LapTime, true),
                        delta
                    ),
                });
            }
        }

        Ok(entries)
    }

    /// Project the entries the description output shows.
    ///
    /// Entries shorter than the configured minimum chapter length are dropped,
    /// except that a too-short very first entry instead resets the second
    /// entry's start to zero, preserving a usable first chapter marker. The
    /// subtitle output never goes through this projection.
    pub fn description_entries(&self, entries: &[TimelineEntry]) -> Vec<TimelineEntry> {
        let Some(min_secs) = self.options.min_chapter_length_secs else {
            return entries.to_vec();
        };
        let min_length = LapDuration::from_secs(min_secs as i64);

        let mut entries = entries.to_vec();
        if entries.len() > 1 && entries[0].length() < min_length {
            entries[1].start = LapDuration::ZERO;
        }
        entries.retain(|entry| entry.length() >= min_length);
        entries
    }

    // Trim, drop blanks, parse the rest in order
    fn parse_laps(session: &Session) -> Result<Vec<LapDuration>, TimelineError> {
        let mut lap_times = Vec::with_capacity(session.laps.len());
        for raw in &session.laps {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let lap = LapDuration::parse(raw).map_err(|source| TimelineError::InvalidLap {
                session: session.name.clone(),
                lap: lap_times.len() + 1,
                source,
            })?;
            lap_times.push(lap);
        }
        Ok(lap_times)
    }
}
