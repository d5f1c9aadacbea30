use std::fmt;

use crate::errors::TimelineError;
use crate::lap_time::{LapDuration, TimeFormat};

// @module: Fastest lap detection and delta computation

/// How a lap compares against the session's fastest lap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapDelta {
    /// The lap is the fastest of its session
    Fastest,
    /// The lap is behind the fastest lap by the given non-negative duration
    Behind(LapDuration),
}

impl fmt::Display for LapDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LapDelta::Fastest => write!(f, "Fastest Lap"),
            LapDelta::Behind(delta) => {
                write!(f, "+{}", delta.format(TimeFormat::LapTime, true))
            }
        }
    }
}

/// Find the minimum duration in a set of laps.
///
/// Equal durations are indistinguishable, so any minimum is "the first" one.
/// Callers must guard against empty lists; invoked regardless, this signals
/// `TimelineError::EmptyLapList`.
pub fn fastest(laps: &[LapDuration]) -> Result<LapDuration, TimelineError> {
    laps.iter().copied().min().ok_or(TimelineError::EmptyLapList)
}

/// Compare a lap against the session's fastest lap.
///
/// Exact equality marks the fastest lap itself; anything else is behind by
/// `lap - fastest`, which is non-negative whenever `fastest` really is the
/// minimum of the lap's session.
pub fn delta(lap: LapDuration, fastest: LapDuration) -> LapDelta {
    if lap == fastest {
        LapDelta::Fastest
    } else {
        LapDelta::Behind(lap - fastest)
    }
}
