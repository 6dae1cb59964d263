//! Contest time window

use chrono::{DateTime, Duration, Utc};

use super::AggregationError;

/// Closed interval `[start, start + duration]` during which a contest runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContestWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    duration_seconds: i64,
}

impl ContestWindow {
    /// Build a window, rejecting negative durations and windows whose end
    /// is not a representable instant
    pub fn new(start: DateTime<Utc>, duration_seconds: i64) -> Result<Self, AggregationError> {
        if duration_seconds < 0 {
            return Err(AggregationError::NegativeDuration {
                duration: duration_seconds,
            });
        }

        let end = Duration::try_seconds(duration_seconds)
            .and_then(|length| start.checked_add_signed(length))
            .ok_or(AggregationError::DurationOutOfRange {
                duration: duration_seconds,
            })?;

        Ok(Self {
            start,
            end,
            duration_seconds,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `at` lies inside the window, both ends included
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whole seconds elapsed from the window start to `at`
    pub fn offset_seconds(&self, at: DateTime<Utc>) -> i64 {
        (at - self.start).num_seconds()
    }
}
