//! Per-problem solve status inside a contest window

use serde::Serialize;

use crate::constants::NOT_SOLVED;

use super::{ContestWindow, SubmissionEntry};

/// Outcome of one problem for one user in one contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemResult {
    /// Seconds from contest start to the earliest in-window accepted
    /// submission, or `-1` when there is none
    pub accepted_time: i64,
}

impl ProblemResult {
    pub const fn unsolved() -> Self {
        Self {
            accepted_time: NOT_SOLVED,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.accepted_time != NOT_SOLVED
    }
}

impl Default for ProblemResult {
    fn default() -> Self {
        Self::unsolved()
    }
}

/// Earliest accepted submission that falls inside `window`.
///
/// Accepted submissions before the start or after the end never count,
/// and rejected submissions are ignored entirely.
pub fn calculate(entries: &[SubmissionEntry], window: &ContestWindow) -> ProblemResult {
    entries
        .iter()
        .filter(|entry| entry.is_accepted && window.contains(entry.create_time))
        .map(|entry| window.offset_seconds(entry.create_time))
        .min()
        .map(|accepted_time| ProblemResult { accepted_time })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    const HOUR: i64 = 3600;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 4, 12, 0, 0).unwrap()
    }

    fn entry(is_accepted: bool, offset: i64) -> SubmissionEntry {
        SubmissionEntry {
            is_accepted,
            create_time: t0() + Duration::seconds(offset),
        }
    }

    fn one_hour() -> ContestWindow {
        ContestWindow::new(t0(), HOUR).unwrap()
    }

    #[test]
    fn test_accepted_after_window_is_unsolved() {
        let entries = [entry(false, 10), entry(true, 3700)];
        assert_eq!(calculate(&entries, &one_hour()).accepted_time, -1);
    }

    #[test]
    fn test_earliest_accepted_wins() {
        let entries = [entry(true, 120), entry(true, 60)];
        assert_eq!(calculate(&entries, &one_hour()).accepted_time, 60);
    }

    #[test]
    fn test_accepted_before_window_is_unsolved() {
        let entries = [entry(true, -1)];
        assert!(!calculate(&entries, &one_hour()).is_solved());
    }

    #[test]
    fn test_window_edges_count() {
        assert_eq!(calculate(&[entry(true, 0)], &one_hour()).accepted_time, 0);
        assert_eq!(calculate(&[entry(true, HOUR)], &one_hour()).accepted_time, HOUR);
    }

    #[test]
    fn test_rejected_inside_window_ignored() {
        let entries = [entry(false, 5), entry(false, 50), entry(true, 900)];
        assert_eq!(calculate(&entries, &one_hour()).accepted_time, 900);
    }

    #[test]
    fn test_no_entries_is_unsolved() {
        assert_eq!(calculate(&[], &one_hour()), ProblemResult::unsolved());
    }

    #[test]
    fn test_identical_timestamps() {
        let entries = [entry(true, 42), entry(true, 42)];
        assert_eq!(calculate(&entries, &one_hour()).accepted_time, 42);
    }

    #[test]
    fn test_result_stays_within_bounds() {
        let window = one_hour();
        for offsets in [
            vec![-7200, -1, 0],
            vec![1, 1800, 3599],
            vec![3600, 3601, 99999],
            vec![-5, 4000],
        ] {
            let entries: Vec<_> = offsets.iter().map(|&o| entry(true, o)).collect();
            let result = calculate(&entries, &window);
            assert!(
                result.accepted_time == -1
                    || (0..=window.duration_seconds()).contains(&result.accepted_time)
            );
            // Re-running on the same snapshot gives the same answer
            assert_eq!(result, calculate(&entries, &window));
        }
    }
}
