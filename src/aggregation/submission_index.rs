//! Submission history grouped by problem

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{ProblemKey, Submission};

/// The part of a submission the result calculator looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionEntry {
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
}

impl From<&Submission> for SubmissionEntry {
    fn from(submission: &Submission) -> Self {
        Self {
            is_accepted: submission.is_accepted,
            create_time: submission.create_time,
        }
    }
}

/// A user's submissions keyed by `(oj_id, pid)`.
///
/// Entries keep the order they were supplied in; every attempt is retained.
#[derive(Debug, Default, Clone)]
pub struct SubmissionIndex {
    entries: HashMap<ProblemKey, Vec<SubmissionEntry>>,
}

impl SubmissionIndex {
    pub fn build<'a, I>(submissions: I) -> Self
    where
        I: IntoIterator<Item = &'a Submission>,
    {
        let mut entries: HashMap<ProblemKey, Vec<SubmissionEntry>> = HashMap::new();
        for submission in submissions {
            entries
                .entry(submission.key())
                .or_default()
                .push(SubmissionEntry::from(submission));
        }

        Self { entries }
    }

    /// Attempts at `key`, empty when the user never submitted it
    pub fn entries(&self, key: &ProblemKey) -> &[SubmissionEntry] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct problems attempted
    pub fn problem_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn submission(oj_id: i32, pid: &str, is_accepted: bool, minute: i64) -> Submission {
        Submission {
            username: "alice".to_string(),
            oj_id,
            pid: pid.to_string(),
            is_accepted,
            create_time: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
                + Duration::minutes(minute),
        }
    }

    #[test]
    fn test_groups_by_judge_and_problem_code() {
        let submissions = vec![
            submission(1, "1000", false, 0),
            submission(2, "1000", true, 1),
            submission(1, "1000", true, 2),
            submission(1, "1001", true, 3),
        ];
        let index = SubmissionIndex::build(&submissions);

        assert_eq!(index.problem_count(), 3);
        let hdu = index.entries(&ProblemKey::new(1, "1000"));
        assert_eq!(hdu.len(), 2);
        assert!(!hdu[0].is_accepted);
        assert!(hdu[1].is_accepted);
        assert_eq!(index.entries(&ProblemKey::new(2, "1000")).len(), 1);
    }

    #[test]
    fn test_keeps_supply_order_and_duplicates() {
        let submissions = vec![
            submission(1, "A", true, 30),
            submission(1, "A", true, 10),
            submission(1, "A", true, 10),
        ];
        let index = SubmissionIndex::build(&submissions);
        let entries = index.entries(&ProblemKey::new(1, "A"));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].create_time, submissions[0].create_time);
        assert_eq!(entries[1], entries[2]);
    }

    #[test]
    fn test_unknown_problem_is_empty() {
        let index = SubmissionIndex::build(&Vec::<Submission>::new());
        assert_eq!(index.problem_count(), 0);
        assert!(index.entries(&ProblemKey::new(7, "X")).is_empty());
    }
}
