//! Daily submission activity

use chrono::{FixedOffset, NaiveDate};

use crate::models::Submission;

/// Count submissions per calendar day over `[begin, end]`.
///
/// Days are taken in `offset`. The result has one slot per day; submissions
/// falling outside the range are not counted. An inverted range yields an
/// empty vector.
pub fn daily_submission_counts(
    submissions: &[Submission],
    begin: NaiveDate,
    end: NaiveDate,
    offset: FixedOffset,
) -> Vec<u32> {
    let days = (end - begin).num_days() + 1;
    if days <= 0 {
        return Vec::new();
    }

    let mut counts = vec![0u32; days as usize];
    for submission in submissions {
        let day = submission.create_time.with_timezone(&offset).date_naive();
        let slot = (day - begin).num_days();
        if (0..days).contains(&slot) {
            counts[slot as usize] += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn submission_at(y: i32, m: u32, d: u32, h: u32) -> Submission {
        Submission {
            username: "alice".to_string(),
            oj_id: 1,
            pid: "1000".to_string(),
            is_accepted: false,
            create_time: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_counts_per_day() {
        let submissions = vec![
            submission_at(2024, 1, 1, 3),
            submission_at(2024, 1, 1, 23),
            submission_at(2024, 1, 3, 12),
            submission_at(2024, 1, 9, 12),
        ];
        let utc = FixedOffset::east_opt(0).unwrap();
        let counts = daily_submission_counts(&submissions, date(2024, 1, 1), date(2024, 1, 3), utc);
        assert_eq!(counts, vec![2, 0, 1]);
    }

    #[test]
    fn test_offset_moves_day_boundary() {
        // 20:00 UTC on Jan 1 is already Jan 2 at UTC+8
        let submissions = vec![submission_at(2024, 1, 1, 20)];
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        let counts =
            daily_submission_counts(&submissions, date(2024, 1, 1), date(2024, 1, 2), beijing);
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn test_inverted_range() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert!(daily_submission_counts(&[], date(2024, 2, 1), date(2024, 1, 1), utc).is_empty());
    }
}
