//! Per-user contest rows

use crate::models::Contest;

use super::{calculate, ProblemResult, SubmissionIndex};

/// One contest as seen by one user
#[derive(Debug, Clone)]
pub struct ContestRow {
    pub contest: Contest,
    pub solved: usize,
    /// Parallel to `contest.problems`
    pub problem_results: Vec<ProblemResult>,
}

/// Rows for every requested contest plus the widest problem set among them
#[derive(Debug, Clone, Default)]
pub struct ContestRows {
    pub max_problems: usize,
    pub contests: Vec<ContestRow>,
}

/// Evaluate every problem of every contest against the user's submissions.
///
/// Row order follows `contests`; the caller is expected to have ordered and
/// filtered them already.
pub fn build_contest_rows(contests: Vec<Contest>, index: &SubmissionIndex) -> ContestRows {
    let max_problems = contests
        .iter()
        .map(|contest| contest.problems.len())
        .max()
        .unwrap_or(0);

    let contests: Vec<ContestRow> = contests
        .into_iter()
        .map(|contest| {
            let problem_results: Vec<ProblemResult> = contest
                .problems
                .iter()
                .map(|problem| calculate(index.entries(&problem.key()), &contest.window))
                .collect();
            let solved = problem_results.iter().filter(|r| r.is_solved()).count();

            ContestRow {
                contest,
                solved,
                problem_results,
            }
        })
        .collect();

    tracing::debug!(
        contests = contests.len(),
        max_problems,
        "Built contest rows"
    );

    ContestRows {
        max_problems,
        contests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Problem, Submission};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 20, 8, 0, 0).unwrap()
    }

    fn problem(oj_id: i32, pid: &str) -> Problem {
        Problem {
            oj_id,
            pid: pid.to_string(),
        }
    }

    fn contest(id: i32, start: DateTime<Utc>, problems: Vec<Problem>) -> Contest {
        Contest::new(id, format!("Weekly #{id}"), start, 5 * 3600, problems).unwrap()
    }

    fn submission(oj_id: i32, pid: &str, is_accepted: bool, at: DateTime<Utc>) -> Submission {
        Submission {
            username: "alice".to_string(),
            oj_id,
            pid: pid.to_string(),
            is_accepted,
            create_time: at,
        }
    }

    #[test]
    fn test_only_second_problem_solved() {
        let contests = vec![contest(
            1,
            t0(),
            vec![problem(1, "A"), problem(1, "B"), problem(1, "C")],
        )];
        let submissions = vec![
            submission(1, "A", false, t0() + Duration::seconds(20)),
            submission(1, "B", true, t0() + Duration::seconds(55)),
            submission(1, "C", true, t0() - Duration::seconds(600)),
        ];
        let rows = build_contest_rows(contests, &SubmissionIndex::build(&submissions));

        let row = &rows.contests[0];
        assert_eq!(row.solved, 1);
        let times: Vec<i64> = row.problem_results.iter().map(|r| r.accepted_time).collect();
        assert_eq!(times, vec![-1, 55, -1]);
    }

    #[test]
    fn test_max_problems_and_order() {
        let later = t0() + Duration::days(7);
        let contests = vec![
            contest(9, later, vec![problem(2, "1001")]),
            contest(3, t0(), vec![problem(2, "1001"), problem(2, "1002"), problem(3, "X")]),
            contest(5, t0(), vec![]),
        ];
        let submissions = vec![submission(2, "1001", true, later + Duration::seconds(30))];
        let rows = build_contest_rows(contests, &SubmissionIndex::build(&submissions));

        assert_eq!(rows.max_problems, 3);
        let ids: Vec<i32> = rows.contests.iter().map(|r| r.contest.id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
        // The same problem is judged against each contest's own window
        assert_eq!(rows.contests[0].solved, 1);
        assert_eq!(rows.contests[1].solved, 0);
        assert!(rows.contests[2].problem_results.is_empty());
    }

    #[test]
    fn test_solved_matches_results() {
        let contests = vec![
            contest(1, t0(), vec![problem(1, "A"), problem(1, "B")]),
            contest(2, t0(), vec![problem(1, "B"), problem(1, "C")]),
        ];
        let submissions = vec![
            submission(1, "A", true, t0() + Duration::seconds(1)),
            submission(1, "B", true, t0() + Duration::seconds(2)),
        ];
        let rows = build_contest_rows(contests, &SubmissionIndex::build(&submissions));

        for row in &rows.contests {
            assert_eq!(row.problem_results.len(), row.contest.problems.len());
            let solved = row
                .problem_results
                .iter()
                .filter(|r| r.accepted_time != -1)
                .count();
            assert_eq!(row.solved, solved);
        }
    }

    #[test]
    fn test_no_contests() {
        let rows = build_contest_rows(Vec::new(), &SubmissionIndex::default());
        assert_eq!(rows.max_problems, 0);
        assert!(rows.contests.is_empty());
    }
}
