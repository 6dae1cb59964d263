//! Standings service: per-user contest view and the club roster

use sqlx::PgPool;

use crate::{
    aggregation::{aggregate_roster, build_contest_rows, ContestRows, RosterGroup, SubmissionIndex},
    db::repositories::{AwardRepository, ContestRepository, GroupRepository, SubmissionRepository},
    error::AppResult,
    handlers::users::response::UserContestsResponse,
    utils::DayRange,
};

/// Service assembling leaderboard views from repository snapshots
pub struct StandingsService;

impl StandingsService {
    /// Contests of `username` starting within `range`, each with per-problem results
    pub async fn get_user_contests(
        pool: &PgPool,
        username: &str,
        range: DayRange,
        group_id: Option<i32>,
    ) -> AppResult<UserContestsResponse> {
        let contests =
            ContestRepository::find_by_user(pool, username, range.begin, range.end, group_id)
                .await?;

        // Only submissions that can fall inside one of the windows matter
        let span = contests.iter().fold(None, |span, contest| {
            let (start, end) = (contest.window.start(), contest.window.end());
            match span {
                None => Some((start, end)),
                Some((lo, hi)) => Some((start.min(lo), end.max(hi))),
            }
        });
        let Some((first_start, last_end)) = span else {
            return Ok(ContestRows::default().into());
        };

        let submissions =
            SubmissionRepository::find_by_username(pool, username, first_start, last_end).await?;
        let index = SubmissionIndex::build(&submissions);

        tracing::debug!(
            username,
            contests = contests.len(),
            submissions = submissions.len(),
            problems = index.problem_count(),
            "Building contest view"
        );

        Ok(build_contest_rows(contests, &index).into())
    }

    /// Official groups with medal and award tallies
    pub async fn get_roster(pool: &PgPool, enabled_only: bool) -> AppResult<Vec<RosterGroup>> {
        let (groups, awards) = futures::try_join!(
            GroupRepository::find_official_with_members(pool, enabled_only),
            AwardRepository::find(pool, enabled_only, None),
        )?;

        Ok(aggregate_roster(groups, &awards))
    }
}
