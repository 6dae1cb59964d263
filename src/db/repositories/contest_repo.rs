//! Contest repository

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::{Contest, ContestProblemRecord, ContestRecord, Problem},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Contests assigned to any group the user's teams belong to, starting
    /// within `[begin, end]`, newest first, with problems in authored order.
    ///
    /// `group_id` restricts the result to contests of that group.
    pub async fn find_by_user(
        pool: &PgPool,
        username: &str,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        group_id: Option<i32>,
    ) -> AppResult<Vec<Contest>> {
        let records = sqlx::query_as::<_, ContestRecord>(
            r#"
            SELECT DISTINCT c.contest_id, c.contest_name, c.start_time, c.duration
            FROM contests c
            JOIN contest_group_rel cg ON cg.contest_id = c.contest_id
            JOIN team_group_rel tg ON tg.group_id = cg.group_id
            JOIN team_user_rel tu ON tu.team_id = tg.team_id
            WHERE tu.username = $1
                AND c.start_time BETWEEN $2 AND $3
                AND ($4::int IS NULL OR cg.group_id = $4)
            ORDER BY c.start_time DESC, c.contest_id DESC
            "#,
        )
        .bind(username)
        .bind(begin)
        .bind(end)
        .bind(group_id)
        .fetch_all(pool)
        .await?;

        if records.is_empty() {
            return Ok(Vec::new());
        }

        let contest_ids: Vec<i32> = records.iter().map(|r| r.contest_id).collect();
        let mut problems = Self::find_problems(pool, &contest_ids).await?;

        records
            .into_iter()
            .map(|record| {
                let contest_id = record.contest_id;
                let list = problems.remove(&contest_id).unwrap_or_default();
                Contest::from_record(record, list).map_err(|e| {
                    tracing::error!(contest_id, error = %e, "Rejecting malformed contest");
                    AppError::from(e)
                })
            })
            .collect()
    }

    /// Problem lists keyed by contest, each in `idx` order
    async fn find_problems(
        pool: &PgPool,
        contest_ids: &[i32],
    ) -> AppResult<HashMap<i32, Vec<Problem>>> {
        let rows = sqlx::query_as::<_, ContestProblemRecord>(
            r#"
            SELECT contest_id, idx, oj_id, pid
            FROM contest_problems
            WHERE contest_id = ANY($1)
            ORDER BY contest_id, idx
            "#,
        )
        .bind(contest_ids)
        .fetch_all(pool)
        .await?;

        let mut problems: HashMap<i32, Vec<Problem>> = HashMap::new();
        for row in rows {
            problems.entry(row.contest_id).or_default().push(row.into());
        }

        Ok(problems)
    }
}
