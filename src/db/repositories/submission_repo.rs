//! Submission repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppResult, models::Submission};

/// Repository for crawled judge submissions
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Submissions of `username` created within `[begin, end]`, oldest first
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT username, oj_id, pid, is_accepted, create_time
            FROM submissions
            WHERE username = $1 AND create_time BETWEEN $2 AND $3
            ORDER BY create_time, sid
            "#,
        )
        .bind(username)
        .bind(begin)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
