//! Award repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Award};

/// Repository for XCPC award records
pub struct AwardRepository;

impl AwardRepository {
    /// Award lines ordered by event date.
    ///
    /// Team awards are expanded to one line per team member. `username`
    /// narrows the result to a single user.
    pub async fn find(
        pool: &PgPool,
        enabled_only: bool,
        username: Option<&str>,
    ) -> AppResult<Vec<Award>> {
        let awards = sqlx::query_as::<_, Award>(
            r#"
            SELECT u.username, a.medal, a.award, a.xcpc_id
            FROM xcpc_awards a
            JOIN xcpc x ON x.xcpc_id = a.xcpc_id
            JOIN team_user_rel tu ON tu.team_id = a.team_id
            JOIN users u ON u.username = tu.username
            WHERE (NOT $1 OR u.is_enable)
                AND ($2::text IS NULL OR u.username = $2)
            ORDER BY x.xcpc_date, a.award_id, u.username
            "#,
        )
        .bind(enabled_only)
        .bind(username)
        .fetch_all(pool)
        .await?;

        Ok(awards)
    }
}
