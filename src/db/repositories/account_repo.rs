//! Online-judge account repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Account, Oj},
};

/// Repository for judges and users' judge handles
pub struct AccountRepository;

impl AccountRepository {
    /// All known judges ordered by id
    pub async fn list_ojs(pool: &PgPool) -> AppResult<Vec<Oj>> {
        let ojs = sqlx::query_as::<_, Oj>(r#"SELECT oj_id, oj_name FROM oj ORDER BY oj_id"#)
            .fetch_all(pool)
            .await?;

        Ok(ojs)
    }

    /// Handles registered by `username`
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"SELECT username, oj_id, account FROM accounts WHERE username = $1"#,
        )
        .bind(username)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }

    /// Insert or replace the handle of `username` on `oj_id`
    pub async fn upsert(
        pool: &PgPool,
        username: &str,
        oj_id: i32,
        account: &str,
    ) -> AppResult<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (username, oj_id, account)
            VALUES ($1, $2, $3)
            ON CONFLICT (username, oj_id) DO UPDATE SET account = EXCLUDED.account
            RETURNING username, oj_id, account
            "#,
        )
        .bind(username)
        .bind(oj_id)
        .bind(account)
        .fetch_one(pool)
        .await?;

        Ok(account)
    }
}
