//! User repository

use sqlx::PgPool;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a user together with their self-team
    pub async fn create(pool: &PgPool, user: &User) -> AppResult<User> {
        let mut tx = pool.begin().await?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                username, nickname, cf_rating, is_enable, is_admin,
                id_card, phone, qq, t_shirt
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.nickname)
        .bind(user.cf_rating)
        .bind(user.is_enable)
        .bind(user.is_admin)
        .bind(&user.id_card)
        .bind(&user.phone)
        .bind(&user.qq)
        .bind(&user.t_shirt)
        .fetch_one(&mut *tx)
        .await?;

        let team_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO teams (team_name, is_enable, is_self)
            VALUES ($1, $2, TRUE)
            RETURNING team_id
            "#,
        )
        .bind(&user.nickname)
        .bind(user.is_enable)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO team_user_rel (team_id, username) VALUES ($1, $2)"#)
            .bind(team_id)
            .bind(&user.username)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update nickname and contact fields, renaming the self-team to match
    pub async fn update_profile(
        pool: &PgPool,
        username: &str,
        nickname: &str,
        id_card: &str,
        phone: &str,
        qq: &str,
        t_shirt: &str,
    ) -> AppResult<Option<User>> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET nickname = $2, id_card = $3, phone = $4, qq = $5, t_shirt = $6
            WHERE username = $1
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(nickname)
        .bind(id_card)
        .bind(phone)
        .bind(qq)
        .bind(t_shirt)
        .fetch_optional(&mut *tx)
        .await?;

        if user.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            UPDATE teams
            SET team_name = $2
            WHERE is_self AND team_id IN (SELECT team_id FROM team_user_rel WHERE username = $1)
            "#,
        )
        .bind(username)
        .bind(nickname)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Grant or revoke admin rights
    pub async fn set_admin(pool: &PgPool, username: &str, is_admin: bool) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users SET is_admin = $2 WHERE username = $1 RETURNING *"#,
        )
        .bind(username)
        .bind(is_admin)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Enable or disable a user and their self-team
    pub async fn set_enable(pool: &PgPool, username: &str, is_enable: bool) -> AppResult<Option<User>> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users SET is_enable = $2 WHERE username = $1 RETURNING *"#,
        )
        .bind(username)
        .bind(is_enable)
        .fetch_optional(&mut *tx)
        .await?;

        if user.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            UPDATE teams
            SET is_enable = $2
            WHERE is_self AND team_id IN (SELECT team_id FROM team_user_rel WHERE username = $1)
            "#,
        )
        .bind(username)
        .bind(is_enable)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }
}
