//! User service

use std::collections::HashMap;

use chrono::FixedOffset;
use sqlx::PgPool;

use crate::{
    aggregation::{daily_submission_counts, MedalTally},
    db::repositories::{AccountRepository, AwardRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::users::{
        request::{CreateUserRequest, UpdateAccountRequest, UpdateUserRequest},
        response::{AccountResponse, UserProfileResponse, UserResponse, UserSubmissionsResponse},
    },
    models::{Account, User},
    utils::DayRange,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by username
    pub async fn get_user(pool: &PgPool, username: &str) -> AppResult<User> {
        UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Profile with every award of the user, oldest event first
    pub async fn get_profile(pool: &PgPool, username: &str) -> AppResult<UserProfileResponse> {
        let (user, awards) = futures::try_join!(
            Self::get_user(pool, username),
            AwardRepository::find(pool, false, Some(username)),
        )?;

        let mut medals = MedalTally::default();
        for award in &awards {
            medals.record(award.medal);
        }

        Ok(UserProfileResponse {
            username: user.username,
            nickname: user.nickname,
            cf_rating: user.cf_rating,
            is_enable: user.is_enable,
            is_admin: user.is_admin,
            medals,
            awards,
        })
    }

    /// Create a user and their self-team
    pub async fn create_user(pool: &PgPool, payload: CreateUserRequest) -> AppResult<UserResponse> {
        let user = User {
            username: payload.username,
            nickname: payload.nickname,
            cf_rating: payload.cf_rating,
            is_enable: payload.is_enable,
            is_admin: payload.is_admin,
            id_card: payload.id_card,
            phone: payload.phone,
            qq: payload.qq,
            t_shirt: payload.t_shirt,
        };

        let created = UserRepository::create(pool, &user).await?;
        tracing::info!(username = %created.username, "User created");

        Ok(created.into())
    }

    /// Update nickname and contact fields
    pub async fn update_profile(pool: &PgPool, payload: UpdateUserRequest) -> AppResult<UserResponse> {
        UserRepository::update_profile(
            pool,
            &payload.username,
            &payload.nickname,
            &payload.id_card,
            &payload.phone,
            &payload.qq,
            &payload.t_shirt,
        )
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Grant or revoke admin rights
    pub async fn set_admin(pool: &PgPool, username: &str, is_admin: bool) -> AppResult<UserResponse> {
        let user = UserRepository::set_admin(pool, username, is_admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        tracing::info!(username = %user.username, is_admin, "Admin flag changed");

        Ok(user.into())
    }

    /// Enable or disable a user together with their self-team
    pub async fn set_enable(pool: &PgPool, username: &str, is_enable: bool) -> AppResult<UserResponse> {
        let user = UserRepository::set_enable(pool, username, is_enable)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        tracing::info!(username = %user.username, is_enable, "Enable flag changed");

        Ok(user.into())
    }

    /// One entry per judge with the user's handle, if any
    pub async fn list_accounts(pool: &PgPool, username: &str) -> AppResult<Vec<AccountResponse>> {
        let (_, ojs, accounts) = futures::try_join!(
            Self::get_user(pool, username),
            AccountRepository::list_ojs(pool),
            AccountRepository::find_by_username(pool, username),
        )?;

        let mut handles: HashMap<i32, String> = accounts
            .into_iter()
            .map(|account| (account.oj_id, account.account))
            .collect();

        Ok(ojs
            .into_iter()
            .map(|oj| AccountResponse {
                account: handles.remove(&oj.oj_id).unwrap_or_default(),
                oj_id: oj.oj_id,
                oj_name: oj.oj_name,
            })
            .collect())
    }

    /// Set the user's handle on one judge
    pub async fn update_account(
        pool: &PgPool,
        username: &str,
        payload: UpdateAccountRequest,
    ) -> AppResult<Account> {
        Self::get_user(pool, username).await?;
        AccountRepository::upsert(pool, username, payload.oj_id, &payload.account).await
    }

    /// Submission counts per day over `range`
    pub async fn get_activity(
        pool: &PgPool,
        username: &str,
        range: DayRange,
        offset: FixedOffset,
    ) -> AppResult<UserSubmissionsResponse> {
        let submissions =
            SubmissionRepository::find_by_username(pool, username, range.begin, range.end).await?;
        let counts =
            daily_submission_counts(&submissions, range.first_day, range.last_day, offset);

        Ok(UserSubmissionsResponse {
            begin_time: range.first_day,
            end_time: range.last_day,
            counts,
        })
    }
}
