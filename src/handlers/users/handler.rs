//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Account,
    services::{StandingsService, UserService},
    state::AppState,
};

use super::{
    request::{
        CreateUserRequest, UpdateAccountRequest, UpdateUserAdminRequest, UpdateUserEnableRequest,
        UpdateUserRequest, UserContestsQuery, UserSubmissionsQuery,
    },
    response::{
        AccountResponse, UserContestsResponse, UserProfileResponse, UserResponse,
        UserSubmissionsResponse,
    },
};

/// Create a user (admin only)
pub async fn add_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    auth_user.require_admin()?;
    payload.validate()?;

    let user = UserService::create_user(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update nickname and contact fields (the user themself or an admin)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_self_or_admin(&payload.username)?;
    payload.validate()?;

    let user = UserService::update_profile(state.db(), payload).await?;
    Ok(Json(user))
}

/// Grant or revoke admin rights (admin only)
pub async fn update_user_admin(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateUserAdminRequest>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_admin()?;

    let user = UserService::set_admin(state.db(), &payload.username, payload.is_admin).await?;
    Ok(Json(user))
}

/// Enable or disable a user (admin only)
pub async fn update_user_enable(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateUserEnableRequest>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_admin()?;

    let user = UserService::set_enable(state.db(), &payload.username, payload.is_enable).await?;
    Ok(Json(user))
}

/// Get a user's profile and awards
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserProfileResponse>> {
    let profile = UserService::get_profile(state.db(), &username).await?;
    Ok(Json(profile))
}

/// List the user's handle on every judge
pub async fn get_user_accounts(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = UserService::list_accounts(state.db(), &username).await?;
    Ok(Json(accounts))
}

/// Set the user's handle on one judge (the user themself or an admin)
pub async fn update_user_account(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(username): Path<String>,
    Json(payload): Json<UpdateAccountRequest>,
) -> AppResult<Json<Account>> {
    auth_user.require_self_or_admin(&username)?;
    payload.validate()?;

    let account = UserService::update_account(state.db(), &username, payload).await?;
    Ok(Json(account))
}

/// Submissions per day between `begin_time` and `end_time`
pub async fn get_user_submissions(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<UserSubmissionsQuery>,
) -> AppResult<Json<UserSubmissionsResponse>> {
    let offset = state.config().club.utc_offset;
    let range = query.day_range(offset)?;

    let activity = UserService::get_activity(state.db(), &username, range, offset).await?;
    Ok(Json(activity))
}

/// Contests of the user with per-problem accepted times
pub async fn get_user_contests(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<UserContestsQuery>,
) -> AppResult<Json<UserContestsResponse>> {
    let range = query.day_range(state.config().club.utc_offset)?;

    let contests =
        StandingsService::get_user_contests(state.db(), &username, range, query.group_filter())
            .await?;
    Ok(Json(contests))
}
