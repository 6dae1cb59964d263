//! User response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    aggregation::{ContestRow, ContestRows, MedalTally, ProblemResult},
    models::{Award, Problem, User},
};

/// Basic user fields returned by maintenance endpoints
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub nickname: String,
    pub cf_rating: i32,
    pub is_enable: bool,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            nickname: user.nickname,
            cf_rating: user.cf_rating,
            is_enable: user.is_enable,
            is_admin: user.is_admin,
        }
    }
}

/// User profile with award history
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub username: String,
    pub nickname: String,
    pub cf_rating: i32,
    pub is_enable: bool,
    pub is_admin: bool,
    /// `[gold, silver, bronze]`
    pub medals: MedalTally,
    pub awards: Vec<Award>,
}

/// Judge account entry, one per known judge
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub oj_id: i32,
    pub oj_name: String,
    /// Empty when the user has no handle on this judge
    pub account: String,
}

/// Submissions per day
#[derive(Debug, Serialize)]
pub struct UserSubmissionsResponse {
    pub begin_time: NaiveDate,
    pub end_time: NaiveDate,
    /// One counter per day from `begin_time` to `end_time`
    pub counts: Vec<u32>,
}

/// One contest in the per-user contest view
#[derive(Debug, Serialize)]
pub struct ContestRowResponse {
    pub contest_id: i32,
    pub contest_name: String,
    pub start_time: DateTime<Utc>,
    /// Seconds
    pub duration: i64,
    pub solved: usize,
    pub problems: Vec<Problem>,
    pub problem_results: Vec<ProblemResult>,
}

impl From<ContestRow> for ContestRowResponse {
    fn from(row: ContestRow) -> Self {
        Self {
            contest_id: row.contest.id,
            contest_name: row.contest.name.clone(),
            start_time: row.contest.start_time(),
            duration: row.contest.duration(),
            solved: row.solved,
            problems: row.contest.problems,
            problem_results: row.problem_results,
        }
    }
}

/// Per-user contest view
#[derive(Debug, Serialize)]
pub struct UserContestsResponse {
    /// Widest problem set among `contests`, for padding the display grid
    pub max_problems: usize,
    pub contests: Vec<ContestRowResponse>,
}

impl From<ContestRows> for UserContestsResponse {
    fn from(rows: ContestRows) -> Self {
        Self {
            max_problems: rows.max_problems,
            contests: rows.contests.into_iter().map(Into::into).collect(),
        }
    }
}
