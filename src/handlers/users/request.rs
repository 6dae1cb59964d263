//! User request DTOs

use chrono::{FixedOffset, NaiveDate};
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        DEFAULT_BEGIN_DATE, DEFAULT_END_DATE, MAX_ACCOUNT_LENGTH, MAX_ACTIVITY_DAYS,
        MAX_CONTACT_FIELD_LENGTH, MAX_NICKNAME_LENGTH, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
    },
    error::{AppError, AppResult},
    utils::{parse_date, validate_username, DayRange},
};

fn default_true() -> bool {
    true
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = MIN_USERNAME_LENGTH, max = MAX_USERNAME_LENGTH),
        custom(function = "validate_username")
    )]
    pub username: String,

    #[validate(length(min = 1, max = MAX_NICKNAME_LENGTH))]
    pub nickname: String,

    #[serde(default)]
    pub cf_rating: i32,

    #[serde(default = "default_true")]
    pub is_enable: bool,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub id_card: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub qq: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub t_shirt: String,
}

/// Update nickname and contact fields
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub username: String,

    #[validate(length(min = 1, max = MAX_NICKNAME_LENGTH))]
    pub nickname: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub id_card: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub qq: String,

    #[serde(default)]
    #[validate(length(max = MAX_CONTACT_FIELD_LENGTH))]
    pub t_shirt: String,
}

/// Grant or revoke admin rights
#[derive(Debug, Deserialize)]
pub struct UpdateUserAdminRequest {
    pub username: String,
    pub is_admin: bool,
}

/// Enable or disable a user
#[derive(Debug, Deserialize)]
pub struct UpdateUserEnableRequest {
    pub username: String,
    pub is_enable: bool,
}

/// Set the user's handle on one judge
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    pub oj_id: i32,

    #[validate(length(max = MAX_ACCOUNT_LENGTH))]
    pub account: String,
}

/// Contest view query parameters
#[derive(Debug, Default, Deserialize)]
pub struct UserContestsQuery {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
    /// 0 or absent means contests of any group
    pub group_id: Option<i32>,
}

impl UserContestsQuery {
    /// Requested days, defaulting to an effectively unbounded range
    pub fn day_range(&self, offset: FixedOffset) -> AppResult<DayRange> {
        let first = parse_day_param(
            "begin_time",
            self.begin_time.as_deref().unwrap_or(DEFAULT_BEGIN_DATE),
        )?;
        let last = parse_day_param(
            "end_time",
            self.end_time.as_deref().unwrap_or(DEFAULT_END_DATE),
        )?;
        day_range(first, last, offset)
    }

    pub fn group_filter(&self) -> Option<i32> {
        self.group_id.filter(|&id| id != 0)
    }
}

/// Daily activity query parameters, both required
#[derive(Debug, Default, Deserialize)]
pub struct UserSubmissionsQuery {
    pub begin_time: Option<String>,
    pub end_time: Option<String>,
}

impl UserSubmissionsQuery {
    pub fn day_range(&self, offset: FixedOffset) -> AppResult<DayRange> {
        let first = parse_day_param("begin_time", required("begin_time", &self.begin_time)?)?;
        let last = parse_day_param("end_time", required("end_time", &self.end_time)?)?;
        let range = day_range(first, last, offset)?;

        if range.days() > MAX_ACTIVITY_DAYS {
            return Err(AppError::InvalidInput(format!(
                "date range must not exceed {MAX_ACTIVITY_DAYS} days"
            )));
        }
        Ok(range)
    }
}

fn required<'a>(name: &str, value: &'a Option<String>) -> AppResult<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput(format!("{name} is required")))
}

fn parse_day_param(name: &str, value: &str) -> AppResult<NaiveDate> {
    parse_date(value)
        .ok_or_else(|| AppError::InvalidInput(format!("{name} must be a YYYY-MM-DD date")))
}

fn day_range(first: NaiveDate, last: NaiveDate, offset: FixedOffset) -> AppResult<DayRange> {
    DayRange::new(first, last, offset)
        .ok_or_else(|| AppError::InvalidInput("end_time is before begin_time".to_string()))
}
