//! Official group models
//!
//! Official groups are the grade cohorts (e.g. "2019", "2020") used to
//! segment the roster. Each user belongs to at most one of them.

use serde::Serialize;
use sqlx::FromRow;

use super::User;

/// `team_groups` row
#[derive(Debug, Clone, FromRow)]
pub struct GroupRecord {
    pub group_id: i32,
    pub group_name: String,
}

/// Member row returned by the official-membership query
#[derive(Debug, Clone, FromRow)]
pub struct GroupMemberRecord {
    pub group_id: i32,
    pub username: String,
    pub nickname: String,
    pub cf_rating: i32,
    pub is_enable: bool,
    pub is_admin: bool,
}

/// Official group with its members populated
#[derive(Debug, Clone, Serialize)]
pub struct OfficialGroup {
    pub group_id: i32,
    pub group_name: String,
    pub users: Vec<User>,
}

impl From<GroupMemberRecord> for User {
    fn from(record: GroupMemberRecord) -> Self {
        Self {
            username: record.username,
            nickname: record.nickname,
            cf_rating: record.cf_rating,
            is_enable: record.is_enable,
            is_admin: record.is_admin,
            ..Self::default()
        }
    }
}
