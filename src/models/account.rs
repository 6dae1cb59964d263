//! Online-judge and account models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// External online judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Oj {
    pub oj_id: i32,
    pub oj_name: String,
}

/// A user's handle on one online judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub oj_id: i32,
    pub account: String,
}
