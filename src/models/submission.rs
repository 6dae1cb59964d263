//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifies a problem across judges: `(oj_id, pid)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemKey {
    pub oj_id: i32,
    pub pid: String,
}

impl ProblemKey {
    pub fn new(oj_id: i32, pid: impl Into<String>) -> Self {
        Self {
            oj_id,
            pid: pid.into(),
        }
    }
}

/// Submission crawled from an external online judge
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub username: String,
    pub oj_id: i32,
    pub pid: String,
    pub is_accepted: bool,
    pub create_time: DateTime<Utc>,
}

impl Submission {
    /// Problem this submission was made against
    pub fn key(&self) -> ProblemKey {
        ProblemKey::new(self.oj_id, self.pid.as_str())
    }
}
