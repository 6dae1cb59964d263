//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::aggregation::{AggregationError, ContestWindow};

use super::ProblemKey;

/// Contest database row
#[derive(Debug, Clone, FromRow)]
pub struct ContestRecord {
    pub contest_id: i32,
    pub contest_name: String,
    pub start_time: DateTime<Utc>,
    /// Length in seconds
    pub duration: i64,
}

/// Contest problem row, `idx` gives the authored display order
#[derive(Debug, Clone, FromRow)]
pub struct ContestProblemRecord {
    pub contest_id: i32,
    pub idx: i32,
    pub oj_id: i32,
    pub pid: String,
}

/// Problem as displayed in a contest grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub oj_id: i32,
    pub pid: String,
}

impl Problem {
    pub fn key(&self) -> ProblemKey {
        ProblemKey::new(self.oj_id, self.pid.as_str())
    }
}

impl From<ContestProblemRecord> for Problem {
    fn from(record: ContestProblemRecord) -> Self {
        Self {
            oj_id: record.oj_id,
            pid: record.pid,
        }
    }
}

/// Contest with its problem list, ready for aggregation
#[derive(Debug, Clone)]
pub struct Contest {
    pub id: i32,
    pub name: String,
    pub window: ContestWindow,
    /// Problems in authored order
    pub problems: Vec<Problem>,
}

impl Contest {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        duration: i64,
        problems: Vec<Problem>,
    ) -> Result<Self, AggregationError> {
        Ok(Self {
            id,
            name: name.into(),
            window: ContestWindow::new(start_time, duration)?,
            problems,
        })
    }

    pub fn from_record(
        record: ContestRecord,
        problems: Vec<Problem>,
    ) -> Result<Self, AggregationError> {
        Self::new(
            record.contest_id,
            record.contest_name,
            record.start_time,
            record.duration,
            problems,
        )
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.window.start()
    }

    pub fn duration(&self) -> i64 {
        self.window.duration_seconds()
    }
}
