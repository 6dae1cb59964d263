//! Award model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One award line: a user's result at an XCPC event
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Award {
    pub username: String,
    /// 0 none, 1 gold, 2 silver, 3 bronze
    pub medal: i32,
    /// Free-form label such as "Champion", may be empty
    pub award: String,
    pub xcpc_id: i32,
}

/// Medal tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Decode the stored medal code; `0` and unknown codes have no medal
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    /// Slot in a `[gold, silver, bronze]` tally
    pub fn slot(&self) -> usize {
        match self {
            Self::Gold => 0,
            Self::Silver => 1,
            Self::Bronze => 2,
        }
    }
}

