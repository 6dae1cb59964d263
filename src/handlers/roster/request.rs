//! Roster request DTOs

use serde::Deserialize;

/// Roster query parameters
#[derive(Debug, Default, Deserialize)]
pub struct RosterQuery {
    /// Only enabled users when true (default false: everyone)
    pub is_enable: Option<bool>,
}
