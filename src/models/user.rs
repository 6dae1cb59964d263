//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub nickname: String,
    pub cf_rating: i32,
    pub is_enable: bool,
    pub is_admin: bool,
    #[serde(skip_serializing)]
    pub id_card: String,
    #[serde(skip_serializing)]
    pub phone: String,
    #[serde(skip_serializing)]
    pub qq: String,
    pub t_shirt: String,
}
