//! Club roster handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Roster routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::list_roster))
}
