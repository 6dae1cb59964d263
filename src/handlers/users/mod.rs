//! User handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/add", post(handler::add_user))
        .route("/upd", post(handler::update_user))
        .route("/upd_admin", post(handler::update_user_admin))
        .route("/upd_enable", post(handler::update_user_enable))
        .route("/{username}/accounts/upd", post(handler::update_user_account))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/{username}", get(handler::get_user))
        .route("/{username}/accounts", get(handler::get_user_accounts))
        .route("/{username}/submissions", get(handler::get_user_submissions))
        .route("/{username}/contests", get(handler::get_user_contests))
        .merge(protected)
}
