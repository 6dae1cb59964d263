//! ClubRoster - competitive programming club roster service
//!
//! Serves the member roster of a university programming club together with
//! each member's contest history, judge accounts and award record.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, fetching and handing data to aggregation
//! - **Aggregation**: Pure folding of submissions and awards into views
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod aggregation;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware as axum_middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router under `/api/v1`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", handlers::routes(state.clone()))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
