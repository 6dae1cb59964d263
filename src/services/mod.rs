//! Business logic services

pub mod auth_service;
pub mod standings_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use standings_service::StandingsService;
pub use user_service::UserService;
