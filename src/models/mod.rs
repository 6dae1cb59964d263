//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod account;
pub mod award;
pub mod contest;
pub mod group;
pub mod submission;
pub mod user;

pub use account::*;
pub use award::*;
pub use contest::*;
pub use group::*;
pub use submission::*;
pub use user::*;
