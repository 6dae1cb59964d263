//! Utility functions

pub mod time;
pub mod validation;

pub use time::{parse_date, DayRange};
pub use validation::validate_username;
