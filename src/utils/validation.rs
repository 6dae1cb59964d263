//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::RESERVED_USERNAMES;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_\-]*$").expect("username pattern is valid")
});

/// Usernames start with a letter and contain only letters, digits, `_` and `-`.
/// Names that collide with `/user` routes are reserved.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_PATTERN.is_match(username) {
        return Err(ValidationError::new("username_format"));
    }
    if RESERVED_USERNAMES.contains(&username) {
        return Err(ValidationError::new("username_reserved"));
    }
    Ok(())
}
