//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Path segments under `/user` that cannot be used as usernames
pub const RESERVED_USERNAMES: &[&str] = &["add", "upd", "upd_admin", "upd_enable"];

/// Nickname maximum length
pub const MAX_NICKNAME_LENGTH: u64 = 64;

/// Maximum length of free-form contact fields (phone, qq, id card, t-shirt)
pub const MAX_CONTACT_FIELD_LENGTH: u64 = 32;

/// Maximum length of an online-judge account handle
pub const MAX_ACCOUNT_LENGTH: u64 = 64;

// =============================================================================
// DATE RANGE DEFAULTS
// =============================================================================

/// Date format accepted by `begin_time` / `end_time` query parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lower bound used when a contest query omits `begin_time`
pub const DEFAULT_BEGIN_DATE: &str = "2000-01-01";

/// Upper bound used when a contest query omits `end_time`
pub const DEFAULT_END_DATE: &str = "2100-01-01";

/// Earliest year accepted in a date query parameter
pub const MIN_QUERY_YEAR: i32 = 1970;

/// Latest year accepted in a date query parameter
pub const MAX_QUERY_YEAR: i32 = 9999;

/// Longest range, in days, the daily activity view will count
pub const MAX_ACTIVITY_DAYS: i64 = 3660;

/// Default offset (seconds east of UTC) in which calendar days are interpreted
pub const DEFAULT_UTC_OFFSET_SECONDS: i32 = 0;

// =============================================================================
// CONTEST RESULTS
// =============================================================================

/// Accepted-time sentinel for a problem not solved inside the contest window
pub const NOT_SOLVED: i64 = -1;

/// Number of medal tiers tracked per user (gold, silver, bronze)
pub const MEDAL_TIERS: usize = 3;
