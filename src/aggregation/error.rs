//! Aggregation precondition failures

/// Violations of the invariants the aggregation core relies on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregationError {
    #[error("contest duration must not be negative (got {duration}s)")]
    NegativeDuration { duration: i64 },

    #[error("contest duration of {duration}s runs past the last representable instant")]
    DurationOutOfRange { duration: i64 },
}
