//! Contest-submission aggregation
//!
//! Pure, synchronous transformations over request-scoped snapshots fetched
//! by the repositories:
//!
//! - **SubmissionIndex**: groups a user's submission history by problem
//! - **Problem results**: solved/unsolved and accepted time inside a contest window
//! - **Contest rows**: per-contest solved counts for the per-user contest view
//! - **Roster**: group → user listings with medal and award tallies
//!
//! Nothing here performs I/O or holds state between calls. Every keyed
//! aggregation is materialized into an explicitly sorted sequence before it
//! leaves this module.

pub mod activity;
pub mod contest_rows;
pub mod error;
pub mod medals;
pub mod problem_result;
pub mod roster;
pub mod submission_index;
pub mod window;

pub use activity::daily_submission_counts;
pub use contest_rows::{build_contest_rows, ContestRow, ContestRows};
pub use error::AggregationError;
pub use medals::MedalTally;
pub use problem_result::{calculate, ProblemResult};
pub use roster::{aggregate_roster, RosterGroup, RosterUser};
pub use submission_index::{SubmissionEntry, SubmissionIndex};
pub use window::ContestWindow;
