//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod account_repo;
pub mod award_repo;
pub mod contest_repo;
pub mod group_repo;
pub mod submission_repo;
pub mod user_repo;

pub use account_repo::AccountRepository;
pub use award_repo::AwardRepository;
pub use contest_repo::ContestRepository;
pub use group_repo::GroupRepository;
pub use submission_repo::SubmissionRepository;
pub use user_repo::UserRepository;
