//! Domain models for GitHub Data Integration.

pub mod github;
pub mod user_info;

// Re-export commonly used types
pub use github::{GitHubRepository, GitHubUser};
pub use user_info::UserInfo;
