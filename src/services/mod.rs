//! Business logic services.

pub mod github;
pub mod user_info;
pub mod user_info_cache;

pub use github::{GitHubClient, GitHubService, HttpGitHubService, InMemoryGitHubService};
pub use user_info::UserInfoService;
pub use user_info_cache::UserInfoCache;
