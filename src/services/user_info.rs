//! Read-through aggregation of GitHub user profiles and repositories.

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::UserInfo;
use crate::services::github::GitHubClient;
use crate::services::user_info_cache::UserInfoCache;

/// Serves [`UserInfo`] from the cache, computing and storing it on a miss.
///
/// Concurrent first-time lookups for the same username are not coalesced;
/// each computes the aggregate and the last write wins.
#[derive(Clone)]
pub struct UserInfoService {
    client: GitHubClient,
    cache: UserInfoCache,
}

impl UserInfoService {
    pub fn new(client: GitHubClient, cache: UserInfoCache) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &UserInfoCache {
        &self.cache
    }

    /// Get the merged profile and repositories of `username`.
    ///
    /// Errors from the upstream are returned unchanged and nothing is cached,
    /// so the next call retries from scratch.
    pub async fn get_user_info(&self, username: &str) -> AppResult<UserInfo> {
        if let Some(cached) = self.cache.get(username) {
            debug!("User info cache hit for '{}'", username);
            return Ok(cached);
        }

        let user = self
            .client
            .fetch_user_by_username(username)
            .await
            .inspect_err(|e| warn!("Failed to fetch GitHub user '{}': {}", username, e))?;
        let repos = self
            .client
            .fetch_user_repositories(username)
            .await
            .inspect_err(|e| {
                warn!(
                    "Failed to fetch repositories of GitHub user '{}': {}",
                    username, e
                )
            })?;

        let user_info = UserInfo::merge(user, repos)?;
        self.cache.insert(username, user_info.clone());
        info!(
            "Cached user info for '{}' ({} repositories)",
            username,
            user_info.repos.len()
        );

        Ok(user_info)
    }
}
