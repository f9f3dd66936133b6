//! Validating, paginating client over a [`GitHubService`].

use std::sync::Arc;

use tracing::debug;

use super::GitHubService;
use crate::error::{AppError, AppResult};
use crate::models::{GitHubRepository, GitHubUser};

/// Repositories requested per page.
pub const REPOSITORY_PER_PAGE: u32 = 100;

/// Client for the GitHub operations used by the aggregation layer.
///
/// Holds no state beyond the service it delegates to; cheap to clone.
#[derive(Clone)]
pub struct GitHubClient {
    service: Arc<dyn GitHubService>,
}

impl GitHubClient {
    pub fn new(service: Arc<dyn GitHubService>) -> Self {
        Self { service }
    }

    /// Fetch the GitHub user with the given username.
    ///
    /// Any upstream failure, including an unknown user, is returned as
    /// [`AppError::UpstreamCall`] with the upstream status and body.
    pub async fn fetch_user_by_username(&self, username: &str) -> AppResult<GitHubUser> {
        validate_username(username)?;
        self.service.fetch_user(username).await
    }

    /// Fetch every repository of `username`, following pagination until the
    /// upstream stops sending a continuation link.
    ///
    /// Entries keep upstream order across pages. A failure on any page discards
    /// what was collected so far.
    pub async fn fetch_user_repositories(
        &self,
        username: &str,
    ) -> AppResult<Vec<GitHubRepository>> {
        validate_username(username)?;

        let mut repos = Vec::new();
        let mut page_number = 1u32;
        loop {
            let page = self
                .service
                .fetch_repository_page(username, page_number, REPOSITORY_PER_PAGE)
                .await?;

            let entries: Vec<GitHubRepository> =
                serde_json::from_str(&page.body).map_err(|e| AppError::ResponseParse {
                    message: format!("Failed to parse repository response: {}", e),
                })?;
            debug!(
                "Fetched {} repositories for {} (page {})",
                entries.len(),
                username,
                page_number
            );
            repos.extend(entries);

            if !page.has_next_page() {
                break;
            }
            page_number += 1;
        }

        Ok(repos)
    }
}

fn validate_username(username: &str) -> AppResult<()> {
    if username.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "username must not be empty".to_string(),
        ));
    }
    Ok(())
}
