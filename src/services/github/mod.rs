//! GitHub upstream access.
//!
//! [`GitHubService`] is the narrow capability the rest of the crate depends on:
//! one call for a user profile, one call for a single page of repositories.
//! [`GitHubClient`] layers argument validation and pagination on top of it.

mod client;
mod http;
mod in_memory;

pub use client::{GitHubClient, REPOSITORY_PER_PAGE};
pub use http::{
    CONNECT_TIMEOUT, DEFAULT_API_URL, HttpGitHubService, READ_TIMEOUT, USER_AGENT,
};
pub use in_memory::InMemoryGitHubService;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::GitHubUser;

/// One raw page of the repository listing.
///
/// The body is left undecoded so that the pagination driver owns parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Raw response body (expected to be a JSON array)
    pub body: String,
    /// Value of the `link` response header, if any
    pub link: Option<String>,
}

impl RepositoryPage {
    pub fn new(body: impl Into<String>, link: Option<String>) -> Self {
        Self {
            body: body.into(),
            link,
        }
    }

    /// Whether the upstream signalled that another page follows.
    ///
    /// Any non-empty `link` header counts, unless it is a parseable link list
    /// whose relations exclude `next` (GitHub sends `rel="prev"` on the last page).
    pub fn has_next_page(&self) -> bool {
        let Some(link) = self.link.as_deref().map(str::trim) else {
            return false;
        };
        if link.is_empty() {
            return false;
        }

        let rels: Vec<&str> = link
            .split(',')
            .flat_map(|entry| entry.split(';').skip(1))
            .filter_map(|param| {
                let (key, value) = param.split_once('=')?;
                (key.trim().eq_ignore_ascii_case("rel")).then(|| value.trim().trim_matches('"'))
            })
            .collect();

        rels.is_empty()
            || rels
                .iter()
                .flat_map(|r| r.split_whitespace())
                .any(|r| r.eq_ignore_ascii_case("next"))
    }
}

/// Upstream operations against the GitHub REST API.
#[async_trait]
pub trait GitHubService: Send + Sync {
    /// Fetch the profile of `username`.
    async fn fetch_user(&self, username: &str) -> AppResult<GitHubUser>;

    /// Fetch page `page` (1-based) of `username`'s repositories.
    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<RepositoryPage>;
}
