//! reqwest-backed [`GitHubService`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LINK;
use tracing::{debug, warn};

use super::{GitHubService, RepositoryPage};
use crate::error::{AppError, AppResult};
use crate::models::GitHubUser;

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// User agent sent on every upstream request.
pub const USER_AGENT: &str = "GitHubDataIntegration";
/// HTTP connect timeout for GitHub API calls.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
/// HTTP read timeout for GitHub API calls.
pub const READ_TIMEOUT: Duration = Duration::from_secs(120);

/// GitHub service talking to a real HTTP endpoint.
#[derive(Clone)]
pub struct HttpGitHubService {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpGitHubService {
    /// Create a service rooted at `base_url` (e.g. [`DEFAULT_API_URL`]).
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        // reqwest does not cap connections per host, so no pool limit is set
        let http_client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(username))
    }

    /// Send a GET and turn non-2xx responses into [`AppError::UpstreamCall`].
    async fn get(&self, url: &str) -> AppResult<reqwest::Response> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!("GitHub request to {} failed: {}", url, e);
                AppError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("GitHub request to {} returned {}", url, status.as_u16());
        Err(AppError::UpstreamCall {
            status_code: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl GitHubService for HttpGitHubService {
    async fn fetch_user(&self, username: &str) -> AppResult<GitHubUser> {
        let url = self.user_url(username);
        debug!("Fetching GitHub user from {}", url);

        let bytes = self.get(&url).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<RepositoryPage> {
        let url = format!(
            "{}/repos?page={}&per_page={}",
            self.user_url(username),
            page,
            per_page
        );
        debug!("Fetching GitHub repositories from {}", url);

        let response = self.get(&url).await?;
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(RepositoryPage { body, link })
    }
}
