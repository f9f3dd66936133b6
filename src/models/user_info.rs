//! Merged user info returned by `GET /userInfo/{username}`.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::github::{GitHubRepository, GitHubUser};

/// Timestamp format used by GitHub (`yyyy-MM-dd'T'HH:mm:ssX`).
const GITHUB_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%#z";

/// Timestamp format exposed on [`UserInfo`].
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A GitHub user together with their repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    /// Username of the user
    pub user_name: String,
    /// Display name of the user
    pub display_name: Option<String>,
    /// URL of the user's avatar
    pub avatar: Option<String>,
    /// Self-reported location of the user
    pub geo_location: Option<String>,
    /// Email address of the user
    pub email: Option<String>,
    /// URL of the user's GitHub page
    pub url: Option<String>,
    /// Account creation time, formatted `yyyy-MM-dd HH:mm:ss`
    #[schema(example = "2011-01-25 18:44:36")]
    pub created_at: String,
    /// Repositories in upstream page order
    pub repos: Vec<GitHubRepository>,
}

impl UserInfo {
    /// Merge a GitHub user and their repositories.
    ///
    /// Fails with [`AppError::Internal`] if `created_at` is not in the GitHub format.
    pub fn merge(user: GitHubUser, repos: Vec<GitHubRepository>) -> AppResult<Self> {
        let created_at = convert_timestamp(&user.created_at)?;

        Ok(Self {
            user_name: user.login,
            display_name: user.name,
            avatar: user.avatar_url,
            geo_location: user.location,
            email: user.email,
            url: user.html_url,
            created_at,
            repos,
        })
    }
}

/// Convert a GitHub timestamp into the output format.
///
/// The wall-clock fields are kept as written; the offset is dropped, not applied.
pub fn convert_timestamp(timestamp: &str) -> AppResult<String> {
    let parsed = DateTime::parse_from_str(timestamp, GITHUB_TIMESTAMP_FORMAT).map_err(|e| {
        AppError::Internal(format!(
            "Unparseable GitHub timestamp '{}': {}",
            timestamp, e
        ))
    })?;

    Ok(parsed
        .naive_local()
        .format(OUTPUT_TIMESTAMP_FORMAT)
        .to_string())
}
