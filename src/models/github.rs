//! GitHub API wire models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GitHub user as returned by `GET /users/{username}`.
///
/// Unknown fields in the upstream payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    /// Username of the user
    pub login: String,
    /// Display name of the user
    pub name: Option<String>,
    /// URL of the user's avatar
    pub avatar_url: Option<String>,
    /// Self-reported location
    pub location: Option<String>,
    /// Public email address
    pub email: Option<String>,
    /// URL of the user's GitHub page
    pub html_url: Option<String>,
    /// Account creation timestamp, e.g. `2011-01-25T18:44:36Z`
    pub created_at: String,
}

/// GitHub repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GitHubRepository {
    /// Repository name
    pub name: String,
    /// Repository URL
    pub url: String,
}

impl GitHubRepository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
