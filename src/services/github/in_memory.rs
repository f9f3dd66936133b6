//! In-memory [`GitHubService`] for tests and local runs without network access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{GitHubService, RepositoryPage};
use crate::error::{AppError, AppResult};
use crate::models::GitHubUser;

/// Canned upstream responses keyed by username.
///
/// Repository pages are stored raw; every page except the last carries a
/// continuation link. Unknown users answer like GitHub does, with a 404.
#[derive(Default)]
pub struct InMemoryGitHubService {
    users: Mutex<HashMap<String, AppResult<GitHubUser>>>,
    pages: Mutex<HashMap<String, Vec<RepositoryPage>>>,
    page_failures: Mutex<HashMap<(String, u32), AppError>>,
    user_calls: AtomicUsize,
    page_calls: AtomicUsize,
}

impl InMemoryGitHubService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user profile.
    pub fn with_user(self, user: GitHubUser) -> Self {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.login.clone(), Ok(user));
        self
    }

    /// Make the profile fetch for `username` fail with `error`.
    pub fn with_user_error(self, username: &str, error: AppError) -> Self {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(username.to_string(), Err(error));
        self
    }

    /// Register raw repository page bodies, in page order.
    pub fn with_repository_pages<I, S>(self, username: &str, bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bodies: Vec<String> = bodies.into_iter().map(Into::into).collect();
        let last = bodies.len().saturating_sub(1);
        let pages = bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| {
                let link = (i < last).then(|| format!("<{}/repos?page={}>", username, i + 2));
                RepositoryPage::new(body, link)
            })
            .collect();

        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(username.to_string(), pages);
        self
    }

    /// Make repository page `page` for `username` fail with `error`.
    pub fn with_page_error(self, username: &str, page: u32, error: AppError) -> Self {
        self.page_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((username.to_string(), page), error);
        self
    }

    /// Number of `fetch_user` calls received.
    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_repository_page` calls received.
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }
}

fn not_found() -> AppError {
    AppError::UpstreamCall {
        status_code: 404,
        body: r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#
            .to_string(),
    }
}

/// `AppError` is not `Clone`; rebuild an equivalent value for each call.
fn replay(error: &AppError) -> AppError {
    match error {
        AppError::InvalidArgument(msg) => AppError::InvalidArgument(msg.clone()),
        AppError::UpstreamCall { status_code, body } => AppError::UpstreamCall {
            status_code: *status_code,
            body: body.clone(),
        },
        AppError::ResponseParse { message } => AppError::ResponseParse {
            message: message.clone(),
        },
        AppError::Internal(msg) => AppError::Internal(msg.clone()),
    }
}

#[async_trait]
impl GitHubService for InMemoryGitHubService {
    async fn fetch_user(&self, username: &str) -> AppResult<GitHubUser> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);

        let users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        match users.get(username) {
            Some(Ok(user)) => Ok(user.clone()),
            Some(Err(e)) => Err(replay(e)),
            None => Err(not_found()),
        }
    }

    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        _per_page: u32,
    ) -> AppResult<RepositoryPage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(e) = self
            .page_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(username.to_string(), page))
        {
            return Err(replay(e));
        }

        let pages = self.pages.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(user_pages) = pages.get(username) else {
            return Err(not_found());
        };

        // Past the end GitHub answers with an empty array and no link
        let index = page.saturating_sub(1) as usize;
        Ok(user_pages
            .get(index)
            .cloned()
            .unwrap_or_else(|| RepositoryPage::new("[]", None)))
    }
}
