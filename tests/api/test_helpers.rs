//! Shared helpers for API tests.

use std::sync::Arc;

use actix_web::{App, dev::ServiceResponse, test, web};
use github_data_integration::api;
use github_data_integration::models::GitHubUser;
use github_data_integration::services::{
    GitHubClient, InMemoryGitHubService, UserInfoCache, UserInfoService,
};
use serde_json::Value;

/// Repository page 1 for octocat (continues to page 2).
pub const OCTOCAT_PAGE_1: &str = r#"[
    {"name": "boysenberry-repo-1", "url": "https://github.com/octocat/boysenberry-repo-1"},
    {"name": "git-consortium", "url": "https://github.com/octocat/git-consortium", "fork": true}
]"#;

/// Repository page 2 for octocat (last page).
pub const OCTOCAT_PAGE_2: &str =
    r#"[{"name": "hello-worId", "url": "https://github.com/octocat/hello-worId"}]"#;

pub fn octocat() -> GitHubUser {
    GitHubUser {
        login: "octocat".to_string(),
        name: Some("The Octocat".to_string()),
        avatar_url: Some("https://avatars.githubusercontent.com/u/583231?v=4".to_string()),
        location: Some("San Fransisco".to_string()),
        email: Some("octocat@gh.com".to_string()),
        html_url: Some("https://github.com/octocat".to_string()),
        created_at: "2011-01-25T18:44:36Z".to_string(),
    }
}

/// Upstream double knowing only octocat.
pub fn octocat_upstream() -> InMemoryGitHubService {
    InMemoryGitHubService::new()
        .with_user(octocat())
        .with_repository_pages("octocat", [OCTOCAT_PAGE_1, OCTOCAT_PAGE_2])
}

/// Create a test app backed by `upstream` and a fresh cache.
pub async fn create_test_app(
    upstream: Arc<InMemoryGitHubService>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let service = UserInfoService::new(GitHubClient::new(upstream), UserInfoCache::new());

    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(api::configure_health_routes)
            .configure(api::configure_user_info_routes),
    )
    .await
}

/// GET `uri` and return the status code with the JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
