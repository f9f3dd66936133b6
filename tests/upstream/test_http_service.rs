//! `HttpGitHubService` wire behaviour.

use std::sync::Arc;

use github_data_integration::error::AppError;
use github_data_integration::models::GitHubRepository;
use github_data_integration::services::github::{
    GitHubClient, GitHubService, HttpGitHubService, USER_AGENT,
};

use super::mock_github::{CannedResponse, MockGitHub};

const OCTOCAT: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "name": "The Octocat",
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "location": "San Francisco",
    "email": null,
    "html_url": "https://github.com/octocat",
    "created_at": "2011-01-25T18:44:36Z",
    "public_repos": 3
}"#;

fn repo(name: &str) -> GitHubRepository {
    GitHubRepository::new(name, format!("https://github.com/octocat/{}", name))
}

fn page_body(names: &[&str]) -> String {
    let entries: Vec<_> = names
        .iter()
        .map(|n| serde_json::json!({"name": n, "url": format!("https://github.com/octocat/{}", n), "private": false}))
        .collect();
    serde_json::Value::Array(entries).to_string()
}

#[actix_rt::test]
async fn test_fetch_user_decodes_profile() {
    let mock = MockGitHub::start().await;
    mock.respond("/users/octocat", CannedResponse::ok(OCTOCAT));
    let service = HttpGitHubService::new(&mock.base_url).unwrap();

    let user = service.fetch_user("octocat").await.unwrap();

    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.email, None);
    assert_eq!(user.created_at, "2011-01-25T18:44:36Z");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user_agent.as_deref(), Some(USER_AGENT));
}

#[actix_rt::test]
async fn test_fetch_user_not_found_keeps_status_and_body() {
    let mock = MockGitHub::start().await;
    let service = HttpGitHubService::new(&mock.base_url).unwrap();

    match service.fetch_user("ghost-user").await {
        Err(AppError::UpstreamCall { status_code, body }) => {
            assert_eq!(status_code, 404);
            assert_eq!(body, r#"{"message":"Not Found"}"#);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[actix_rt::test]
async fn test_fetch_user_server_error() {
    let mock = MockGitHub::start().await;
    mock.respond(
        "/users/octocat",
        CannedResponse::status(500, "Request failed"),
    );
    let service = HttpGitHubService::new(&mock.base_url).unwrap();

    let err = service.fetch_user("octocat").await.unwrap_err();

    assert_eq!(err.status_code(), 500);
    assert!(matches!(err, AppError::UpstreamCall { ref body, .. } if body == "Request failed"));
}

#[actix_rt::test]
async fn test_transport_failure_is_upstream_500() {
    // Bind then drop to get a port nobody listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let service = HttpGitHubService::new(&format!("http://127.0.0.1:{}", port)).unwrap();

    let err = service.fetch_user("octocat").await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamCall { status_code: 500, .. }));
}

#[actix_rt::test]
async fn test_repository_page_request_and_link_header() {
    let mock = MockGitHub::start().await;
    mock.respond(
        "/users/octocat/repos?page=1",
        CannedResponse::ok(&page_body(&["a", "b"])).with_link("<nextPageLink/>"),
    );
    let service = HttpGitHubService::new(&format!("{}/", mock.base_url)).unwrap();

    let page = service.fetch_repository_page("octocat", 1, 100).await.unwrap();

    assert!(page.has_next_page());
    assert_eq!(page.link.as_deref(), Some("<nextPageLink/>"));

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/users/octocat/repos");
    assert_eq!(requests[0].query, "page=1&per_page=100");
}

#[actix_rt::test]
async fn test_client_paginates_over_http() {
    let mock = MockGitHub::start().await;
    mock.respond(
        "/users/octocat/repos?page=1",
        CannedResponse::ok(&page_body(&["repo-1", "repo-2"])).with_link(&format!(
            r#"<{}/users/octocat/repos?page=2&per_page=100>; rel="next""#,
            mock.base_url
        )),
    );
    mock.respond(
        "/users/octocat/repos?page=2",
        CannedResponse::ok(&page_body(&["repo-3"])).with_link(&format!(
            r#"<{}/users/octocat/repos?page=1&per_page=100>; rel="prev""#,
            mock.base_url
        )),
    );
    let client = GitHubClient::new(Arc::new(HttpGitHubService::new(&mock.base_url).unwrap()));

    let repos = client.fetch_user_repositories("octocat").await.unwrap();

    assert_eq!(repos, vec![repo("repo-1"), repo("repo-2"), repo("repo-3")]);
    assert_eq!(mock.requests().len(), 2);
}

#[actix_rt::test]
async fn test_client_zero_repositories() {
    let mock = MockGitHub::start().await;
    mock.respond("/users/octocat/repos?page=1", CannedResponse::ok("[]"));
    let client = GitHubClient::new(Arc::new(HttpGitHubService::new(&mock.base_url).unwrap()));

    let repos = client.fetch_user_repositories("octocat").await.unwrap();

    assert!(repos.is_empty());
}

#[actix_rt::test]
async fn test_client_malformed_page_is_parse_error() {
    let mock = MockGitHub::start().await;
    mock.respond(
        "/users/octocat/repos?page=1",
        CannedResponse::ok("This will fail to parse"),
    );
    let client = GitHubClient::new(Arc::new(HttpGitHubService::new(&mock.base_url).unwrap()));

    let err = client.fetch_user_repositories("octocat").await.unwrap_err();

    assert!(matches!(err, AppError::ResponseParse { .. }));
    assert_eq!(err.status_code(), 500);
}

#[actix_rt::test]
async fn test_client_page_failure_aborts() {
    let mock = MockGitHub::start().await;
    mock.respond(
        "/users/octocat/repos?page=1",
        CannedResponse::ok(&page_body(&["repo-1"])).with_link("<more/>"),
    );
    mock.respond(
        "/users/octocat/repos?page=2",
        CannedResponse::status(502, "Bad Gateway"),
    );
    let client = GitHubClient::new(Arc::new(HttpGitHubService::new(&mock.base_url).unwrap()));

    let err = client.fetch_user_repositories("octocat").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::UpstreamCall { status_code: 502, ref body } if body == "Bad Gateway"
    ));
}

#[actix_rt::test]
async fn test_username_is_percent_encoded() {
    let mock = MockGitHub::start().await;
    let service = HttpGitHubService::new(&mock.base_url).unwrap();

    let _ = service.fetch_user("a b/c").await;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/users/a%20b%2Fc");
}
