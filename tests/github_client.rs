mod common;

use mockito::Matcher;
use repo_showcase::error::ShowcaseError;
use repo_showcase::github::{parse_repo_listing, GitHubClient, GitHubConfig, RepoSource};
use tokio_test::{assert_err, assert_ok};

fn repos_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("sort".into(), "updated".into()),
        Matcher::UrlEncoded("per_page".into(), "5".into()),
    ])
}

#[tokio::test]
async fn test_github_client_creation() {
    let client = GitHubClient::new(GitHubConfig::default());
    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.config().per_page, 5);
    assert!(client.config().request_timeout.is_none());
}

#[test]
fn test_repos_url_for_plain_username() {
    let client = GitHubClient::new(GitHubConfig::default()).unwrap();
    let url = assert_ok!(client.repos_url("octocat"));
    assert_eq!(
        url.as_str(),
        "https://api.github.com/users/octocat/repos?sort=updated&per_page=5"
    );
}

#[test]
fn test_repos_url_percent_encodes_username() {
    let client = GitHubClient::new(GitHubConfig::default()).unwrap();

    let url = assert_ok!(client.repos_url("john doe/../x?y#z"));
    assert_eq!(
        url.as_str(),
        "https://api.github.com/users/john%20doe%2F..%2Fx%3Fy%23z/repos?sort=updated&per_page=5"
    );
}

#[test]
fn test_repos_url_tolerates_trailing_slash_in_base() {
    let client =
        GitHubClient::new(GitHubConfig::default().with_base_url("http://localhost:9000/")).unwrap();
    let url = assert_ok!(client.repos_url("octocat"));
    assert_eq!(url.as_str(), "http://localhost:9000/users/octocat/repos?sort=updated&per_page=5");
}

#[test]
fn test_repos_url_rejects_invalid_base() {
    let client = GitHubClient::new(GitHubConfig::default().with_base_url("not a url")).unwrap();
    let err = assert_err!(client.repos_url("octocat"));
    assert!(matches!(err, ShowcaseError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_recent_repos() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/repos")
        .match_query(repos_query())
        .match_header("accept", "application/vnd.github.v3+json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name": "Hello-World", "html_url": "https://github.com/octocat/Hello-World",
                 "description": "My first repo", "stargazers_count": 42, "fork": false},
                {"name": "Spoon-Knife", "html_url": "https://github.com/octocat/Spoon-Knife",
                 "description": null, "stargazers_count": 7}
            ]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let repos = assert_ok!(client.fetch_recent_repos("octocat").await);

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "Hello-World");
    assert_eq!(repos[0].description(), Some("My first repo"));
    assert_eq!(repos[0].stargazers_count, 42);
    assert_eq!(repos[1].description, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repository_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/nobody/repos")
        .match_query(repos_query())
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let result = client.fetch_recent_repos("nobody").await;

    match result.unwrap_err() {
        ShowcaseError::RemoteApi(404) => {} // Expected
        other => panic!("Expected RemoteApi(404), got: {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/repos")
        .match_query(repos_query())
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = assert_err!(client.fetch_recent_repos("octocat").await);

    assert_eq!(err.status(), Some(503));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/octocat/repos")
        .match_query(repos_query())
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let client = common::client_for(&server);
    let err = assert_err!(client.fetch_recent_repos("octocat").await);

    assert!(matches!(err, ShowcaseError::MalformedResponse(_)));
    assert_eq!(err.kind(), "malformed_response");
}

#[test]
fn test_parse_non_array_is_empty_listing() {
    let repos = assert_ok!(parse_repo_listing(r#"{"message": "API rate limit exceeded"}"#));
    assert!(repos.is_empty());

    let repos = assert_ok!(parse_repo_listing("null"));
    assert!(repos.is_empty());
}

#[test]
fn test_parse_empty_array() {
    let repos = assert_ok!(parse_repo_listing("[]"));
    assert!(repos.is_empty());
}

#[test]
fn test_parse_item_missing_required_fields() {
    let err = assert_err!(parse_repo_listing(r#"[{"description": "no name"}]"#));
    assert!(matches!(err, ShowcaseError::MalformedResponse(_)));
}

#[test]
fn test_parse_defaults_missing_star_count() {
    let repos = assert_ok!(parse_repo_listing(
        r#"[{"name": "x", "html_url": "https://github.com/o/x"}]"#
    ));
    assert_eq!(repos[0].stargazers_count, 0);
    assert_eq!(repos[0].description, None);
}
