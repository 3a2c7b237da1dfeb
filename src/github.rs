use crate::error::{Result, ShowcaseError};
use crate::types::GitHubRepo;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 5;
const USER_AGENT: &str = "Repo Showcase/0.1.0";

/// GitHub client configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base_url: String,
    pub user_agent: String,
    /// Repositories requested per load
    pub per_page: u32,
    /// None leaves requests unbounded
    pub request_timeout: Option<Duration>,
}

impl GitHubConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            per_page: PER_PAGE,
            request_timeout: None,
        }
    }
}

/// Anything that can list a user's recently updated repositories
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>>;
}

pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(GitHubClient { client: builder.build()?, config })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// Endpoint for a user's most recently updated repositories
    pub fn repos_url(&self, username: &str) -> Result<Url> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.config.api_base_url.trim_end_matches('/'),
            urlencoding::encode(username),
            self.config.per_page
        );
        Ok(Url::parse(&url)?)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = self.repos_url(username)?;
        debug!(%url, "GitHub API request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShowcaseError::RemoteApi(status.as_u16()));
        }

        let body = response.text().await?;
        parse_repo_listing(&body)
    }
}

/// Decode a repository listing body.
///
/// A well-formed JSON value that is not an array yields an empty listing.
pub fn parse_repo_listing(body: &str) -> Result<Vec<GitHubRepo>> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(items) => {
            let repos = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<GitHubRepo>, _>>()?;
            Ok(repos)
        }
        other => {
            warn!(kind = json_kind(&other), "Repository listing is not an array");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
