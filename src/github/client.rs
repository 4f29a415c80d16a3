//! Thin GitHub REST client covering the two calls the bot makes.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

use crate::config::GithubConfig;
use crate::{AppError, Result};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// Shared HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client from configuration and an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AppError::GitHub` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &GithubConfig, token: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::GitHub(format!("failed to build http client: {err}")))?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetch `GET /repos/{full_name}`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::GitHub` on transport failure, a non-success
    /// status, or a body that is not JSON.
    pub async fn repo_json(&self, full_name: &str) -> Result<serde_json::Value> {
        let url = format!("{}/repos/{full_name}", self.api_url);
        debug!(%url, "fetching repository metadata");
        let response = self.authorized(self.http.get(&url)).send().await?;
        let response = ensure_success(response, &url).await?;
        response
            .json()
            .await
            .map_err(|err| AppError::GitHub(format!("invalid json from {url}: {err}")))
    }

    /// Post a comment on issue `number` of `full_name`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::GitHub` on transport failure or a non-success
    /// status.
    pub async fn post_comment(&self, full_name: &str, number: u64, body: &str) -> Result<()> {
        let url = format!("{}/repos/{full_name}/issues/{number}/comments", self.api_url);
        debug!(%url, "posting issue comment");
        let response = self
            .authorized(self.http.post(&url))
            .json(&CommentBody { body })
            .send()
            .await?;
        ensure_success(response, &url).await?;
        Ok(())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn ensure_success(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::GitHub(format!(
        "{url} returned {status}: {}",
        body.trim()
    )))
}
