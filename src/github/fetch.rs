// src/github/fetch.rs
// =============================================================================
// This module fetches an account's public repositories from the GitHub API.
//
// Strategy:
// - Build https://api.github.com/users/{account}/repos?sort=updated&per_page=100
// - Send exactly one GET request (no retries, no pagination past 100)
// - Decode the JSON array into RepositoryRecord values
//
// Any failure along the way (connection, non-2xx status, bad JSON) becomes a
// FetchError. The feed turns every FetchError into LoadStatus::Failed.
//
// Rust concepts:
// - async functions: For network I/O
// - thiserror: For a typed error enum with Display for free
// - async_trait: async fn inside a trait
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::model::RepositoryRecord;

// GitHub caps a single listing page at 100 entries
pub const PER_PAGE: u32 = 100;

// GitHub rejects API requests that carry no User-Agent header
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong while loading the listing
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered, but not with a 2xx
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The body was not a JSON array of repositories
    #[error("could not decode repository listing: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base cannot have path segments (e.g. "mailto:")
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

// Where repositories come from
//
// The real implementation is GithubClient; tests swap in an in-memory list.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, FetchError>;
}

// Builds the listing URL for an account
//
// Example:
//   ("https://api.github.com", "octo")
//     -> "https://api.github.com/users/octo/repos?sort=updated&per_page=100"
pub fn listing_url(api_base: &Url, account: &str) -> Result<Url, FetchError> {
    let mut url = api_base.clone();

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidEndpoint(api_base.to_string()))?
        .pop_if_empty()
        .extend(["users", account, "repos"]);

    url.query_pairs_mut()
        .clear()
        .append_pair("sort", "updated")
        .append_pair("per_page", &PER_PAGE.to_string());

    Ok(url)
}

// HTTP client for one account's listing
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    endpoint: Url,
}

impl GithubClient {
    pub fn new(api_base: &Url, account: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: listing_url(api_base, account)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, FetchError> {
        tracing::debug!(url = %self.endpoint, "requesting repository listing");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.endpoint.to_string(),
                status,
            });
        }

        // Read the body as text first so a malformed payload shows up as
        // Decode rather than as a transport error
        let body = response.text().await?;
        let records: Vec<RepositoryRecord> = serde_json::from_str(&body)?;

        tracing::debug!(count = records.len(), "repository listing decoded");
        Ok(records)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[from] do in a thiserror enum?
//    - It generates `impl From<reqwest::Error> for FetchError`
//    - That is what lets `.send().await?` turn a reqwest error into
//      FetchError::Transport automatically
//
// 2. Why path_segments_mut() instead of format!()?
//    - It percent-encodes the account name for us
//    - It also works when the API base has a path (GitHub Enterprise uses
//      https://host/api/v3)
//
// 3. Why is the trait marked Send + Sync?
//    - The fetch runs inside tokio::spawn, which may move it to another
//      thread, so the source must be safe to share across threads
// -----------------------------------------------------------------------------
