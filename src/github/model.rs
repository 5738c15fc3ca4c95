// src/github/model.rs
// =============================================================================
// The shape of one repository as returned by the GitHub listing endpoint.
//
// GitHub sends a lot more fields than we need (owner, clone URLs, licence...).
// serde ignores unknown fields by default, so we only declare what the feed
// and the cards actually use.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

// A single repository from the listing
//
// The serde renames keep the GitHub field names on the wire while the Rust
// side gets names that say what the field means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Unique numeric id assigned by GitHub
    pub id: u64,
    pub name: String,
    /// Repositories without a description send `null`
    pub description: Option<String>,
    /// Link to the repository page
    #[serde(rename = "html_url")]
    pub link: Url,
    #[serde(rename = "stargazers_count")]
    pub star_count: u32,
    #[serde(rename = "forks_count")]
    pub fork_count: u32,
    /// Primary language, `null` for repos GitHub could not classify
    #[serde(rename = "language")]
    pub primary_language: Option<String>,
    #[serde(rename = "updated_at")]
    pub last_updated: DateTime<Utc>,
    /// Older API versions omit topics entirely
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}
