// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The RepositoryRecord type, decoded from the /users/{account}/repos listing
// - Building the listing URL (sort=updated, per_page=100)
// - A reqwest-backed client that fetches the listing once
// - The RepositorySource trait, so the feed can also run against a fake
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Traits: A seam between "where repositories come from" and the feed
// =============================================================================

mod fetch;
mod model;

// Re-export the public API so callers write `github::GithubClient`
pub use fetch::{FetchError, GithubClient, RepositorySource};
pub use model::RepositoryRecord;
