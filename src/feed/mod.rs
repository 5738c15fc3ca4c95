// src/feed/mod.rs
// =============================================================================
// This module holds the repository feed.
//
// Submodules:
// - derive: filter + sort the raw listing into display order
// - state:  RepositoryFeed, which owns the records and the current page
// =============================================================================

mod derive;
mod state;

pub use state::{spawn_load, LoadStatus, RepositoryFeed};
