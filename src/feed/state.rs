// src/feed/state.rs
// =============================================================================
// The repository feed: loads the listing once, then pages through it two
// records at a time.
//
// State:
// - records:      display-ordered repositories, written once by complete()
// - window_start: index of the first record on the current page
// - status:       Loading -> Ready, or Loading -> Failed (both final)
//
// window_start is always a multiple of PAGE_SIZE, and is always a valid index
// into records unless records is empty (then it is 0).
// =============================================================================

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use super::derive::derive_display_order;
use crate::github::{FetchError, RepositoryRecord, RepositorySource};

/// Number of repositories shown per page
pub const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
pub struct RepositoryFeed {
    records: Vec<RepositoryRecord>,
    window_start: usize,
    status: LoadStatus,
    limit: Option<usize>,
}

// Runs the one fetch of a feed's lifetime on its own task
//
// The caller keeps the JoinHandle and hands the outcome to
// RepositoryFeed::complete() once it resolves. Dropping or aborting the
// handle discards the result without touching any feed.
pub fn spawn_load(
    source: Arc<dyn RepositorySource>,
) -> JoinHandle<Result<Vec<RepositoryRecord>, FetchError>> {
    tokio::spawn(async move { source.list_repositories().await })
}

impl RepositoryFeed {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            window_start: 0,
            status: LoadStatus::Loading,
            limit,
        }
    }

    /// Fetches the listing from `source` and stores the derived records.
    ///
    /// Only the first call does anything; once the feed is Ready or Failed
    /// further calls are ignored, so at most one request is ever sent.
    pub async fn load<S>(&mut self, source: &S) -> LoadStatus
    where
        S: RepositorySource + ?Sized,
    {
        if self.status != LoadStatus::Loading {
            tracing::warn!(status = ?self.status, "feed already loaded, ignoring load()");
            return self.status;
        }

        let result = source.list_repositories().await;
        self.complete(result)
    }

    /// Writes the outcome of the fetch into the feed.
    ///
    /// Errors are logged and collapse into `LoadStatus::Failed` with no
    /// records. A second outcome after the first is dropped.
    pub fn complete(&mut self, result: Result<Vec<RepositoryRecord>, FetchError>) -> LoadStatus {
        if self.status != LoadStatus::Loading {
            tracing::warn!(status = ?self.status, "feed already settled, discarding fetch result");
            return self.status;
        }

        match result {
            Ok(listing) => {
                let fetched = listing.len();
                self.records = derive_display_order(listing, self.limit);
                self.window_start = 0;
                self.status = LoadStatus::Ready;
                tracing::info!(fetched, shown = self.records.len(), "repository feed ready");
            }
            Err(err) => {
                self.records.clear();
                self.window_start = 0;
                self.status = LoadStatus::Failed;
                tracing::error!(error = %err, "failed to load repositories");
            }
        }

        self.status
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ceil(len / 2)
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(PAGE_SIZE)
    }

    // Zero-based index of the page currently shown
    pub fn current_page_index(&self) -> usize {
        self.window_start / PAGE_SIZE
    }

    // Advance one page, wrapping from the last page back to the first
    pub fn next(&mut self) {
        if self.records.is_empty() {
            return;
        }

        let next = self.window_start + PAGE_SIZE;
        self.window_start = if next >= self.records.len() { 0 } else { next };
    }

    // Go back one page, wrapping from the first page to the last
    pub fn previous(&mut self) {
        if self.records.is_empty() {
            return;
        }

        self.window_start = match self.window_start.checked_sub(PAGE_SIZE) {
            Some(start) => start,
            None => self.last_page_start(),
        };
    }

    /// Moves to the zero-based page `page_index`.
    ///
    /// Indices past the last page clamp to the last page, so `window_start`
    /// stays a valid page start.
    pub fn jump_to(&mut self, page_index: usize) {
        if self.records.is_empty() {
            return;
        }

        let last = self.page_count() - 1;
        if page_index > last {
            tracing::debug!(page_index, last, "page index out of range, clamping");
        }
        self.window_start = page_index.min(last) * PAGE_SIZE;
    }

    // At most PAGE_SIZE records; fewer on an odd-sized final page
    pub fn current_page(&self) -> &[RepositoryRecord] {
        let end = (self.window_start + PAGE_SIZE).min(self.records.len());
        &self.records[self.window_start..end]
    }

    fn last_page_start(&self) -> usize {
        self.page_count().saturating_sub(1) * PAGE_SIZE
    }
}
