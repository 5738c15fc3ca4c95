// src/feed/derive.rs
// =============================================================================
// Turns the raw listing into display order.
//
// Steps:
// 1. Drop forks (they are someone else's project)
// 2. Sort by star count, most-starred first
// 3. Optionally keep only the first `limit` entries
//
// The sort is stable: repositories with equal stars keep the order GitHub
// returned them in, which is most-recently-updated first.
// =============================================================================

use crate::github::RepositoryRecord;

pub fn derive_display_order(
    records: Vec<RepositoryRecord>,
    limit: Option<usize>,
) -> Vec<RepositoryRecord> {
    let mut records: Vec<RepositoryRecord> =
        records.into_iter().filter(|r| !r.is_fork).collect();

    // Vec::sort_by is a stable merge sort
    records.sort_by(|a, b| b.star_count.cmp(&a.star_count));

    if let Some(limit) = limit {
        records.truncate(limit);
    }

    records
}
