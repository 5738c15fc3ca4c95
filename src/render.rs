// src/render.rs
// =============================================================================
// Turns the feed into something a person (or a script) can read.
//
// Two outputs:
// - Text: one "card" per repository plus a pager line, e.g.
//
//     ⭐ 12  🍴 3  📅 Mar 2024
//     my-project  https://github.com/octo/my-project
//       A short description
//       💻 Rust   #cli #async #tokio
//
//     Page 1 of 3   [1] 2 3
//
// - JSON: a PageView with the status, page numbers and the records
//
// Everything returns a String so it can be tested without capturing stdout.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::{LoadStatus, RepositoryFeed};
use crate::github::RepositoryRecord;

// Cards show at most this many topics
const MAX_TOPICS: usize = 3;

const NO_DESCRIPTION: &str = "No description available";

// JSON view of the current page (page numbers are 1-based)
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub status: LoadStatus,
    pub page: usize,
    pub page_count: usize,
    pub window_start: usize,
    pub total: usize,
    pub records: &'a [RepositoryRecord],
}

pub fn page_view(feed: &RepositoryFeed) -> PageView<'_> {
    PageView {
        status: feed.status(),
        page: if feed.is_empty() { 0 } else { feed.current_page_index() + 1 },
        page_count: feed.page_count(),
        window_start: feed.window_start(),
        total: feed.records().len(),
        records: feed.current_page(),
    }
}

// "Mar 2024"
pub fn format_updated(updated: &DateTime<Utc>) -> String {
    updated.format("%b %Y").to_string()
}

pub fn format_card(record: &RepositoryRecord) -> String {
    let mut card = format!(
        "⭐ {}  🍴 {}  📅 {}\n{}  {}\n  {}\n",
        record.star_count,
        record.fork_count,
        format_updated(&record.last_updated),
        record.name,
        record.link,
        record.description.as_deref().unwrap_or(NO_DESCRIPTION),
    );

    let topics: Vec<String> = record
        .topics
        .iter()
        .take(MAX_TOPICS)
        .map(|t| format!("#{}", t))
        .collect();

    // Language and topics share one line; skip it when both are missing
    let mut meta = Vec::new();
    if let Some(language) = &record.primary_language {
        meta.push(format!("💻 {}", language));
    }
    if !topics.is_empty() {
        meta.push(topics.join(" "));
    }
    if !meta.is_empty() {
        card.push_str(&format!("  {}\n", meta.join("   ")));
    }

    card
}

// "Page 2 of 3   1 [2] 3"
pub fn format_pager(feed: &RepositoryFeed) -> String {
    let count = feed.page_count();
    if count == 0 {
        return String::new();
    }

    let current = feed.current_page_index();
    let pages: Vec<String> = (0..count)
        .map(|i| {
            if i == current {
                format!("[{}]", i + 1)
            } else {
                (i + 1).to_string()
            }
        })
        .collect();

    format!("Page {} of {}   {}", current + 1, count, pages.join(" "))
}

pub fn render_page(feed: &RepositoryFeed) -> String {
    match feed.status() {
        LoadStatus::Loading => "⏳ Loading projects...".to_string(),
        LoadStatus::Failed => "⚠️  Could not load projects right now.".to_string(),
        LoadStatus::Ready if feed.is_empty() => "📭 No public projects to show.".to_string(),
        LoadStatus::Ready => {
            let cards: Vec<String> = feed.current_page().iter().map(format_card).collect();
            format!("{}\n{}", cards.join("\n"), format_pager(feed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use url::Url;

    fn sample(id: u64, stars: u32) -> RepositoryRecord {
        RepositoryRecord {
            id,
            name: format!("proj-{}", id),
            description: Some("Does a thing".to_string()),
            link: Url::parse(&format!("https://github.com/octo/proj-{}", id)).unwrap(),
            star_count: stars,
            fork_count: 2,
            primary_language: Some("Rust".to_string()),
            last_updated: Utc.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).unwrap(),
            topics: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            is_fork: false,
        }
    }

    fn ready(records: Vec<RepositoryRecord>) -> RepositoryFeed {
        let mut feed = RepositoryFeed::new(None);
        feed.complete(Ok(records));
        feed
    }

    #[test]
    fn test_updated_date_format() {
        let date = Utc.with_ymd_and_hms(2023, 11, 2, 0, 0, 0).unwrap();
        assert_eq!(format_updated(&date), "Nov 2023");
    }

    #[test]
    fn test_card_contents() {
        let card = format_card(&sample(1, 12));
        assert!(card.contains("⭐ 12"));
        assert!(card.contains("🍴 2"));
        assert!(card.contains("Mar 2024"));
        assert!(card.contains("proj-1  https://github.com/octo/proj-1"));
        assert!(card.contains("Does a thing"));
        assert!(card.contains("💻 Rust"));
        assert!(card.contains("#a #b #c"));
        assert!(!card.contains("#d"));
    }

    #[test]
    fn test_card_fallbacks() {
        let mut record = sample(1, 0);
        record.description = None;
        record.primary_language = None;
        record.topics.clear();

        let card = format_card(&record);
        assert!(card.contains(NO_DESCRIPTION));
        assert!(!card.contains("💻"));
        assert_eq!(card.lines().count(), 3);
    }

    #[test]
    fn test_pager_marks_current_page() {
        let mut feed = ready((1..=5).map(|i| sample(i, 10 - i as u32)).collect());
        assert_eq!(format_pager(&feed), "Page 1 of 3   [1] 2 3");
        feed.next();
        assert_eq!(format_pager(&feed), "Page 2 of 3   1 [2] 3");
    }

    #[test]
    fn test_status_messages() {
        let loading = RepositoryFeed::new(None);
        assert!(render_page(&loading).contains("Loading"));

        let mut failed = RepositoryFeed::new(None);
        failed.complete(Err(crate::github::FetchError::InvalidEndpoint("x".into())));
        assert!(render_page(&failed).contains("Could not load"));

        let empty = ready(Vec::new());
        assert!(render_page(&empty).contains("No public projects"));
    }

    #[test]
    fn test_ready_page_renders_two_cards() {
        let feed = ready(vec![sample(1, 3), sample(2, 2), sample(3, 1)]);
        let text = render_page(&feed);
        assert!(text.contains("proj-1"));
        assert!(text.contains("proj-2"));
        assert!(!text.contains("proj-3"));
        assert!(text.ends_with("Page 1 of 2   [1] 2"));
    }

    #[test]
    fn test_page_view_json() {
        let mut feed = ready(vec![sample(1, 3), sample(2, 2), sample(3, 1)]);
        feed.next();

        let json = serde_json::to_value(page_view(&feed)).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["page"], 2);
        assert_eq!(json["page_count"], 2);
        assert_eq!(json["window_start"], 2);
        assert_eq!(json["total"], 3);
        assert_eq!(json["records"][0]["name"], "proj-3");
        assert_eq!(json["records"][0]["stargazers_count"], 1);
    }
}
