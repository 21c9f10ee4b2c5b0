//! Tests for the paginated fetcher
//!
//! The fetch loop runs against a scripted fake tracker: each call pops the
//! next prepared page (or error) and records the requested offset.

use super::*;
use crate::api::IssueTracker;
use crate::error::Error;
use crate::models::{Issue, IssueFields, Project, SearchResponse, Transition};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::Mutex;
use test_case::test_case;

fn issue(n: u32) -> Issue {
    Issue {
        id: n.to_string(),
        key: format!("TEST-{n}"),
        fields: IssueFields::default(),
    }
}

/// Build a page of `count` issues starting at position `start_at`
fn page(start_at: u32, count: u32, total: u32) -> SearchResponse {
    SearchResponse {
        issues: (start_at..start_at + count).map(issue).collect(),
        start_at,
        max_results: count,
        total,
    }
}

enum Scripted {
    Page(SearchResponse),
    Fail,
}

struct FakeTracker {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<u32>>,
}

impl FakeTracker {
    fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Evenly split `total` issues into pages of `page_size`
    fn with_pages(total: u32, page_size: u32) -> Self {
        let mut script = Vec::new();
        let mut start_at = 0;
        loop {
            let count = page_size.min(total - start_at);
            script.push(Scripted::Page(page(start_at, count, total)));
            start_at += count;
            if start_at >= total {
                break;
            }
        }
        Self::new(script)
    }

    fn offsets_requested(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn search_page(
        &self,
        _jql: &str,
        start_at: u32,
        _max_results: u32,
    ) -> crate::error::Result<SearchResponse> {
        self.calls.lock().unwrap().push(start_at);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Page(page)) => Ok(page),
            Some(Scripted::Fail) => Err(Error::http_status(500, "scripted failure")),
            None => panic!("fetcher requested more pages than scripted"),
        }
    }

    async fn transitions(&self, _issue_key: &str) -> crate::error::Result<Vec<Transition>> {
        unimplemented!("not used by the fetch loop")
    }

    async fn do_transition(
        &self,
        _issue_id: &str,
        _transition_id: &str,
    ) -> crate::error::Result<()> {
        unimplemented!("not used by the fetch loop")
    }

    async fn projects(&self) -> crate::error::Result<Vec<Project>> {
        unimplemented!("not used by the fetch loop")
    }
}

#[tokio::test]
async fn test_single_page() {
    let tracker = FakeTracker::with_pages(5, 1000);
    let issues = fetch_all(&tracker, "project = TEST").await.unwrap();

    assert_eq!(issues.len(), 5);
    assert_eq!(tracker.offsets_requested(), vec![0]);
}

#[tokio::test]
async fn test_three_pages_of_one_thousand() {
    // total=2500, page size=1000: three calls at offsets 0, 1000, 2000.
    let tracker = FakeTracker::with_pages(2500, 1000);
    let issues = fetch_all(&tracker, "project = TEST").await.unwrap();

    assert_eq!(issues.len(), 2500);
    assert_eq!(tracker.offsets_requested(), vec![0, 1000, 2000]);

    // Server-reported order, no duplicates, no gaps.
    let keys: Vec<String> = issues.iter().map(|i| i.key.clone()).collect();
    let expected: Vec<String> = (0..2500).map(|n| format!("TEST-{n}")).collect();
    assert_eq!(keys, expected);
}

#[test_case(0, 1000, 1 ; "empty result set still issues one call")]
#[test_case(1, 1000, 1 ; "one issue")]
#[test_case(1000, 1000, 1 ; "exactly one full page")]
#[test_case(1001, 1000, 2 ; "one issue past the page boundary")]
#[test_case(10, 3, 4 ; "small pages")]
#[test_case(9, 3, 3 ; "total divisible by page size")]
#[tokio::test]
async fn test_page_splits(total: u32, page_size: u32, expected_calls: usize) {
    let tracker = FakeTracker::with_pages(total, page_size);
    let issues = fetch_all_with_limit(&tracker, "project = TEST", page_size)
        .await
        .unwrap();

    assert_eq!(issues.len(), total as usize);
    assert_eq!(tracker.offsets_requested().len(), expected_calls);
    for (n, issue) in issues.iter().enumerate() {
        assert_eq!(issue.key, format!("TEST-{n}"));
    }
}

#[tokio::test]
async fn test_empty_result_returns_empty_vec() {
    let tracker = FakeTracker::with_pages(0, 1000);
    let issues = fetch_all(&tracker, "project = EMPTY").await.unwrap();

    assert!(issues.is_empty());
    assert_eq!(tracker.offsets_requested(), vec![0]);
}

#[tokio::test]
async fn test_failure_on_first_page_surfaces_error() {
    let tracker = FakeTracker::new(vec![Scripted::Fail]);
    let err = fetch_all(&tracker, "project = TEST").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_failure_on_later_page_discards_partial_result() {
    let tracker = FakeTracker::new(vec![
        Scripted::Page(page(0, 1000, 2500)),
        Scripted::Page(page(1000, 1000, 2500)),
        Scripted::Fail,
    ]);
    let result = fetch_all(&tracker, "project = TEST").await;

    // No partial accumulation: pages 1 and 2 are not returned.
    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 500, .. })
    ));
    assert_eq!(tracker.offsets_requested(), vec![0, 1000, 2000]);
}

#[tokio::test]
async fn test_server_undershoot_advances_by_actual_count() {
    // The server returns fewer issues than requested on a non-final page.
    // The next offset must come from the echoed startAt plus the actual
    // count, so nothing is skipped or fetched twice.
    let tracker = FakeTracker::new(vec![
        Scripted::Page(page(0, 2, 5)),
        Scripted::Page(page(2, 3, 5)),
    ]);
    let issues = fetch_all_with_limit(&tracker, "project = TEST", 3)
        .await
        .unwrap();

    assert_eq!(issues.len(), 5);
    assert_eq!(tracker.offsets_requested(), vec![0, 2]);
    let keys: Vec<&str> = issues.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["TEST-0", "TEST-1", "TEST-2", "TEST-3", "TEST-4"]);
}

#[test]
fn test_fetch_all_uses_max_results_cap() {
    let tracker = FakeTracker::with_pages(3, 1000);
    let issues = tokio_test::block_on(fetch_all(&tracker, "project = TEST")).unwrap();
    assert_eq!(issues.len(), 3);
    assert_eq!(MAX_RESULTS, 1000);
}
