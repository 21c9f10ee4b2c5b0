//! Paginated issue search
//!
//! Jira caps search responses at a fixed page size, so fetching "all issues
//! matching a query" means walking pages with an advancing offset until the
//! server-reported total is reached. The offset advances from the
//! *server-echoed* start position plus the number of items actually
//! returned, which tolerates a server returning fewer items than requested
//! without creating gaps or infinite loops.
//!
//! Failure semantics: the first page-fetch failure is fatal to the whole
//! operation. No partial accumulation is returned and nothing is retried.

use crate::api::IssueTracker;
use crate::error::Result;
use crate::models::Issue;
use tracing::debug;

/// Page size cap for search requests, matching the API maximum
pub const MAX_RESULTS: u32 = 1000;

/// Fetch every issue matching a JQL query, in server-reported order
pub async fn fetch_all<T>(api: &T, jql: &str) -> Result<Vec<Issue>>
where
    T: IssueTracker + ?Sized,
{
    fetch_all_with_limit(api, jql, MAX_RESULTS).await
}

/// Fetch every issue matching a JQL query with an explicit page size
///
/// `fetch_all` is the normal entry point; the limit is exposed so callers
/// (and tests) can exercise multi-page behavior with small pages.
pub async fn fetch_all_with_limit<T>(api: &T, jql: &str, limit: u32) -> Result<Vec<Issue>>
where
    T: IssueTracker + ?Sized,
{
    let mut start_at: u32 = 0;
    let mut all = Vec::new();

    loop {
        let page = api.search_page(jql, start_at, limit).await?;

        if all.is_empty() {
            all.reserve(page.total as usize);
        }

        // Advance from the server-echoed start, not the locally tracked
        // offset, so an undershooting page never skips or repeats issues.
        start_at = page.start_at + page.issues.len() as u32;

        debug!(
            "Fetched page: {} issues, next startAt={}, total={}",
            page.issues.len(),
            start_at,
            page.total
        );

        all.extend(page.issues);

        if start_at >= page.total {
            break;
        }
    }

    Ok(all)
}

#[cfg(test)]
mod tests;
