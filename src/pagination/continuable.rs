//! Generic continuation cursor

use super::types::{Page, PageFetcher, PaginationState};
use crate::error::{Error, Result};
use crate::types::{ContinuationToken, OptionStringExt};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Consecutive non-advancing pages a lenient collection follows before giving up
const MAX_STALLED_PAGES: usize = 3;

/// Incrementally loaded collection backed by a [`PageFetcher`]
///
/// ```rust,ignore
/// let videos = client.channel_videos("UC...");
/// let first = videos.next(1).await?;   // at least one page
/// let rest = videos.next(0).await?;    // everything else
/// assert_eq!(videos.items().await.len(), first.len() + rest.len());
/// ```
///
/// Readers only ever get owned snapshots, so no caller can hold the state
/// across a fetch.
pub struct Continuable<F: PageFetcher> {
    fetcher: F,
    state: RwLock<PaginationState<F::Item>>,
    locked: AtomicBool,
    strict_continuation_check: bool,
}

impl<F: PageFetcher> Continuable<F> {
    /// Create a collection positioned before its first page
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: RwLock::new(PaginationState::new()),
            locked: AtomicBool::new(false),
            strict_continuation_check: false,
        }
    }

    /// Create a collection whose first page came with another response
    ///
    /// The page is committed as if `next` had fetched it.
    pub fn from_first_page(fetcher: F, page: Page<F::Item>) -> Self {
        let mut state = PaginationState::new();
        state.append(page.items, page.continuation.none_if_empty());
        Self {
            state: RwLock::new(state),
            ..Self::new(fetcher)
        }
    }

    /// Treat a continuation that did not advance as exhaustion
    #[must_use]
    pub fn with_strict_continuation_check(mut self, strict: bool) -> Self {
        self.strict_continuation_check = strict;
        self
    }

    /// Get the underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Snapshot of every item fetched so far
    pub async fn items(&self) -> Vec<F::Item>
    where
        F::Item: Clone,
    {
        self.state.read().await.items.clone()
    }

    /// Number of items fetched so far
    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Check if nothing has been fetched yet
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }

    /// Check if more pages can be fetched
    pub async fn has_more(&self) -> bool {
        self.state.read().await.has_more
    }

    /// Token that the next fetch will send
    pub async fn continuation(&self) -> Option<ContinuationToken> {
        self.state.read().await.continuation.clone()
    }

    /// Check if a fetch is in flight
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Fetch more items
    ///
    /// `limit == 0` fetches until exhaustion; otherwise pages are fetched
    /// until at least `limit` new items arrived or the collection ran out.
    /// Returns only the items added by this call.
    ///
    /// A call overlapping another in-flight call fails with
    /// [`Error::ConcurrentFetch`]. Fetch errors are returned unchanged; pages
    /// committed before the failure stay committed, the failed page does not.
    pub async fn next(&self, limit: usize) -> Result<Vec<F::Item>>
    where
        F::Item: Clone,
    {
        let _lock = FetchLock::acquire(&self.locked)?;
        let mut fetched = Vec::new();
        let mut stalled = 0;

        loop {
            let current = {
                let state = self.state.read().await;
                if !state.has_more {
                    break;
                }
                state.continuation.clone()
            };

            let page = self.fetcher.fetch(current.as_deref()).await?;
            let mut next = page.continuation.none_if_empty();

            // A token that did not move would refetch the same page forever
            if next.is_some() && next == current {
                stalled += 1;
                if self.strict_continuation_check || page.items.is_empty() {
                    debug!("Continuation did not advance, treating collection as exhausted");
                    next = None;
                } else if stalled >= MAX_STALLED_PAGES {
                    warn!(
                        "Continuation did not advance for {stalled} pages, treating collection as exhausted"
                    );
                    next = None;
                }
            } else {
                stalled = 0;
            }

            let count = page.items.len();
            fetched.extend(page.items.iter().cloned());
            {
                let mut state = self.state.write().await;
                state.append(page.items, next);
                debug!(
                    "Fetched page: {count} items, {} total, has_more={}",
                    state.items.len(),
                    state.has_more
                );
                if !state.has_more {
                    break;
                }
            }

            if limit > 0 && fetched.len() >= limit {
                break;
            }
        }

        Ok(fetched)
    }
}

impl<F: PageFetcher + std::fmt::Debug> std::fmt::Debug for Continuable<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Continuable")
            .field("fetcher", &self.fetcher)
            .field("locked", &self.is_locked())
            .field("strict_continuation_check", &self.strict_continuation_check)
            .finish_non_exhaustive()
    }
}

/// Held for the duration of one `next` call; released on drop
struct FetchLock<'a>(&'a AtomicBool);

impl<'a> FetchLock<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::ConcurrentFetch)?;
        Ok(Self(flag))
    }
}

impl Drop for FetchLock<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
