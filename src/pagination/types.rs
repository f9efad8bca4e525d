//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by every collection.

use crate::error::Result;
use crate::types::ContinuationToken;
use async_trait::async_trait;

/// One fetched page: items plus the token for the page after it
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in provider order
    pub items: Vec<T>,
    /// Next continuation token, `None` on the last page
    pub continuation: Option<ContinuationToken>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, continuation: Option<ContinuationToken>) -> Self {
        Self {
            items,
            continuation,
        }
    }

    /// Create an empty final page
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }
}

/// Tracks pagination state across fetches
///
/// `has_more == false` implies `continuation == None`.
#[derive(Debug, Clone)]
pub struct PaginationState<T> {
    /// Every item fetched so far, in order
    pub items: Vec<T>,
    /// Token to send with the next fetch
    pub continuation: Option<ContinuationToken>,
    /// Is there anything left to fetch?
    pub has_more: bool,
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            continuation: None,
            has_more: true,
        }
    }
}

impl<T> PaginationState<T> {
    /// Create a fresh state: no items, no token, more to fetch
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a successfully fetched page
    pub fn append(&mut self, items: Vec<T>, continuation: Option<ContinuationToken>) {
        self.items.extend(items);
        self.has_more = continuation.is_some();
        self.continuation = continuation;
    }
}

/// Entity-specific page source driven by [`Continuable`](super::Continuable)
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Entity produced by this fetcher
    type Item: Send + Sync;

    /// Fetch the page identified by `continuation` (`None` for the first page)
    async fn fetch(&self, continuation: Option<&str>) -> Result<Page<Self::Item>>;
}
