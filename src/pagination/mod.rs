//! Pagination module
//!
//! Continuation-based cursor over any provider collection.
//!
//! # Overview
//!
//! A [`PageFetcher`] knows how to turn "the current continuation token" into
//! one [`Page`] of typed items. [`Continuable`] drives a fetcher: it owns the
//! append-only item history, advances the token, detects exhaustion and
//! rejects overlapping fetches on the same collection.

mod continuable;
mod types;

pub use continuable::Continuable;
pub use types::{Page, PageFetcher, PaginationState};
