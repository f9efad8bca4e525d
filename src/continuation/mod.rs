//! Continuation tracking
//!
//! Locates content lists in initial and continuation responses and pulls the
//! next continuation token out of them. Tokens are never inspected, only
//! handed back to the provider verbatim.

mod tracker;

pub use tracker::{continuation_items, extract_continuation, flatten_items};
