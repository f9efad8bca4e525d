//! HTTP transport module
//!
//! The only component that talks to the network. Every innertube call is a
//! JSON POST with the client context merged into its body.
//!
//! # Features
//!
//! - **Context Injection**: `context.client` added to every request body
//! - **Automatic Retries**: Throttling and server errors, with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{ClientContext, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
