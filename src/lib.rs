// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # youtubei
//!
//! An async client for the innertube API behind youtube.com: search,
//! channels and their uploads, playlists, video details, comments and
//! transcripts.
//!
//! ## Features
//!
//! - **Continuation Pagination**: Collections fetch page after page on demand
//!   and refuse overlapping fetches
//! - **Tolerant Parsing**: Renderer dispatch and text extraction that survive
//!   the provider's shifting response shapes
//! - **Request Params**: Protobuf-encoded `params` built from typed messages
//! - **Resilient Transport**: Retry with backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use youtubei::{Client, Result, SearchType};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new()?;
//!
//!     // First page of results
//!     let results = client.search("rust async", SearchType::Video);
//!     for content in results.next(1).await? {
//!         println!("{}", content.id());
//!     }
//!
//!     // Everything else
//!     results.next(0).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             Client                              │
//! │  search()   channel_videos()   playlist_videos()   get_video()  │
//! │  video_comments()   get_playlist()   get_channel()              │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────────┴─┬──────────────────┬─────────────┐
//! │ Pagination │   Continuation    │      Entity      │    HTTP     │
//! ├────────────┼───────────────────┼──────────────────┼─────────────┤
//! │ Continuable│ Token extraction  │ Renderer dispatch│ Context     │
//! │ PageFetcher│ Item flattening   │ Text/count/time  │ Retry       │
//! │ Fetch lock │ Response actions  │ Loadable         │ Rate limit  │
//! └────────────┴───────────────────┴──────────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client with retry and rate limiting
pub mod http;

/// Field extraction from raw renderer nodes
pub mod extract;

/// Domain entities loaded from renderers
pub mod entity;

/// Continuation token tracking
pub mod continuation;

/// Protobuf request params
pub mod proto;

/// Continuation-based pagination
pub mod pagination;

/// High-level client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{
    ChannelVideos, Client, PlaylistVideos, SearchResults, SearchType, VideoComments,
};
pub use config::ClientConfig;
pub use entity::{
    Channel, ChannelCompact, Comment, Content, Playlist, PlaylistCompact, TranscriptCue, Video,
    VideoCompact,
};
pub use pagination::{Continuable, Page, PageFetcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
