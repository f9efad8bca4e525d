//! Client module
//!
//! High-level entry point tying the transport, the loaders and the
//! pagination engine together.
//!
//! # Overview
//!
//! - [`Client`] - one-shot lookups (`get_video`, `get_playlist`,
//!   `get_channel`, `get_video_transcript`) and constructors for paginated
//!   collections
//! - [`SearchResults`], [`ChannelVideos`], [`PlaylistVideos`],
//!   [`VideoComments`] - the [`PageFetcher`](crate::pagination::PageFetcher)s
//!   behind those collections

mod api;
mod fetchers;

pub use api::Client;
pub use fetchers::{ChannelVideos, PlaylistVideos, SearchResults, SearchType, VideoComments};
