//! Message definitions
//!
//! Every field is optional; unset fields are left off the wire.

/// Parameters of the `get_transcript` endpoint
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TranscriptParams {
    #[prost(string, optional, tag = "1")]
    pub video_id: Option<String>,
}

impl TranscriptParams {
    /// Transcript request for a single video
    pub fn for_video(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
        }
    }
}

/// Selects a tab when browsing a channel
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChannelTabParams {
    #[prost(string, optional, tag = "2")]
    pub tab: Option<String>,
}

impl ChannelTabParams {
    /// Params for the named tab (`"videos"`, `"playlists"`, ...)
    ///
    /// The generated `tab()` getter reads the field back.
    pub fn for_tab(name: impl Into<String>) -> Self {
        Self {
            tab: Some(name.into()),
        }
    }
}

/// Search filter block
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchFilters {
    /// Result type: see the `SearchParams` constants
    #[prost(uint32, optional, tag = "2")]
    pub kind: Option<u32>,
}

/// Parameters of the `search` endpoint
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchParams {
    #[prost(message, optional, tag = "2")]
    pub filters: Option<SearchFilters>,
}

impl SearchParams {
    pub const VIDEO: u32 = 1;
    pub const CHANNEL: u32 = 2;
    pub const PLAYLIST: u32 = 3;

    /// Restrict results to one kind
    pub fn of_kind(kind: u32) -> Self {
        Self {
            filters: Some(SearchFilters { kind: Some(kind) }),
        }
    }
}
