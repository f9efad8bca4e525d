//! Compact playlist (search results, mixes, related)

use super::channel_compact::ChannelCompact;
use super::types::{required, Loadable};
use crate::error::Result;
use crate::extract::{first_text, parse_count, text_of};
use crate::types::{RawNode, Thumbnail};
use serde::Serialize;

const BYLINE_KEYS: &[&str] = &["shortBylineText", "longBylineText", "ownerText"];

const VIDEO_COUNT_POINTERS: &[&str] = &["/videoCountText", "/videoCountShortText"];

/// Summary of a playlist or mix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistCompact {
    /// Playlist id
    pub id: String,
    /// Title
    pub title: String,
    /// Thumbnail renditions
    pub thumbnails: Vec<Thumbnail>,
    /// Owning channel (mixes have none)
    pub channel: Option<ChannelCompact>,
    /// Number of videos
    pub video_count: Option<u64>,
}

impl PlaylistCompact {
    /// Create a playlist summary with only its identity fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

impl Loadable for PlaylistCompact {
    const ENTITY: &'static str = "PlaylistCompact";

    fn load(raw: &RawNode) -> Result<Self> {
        let id = required(raw, Self::ENTITY, "/playlistId")?;

        // Search results carry a list of thumbnail sets, the rest a single set
        let thumbnails = raw
            .get("thumbnail")
            .or_else(|| raw.pointer("/thumbnails/0"))
            .map(Thumbnail::list_from)
            .unwrap_or_default();

        let video_count = first_text(raw, VIDEO_COUNT_POINTERS)
            .or_else(|| raw.get("videoCount").and_then(RawNode::as_str).map(str::to_string))
            .and_then(|t| parse_count(&t));

        Ok(Self {
            id,
            title: text_of(raw, "title").unwrap_or_default(),
            thumbnails,
            channel: BYLINE_KEYS
                .iter()
                .find_map(|key| raw.get(*key).and_then(ChannelCompact::from_byline)),
            video_count,
        })
    }
}
