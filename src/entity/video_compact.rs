//! Compact video (search results, playlist items, channel uploads, related)

use super::channel_compact::ChannelCompact;
use super::types::{required, Loadable};
use crate::error::Result;
use crate::extract::{
    first_text, has_badge_style, parse_count, parse_duration, text_of, LIVE_NOW_BADGE_STYLE,
};
use crate::types::{RawNode, Thumbnail};
use serde::Serialize;

/// Byline fields that may carry the owning channel, in priority order
const BYLINE_KEYS: &[&str] = &["ownerText", "shortBylineText", "longBylineText"];

/// Duration text candidates, in priority order
const DURATION_POINTERS: &[&str] = &[
    "/lengthText",
    "/thumbnailOverlays/0/thumbnailOverlayTimeStatusRenderer/text",
];

/// Summary of a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoCompact {
    /// Video id
    pub id: String,
    /// Title, empty when the provider sent none
    pub title: String,
    /// Thumbnail renditions
    pub thumbnails: Vec<Thumbnail>,
    /// Duration in seconds
    pub duration: Option<u64>,
    /// Is this video live right now?
    pub is_live_content: bool,
    /// Owning channel
    pub channel: Option<ChannelCompact>,
    /// Relative upload date as displayed (`"3 days ago"`)
    pub upload_date: Option<String>,
    /// View count (watching count for live videos)
    pub view_count: Option<u64>,
}

impl VideoCompact {
    /// Create a video summary with only its identity fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Private and deleted videos are listed without a duration
    pub fn is_private_or_deleted(&self) -> bool {
        self.duration.is_none() && !self.is_live_content
    }
}

impl Loadable for VideoCompact {
    const ENTITY: &'static str = "VideoCompact";

    fn load(raw: &RawNode) -> Result<Self> {
        let id = required(raw, Self::ENTITY, "/videoId")?;

        let duration = first_text(raw, DURATION_POINTERS)
            .and_then(|t| parse_duration(&t))
            .or_else(|| {
                raw.get("lengthSeconds")
                    .and_then(RawNode::as_str)
                    .and_then(parse_duration)
            });

        let channel = BYLINE_KEYS
            .iter()
            .find_map(|key| raw.get(*key).and_then(ChannelCompact::from_byline));

        Ok(Self {
            id,
            title: text_of(raw, "title").unwrap_or_default(),
            thumbnails: raw
                .get("thumbnail")
                .map(Thumbnail::list_from)
                .unwrap_or_default(),
            duration,
            is_live_content: has_badge_style(raw, LIVE_NOW_BADGE_STYLE),
            channel,
            upload_date: text_of(raw, "publishedTimeText"),
            view_count: text_of(raw, "viewCountText").and_then(|t| parse_count(&t)),
        })
    }
}
