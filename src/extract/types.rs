//! Extraction types
//!
//! Known field shapes and renderer tag sets.

use crate::types::RawNode;

/// Badge style marking a video that is live right now
pub const LIVE_NOW_BADGE_STYLE: &str = "BADGE_STYLE_TYPE_LIVE_NOW";

/// Known shapes of a provider text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextShape {
    /// `{ "simpleText": "Hello World" }`
    Simple,
    /// `{ "runs": [{ "text": "Hello" }, { "text": " World" }] }`
    Runs,
    /// `{ "content": "Hello World" }` (view-model payloads)
    Content,
}

impl TextShape {
    /// Resolution order when more than one shape is present
    pub const PRIORITY: [TextShape; 3] = [TextShape::Simple, TextShape::Runs, TextShape::Content];

    /// Read the text if the node has this shape
    pub fn resolve(self, node: &RawNode) -> Option<String> {
        match self {
            TextShape::Simple => node
                .get("simpleText")
                .and_then(RawNode::as_str)
                .map(str::to_string),
            TextShape::Runs => {
                let runs = node.get("runs")?.as_array()?;
                let joined: String = runs
                    .iter()
                    .filter_map(|run| run.get("text").and_then(RawNode::as_str))
                    .collect();
                Some(joined)
            }
            TextShape::Content => node
                .get("content")
                .and_then(RawNode::as_str)
                .map(str::to_string),
        }
    }
}

/// Renderer tags, grouped by the content lists they appear in
pub mod renderers {
    /// Sentinel element carrying the next continuation token
    pub const CONTINUATION_ITEM: &str = "continuationItemRenderer";

    /// Video-like items, most specific first
    pub const VIDEO: &[&str] = &[
        "videoRenderer",
        "compactVideoRenderer",
        "gridVideoRenderer",
        "playlistVideoRenderer",
    ];

    /// Playlist-like items
    pub const PLAYLIST: &[&str] = &[
        "playlistRenderer",
        "compactPlaylistRenderer",
        "compactRadioRenderer",
        "gridPlaylistRenderer",
    ];

    /// Channel items
    pub const CHANNEL: &[&str] = &["channelRenderer", "gridChannelRenderer"];

    /// Top-level comment threads
    pub const COMMENT: &[&str] = &["commentThreadRenderer"];
}
