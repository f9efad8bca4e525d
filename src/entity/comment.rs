//! Video comment

use super::channel_compact::ChannelCompact;
use super::types::{required, Loadable};
use crate::error::Result;
use crate::extract::{parse_short_count, string_at, text, text_of};
use crate::types::{RawNode, Thumbnail, BASE_URL};
use serde::Serialize;

const AUTHOR_ENDPOINT: &str = "/authorEndpoint/browseEndpoint";
const VIEW_REPLIES_TEXT: &str = "/replies/commentRepliesRenderer/viewReplies/buttonRenderer/text";

/// A top-level comment on a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Comment id
    pub id: String,
    /// Comment body, runs joined
    pub content: String,
    /// Commenter; `None` for deleted accounts
    pub author: Option<ChannelCompact>,
    /// Relative publish time as displayed (`"2 days ago"`)
    pub published_date: Option<String>,
    pub like_count: Option<u64>,
    /// Written by the owner of the video's channel
    pub is_author_channel_owner: bool,
    pub is_pinned: bool,
    pub reply_count: u64,
}

/// Commenter from the author endpoint, name and avatar
fn load_author(raw: &RawNode) -> Option<ChannelCompact> {
    let endpoint = raw.pointer(AUTHOR_ENDPOINT)?;
    let id = string_at(endpoint, "/browseId")?;
    let mut author = ChannelCompact::new(id, text_of(raw, "authorText").unwrap_or_default())
        .with_thumbnails(
            raw.get("authorThumbnail")
                .map(Thumbnail::list_from)
                .unwrap_or_default(),
        );
    if let Some(path) = string_at(endpoint, "/canonicalBaseUrl") {
        author.url = format!("{BASE_URL}{path}");
    }
    Some(author)
}

impl Loadable for Comment {
    const ENTITY: &'static str = "Comment";

    /// Accepts a comment thread or the bare comment inside it
    fn load(raw: &RawNode) -> Result<Self> {
        let thread = raw;
        let raw = raw.pointer("/comment/commentRenderer").unwrap_or(raw);
        let id = required(raw, Self::ENTITY, "/commentId")?;

        let reply_count = raw
            .get("replyCount")
            .and_then(RawNode::as_u64)
            .or_else(|| text(thread.pointer(VIEW_REPLIES_TEXT)).and_then(|t| parse_short_count(&t)))
            .unwrap_or(0);

        Ok(Self {
            id,
            content: text_of(raw, "contentText").unwrap_or_default(),
            author: load_author(raw),
            published_date: text_of(raw, "publishedTimeText"),
            like_count: text_of(raw, "voteCount").and_then(|t| parse_short_count(&t)),
            is_author_channel_owner: raw
                .get("authorIsChannelOwner")
                .and_then(RawNode::as_bool)
                .unwrap_or(false),
            is_pinned: raw.get("pinnedCommentBadge").is_some(),
            reply_count,
        })
    }
}
