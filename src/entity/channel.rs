//! Full channel (browse page)

use super::channel_compact::ChannelCompact;
use crate::client::ChannelVideos;
use crate::error::Result;
use crate::extract::{string_at, text_of};
use crate::pagination::Continuable;
use crate::types::{RawNode, Thumbnail, BASE_URL};
use serde::Serialize;

const HEADER: &str = "/header/c4TabbedHeaderRenderer";
const METADATA: &str = "/metadata/channelMetadataRenderer";

/// A channel with its header details and a cursor over its uploads
#[derive(Debug, Serialize)]
pub struct Channel {
    /// Channel id (`UC...`)
    pub id: String,
    pub name: String,
    /// Canonical channel URL
    pub url: String,
    /// Avatar renditions
    pub thumbnails: Vec<Thumbnail>,
    /// Banner renditions
    pub banner: Vec<Thumbnail>,
    /// Subscriber count as displayed
    pub subscriber_count: Option<String>,
    pub description: Option<String>,
    /// Uploads, newest first, first page already loaded
    #[serde(skip)]
    pub videos: Continuable<ChannelVideos>,
}

impl Channel {
    /// Build a channel from its videos-tab browse response
    ///
    /// `Ok(None)` when the response has neither header nor metadata.
    pub(crate) fn from_browse(
        id: &str,
        response: &RawNode,
        videos: impl FnOnce() -> Result<Continuable<ChannelVideos>>,
    ) -> Result<Option<Self>> {
        let header = response.pointer(HEADER);
        let metadata = response.pointer(METADATA);
        if header.is_none() && metadata.is_none() {
            return Ok(None);
        }

        let id = header
            .and_then(|h| string_at(h, "/channelId"))
            .or_else(|| metadata.and_then(|m| string_at(m, "/externalId")))
            .unwrap_or_else(|| id.to_string());
        let name = header
            .and_then(|h| string_at(h, "/title").or_else(|| text_of(h, "title")))
            .or_else(|| metadata.and_then(|m| string_at(m, "/title")))
            .unwrap_or_default();

        let mut channel = ChannelCompact::new(id, name);
        if let Some(path) =
            header.and_then(|h| string_at(h, "/navigationEndpoint/browseEndpoint/canonicalBaseUrl"))
        {
            channel.url = format!("{BASE_URL}{path}");
        } else if let Some(url) = metadata.and_then(|m| string_at(m, "/vanityChannelUrl")) {
            channel.url = url;
        }

        let thumbnails = header
            .and_then(|h| h.get("avatar"))
            .or_else(|| metadata.and_then(|m| m.get("avatar")))
            .map(Thumbnail::list_from)
            .unwrap_or_default();

        Ok(Some(Self {
            id: channel.id,
            name: channel.name,
            url: channel.url,
            thumbnails,
            banner: header
                .and_then(|h| h.get("banner"))
                .map(Thumbnail::list_from)
                .unwrap_or_default(),
            subscriber_count: header.and_then(|h| text_of(h, "subscriberCountText")),
            description: metadata.and_then(|m| string_at(m, "/description")),
            videos: videos()?,
        }))
    }
}
