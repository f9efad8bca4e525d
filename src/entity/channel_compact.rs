//! Compact channel

use super::types::{required, Loadable};
use crate::error::Result;
use crate::extract::{parse_count, string_at, text, text_of};
use crate::types::{RawNode, Thumbnail, BASE_URL};
use serde::Serialize;

/// A channel as referenced from search results or video summaries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelCompact {
    /// Channel id (`UC...`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Canonical channel URL
    pub url: String,
    /// Avatar renditions
    pub thumbnails: Vec<Thumbnail>,
    /// Subscriber count as displayed (`"1.2M subscribers"`)
    pub subscriber_count: Option<String>,
    /// Number of uploaded videos
    pub video_count: Option<u64>,
}

impl ChannelCompact {
    /// Minimal channel reference with the default canonical URL
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            url: format!("{BASE_URL}/channel/{id}"),
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the avatar renditions
    #[must_use]
    pub fn with_thumbnails(mut self, thumbnails: Vec<Thumbnail>) -> Self {
        self.thumbnails = thumbnails;
        self
    }

    /// Synthesize a channel from a byline text node
    ///
    /// Uses the first run carrying a browse endpoint. Returns `None` when no
    /// run links to a channel.
    pub fn from_byline(byline: &RawNode) -> Option<Self> {
        let run = byline
            .get("runs")?
            .as_array()?
            .iter()
            .find(|run| run.pointer("/navigationEndpoint/browseEndpoint").is_some())?;
        let endpoint = run.pointer("/navigationEndpoint/browseEndpoint")?;

        let id = string_at(endpoint, "/browseId")?;
        let name = string_at(run, "/text").unwrap_or_default();
        let mut channel = Self::new(id, name);
        if let Some(path) = string_at(endpoint, "/canonicalBaseUrl") {
            channel.url = format!("{BASE_URL}{path}");
        }
        Some(channel)
    }
}

impl Loadable for ChannelCompact {
    const ENTITY: &'static str = "ChannelCompact";

    fn load(raw: &RawNode) -> Result<Self> {
        let id = required(raw, Self::ENTITY, "/channelId")?;
        let name = text_of(raw, "title").unwrap_or_default();
        let mut channel = Self::new(id, name);

        if let Some(path) = string_at(raw, "/navigationEndpoint/browseEndpoint/canonicalBaseUrl")
        {
            channel.url = format!("{BASE_URL}{path}");
        }
        channel.thumbnails = raw
            .get("thumbnail")
            .map(Thumbnail::list_from)
            .unwrap_or_default();
        channel.subscriber_count = text_of(raw, "subscriberCountText");
        channel.video_count = text(raw.get("videoCountText")).and_then(|t| parse_count(&t));

        Ok(channel)
    }
}
