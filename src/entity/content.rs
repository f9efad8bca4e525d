//! Polymorphic content items

use super::channel_compact::ChannelCompact;
use super::playlist_compact::PlaylistCompact;
use super::types::Loadable;
use super::video_compact::VideoCompact;
use crate::error::Result;
use crate::extract::{first_renderer, renderers};
use crate::types::RawNode;
use serde::Serialize;
use tracing::trace;

/// Kind of renderer a node was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Video,
    Playlist,
    Channel,
}

/// Dispatch table, checked in order
const DISPATCH: &[(ContentKind, &[&str])] = &[
    (ContentKind::Video, renderers::VIDEO),
    (ContentKind::Playlist, renderers::PLAYLIST),
    (ContentKind::Channel, renderers::CHANNEL),
];

/// One item of a mixed content list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Any video renderer (`videoRenderer`, `compactVideoRenderer`, ...)
    Video(VideoCompact),
    /// Playlists and mixes (`playlistRenderer`, `compactRadioRenderer`, ...)
    Playlist(PlaylistCompact),
    /// Channel results (`channelRenderer`, `gridChannelRenderer`)
    Channel(ChannelCompact),
}

impl Content {
    /// Load a node by its renderer tag
    ///
    /// Returns `Ok(None)` for renderers this crate does not know.
    pub fn load_any(node: &RawNode) -> Result<Option<Self>> {
        for (kind, tags) in DISPATCH {
            if let Some((_, inner)) = first_renderer(node, tags) {
                let content = match kind {
                    ContentKind::Video => Content::Video(VideoCompact::load(inner)?),
                    ContentKind::Playlist => Content::Playlist(PlaylistCompact::load(inner)?),
                    ContentKind::Channel => Content::Channel(ChannelCompact::load(inner)?),
                };
                return Ok(Some(content));
            }
        }

        trace!(
            "Skipping unrecognized renderer: {:?}",
            node.as_object().and_then(|o| o.keys().next())
        );
        Ok(None)
    }

    /// Load every recognized node of a list, in order
    pub fn load_all<'a, I>(nodes: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = &'a RawNode>,
    {
        let mut contents = Vec::new();
        for node in nodes {
            if let Some(content) = Self::load_any(node)? {
                contents.push(content);
            }
        }
        Ok(contents)
    }

    /// Id of the wrapped entity
    pub fn id(&self) -> &str {
        match self {
            Content::Video(v) => &v.id,
            Content::Playlist(p) => &p.id,
            Content::Channel(c) => &c.id,
        }
    }

    /// The wrapped video, if this is one
    pub fn as_video(&self) -> Option<&VideoCompact> {
        match self {
            Content::Video(v) => Some(v),
            _ => None,
        }
    }

    /// The wrapped playlist, if this is one
    pub fn as_playlist(&self) -> Option<&PlaylistCompact> {
        match self {
            Content::Playlist(p) => Some(p),
            _ => None,
        }
    }

    /// The wrapped channel, if this is one
    pub fn as_channel(&self) -> Option<&ChannelCompact> {
        match self {
            Content::Channel(c) => Some(c),
            _ => None,
        }
    }
}
