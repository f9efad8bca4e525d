//! Full playlist (browse page)

use super::channel_compact::ChannelCompact;
use crate::client::PlaylistVideos;
use crate::error::Result;
use crate::extract::{parse_count, text, text_of};
use crate::pagination::Continuable;
use crate::types::{RawNode, Thumbnail};
use serde::Serialize;

const SIDEBAR_ITEMS: &str = "/sidebar/playlistSidebarRenderer/items";
const HEADER: &str = "/header/playlistHeaderRenderer";
const SIDEBAR_THUMBNAIL: &str = "/thumbnailRenderer/playlistVideoThumbnailRenderer/thumbnail";
const HEADER_THUMBNAIL: &str = "/playlistHeaderBanner/heroPlaylistThumbnailRenderer/thumbnail";

/// A playlist with its metadata and a cursor over its videos
#[derive(Debug, Serialize)]
pub struct Playlist {
    /// Playlist id
    pub id: String,
    pub title: String,
    /// Number of videos as reported by the page
    pub video_count: Option<u64>,
    pub view_count: Option<u64>,
    /// Last update as displayed (`"Last updated on Jan 2, 2024"`)
    pub last_updated: Option<String>,
    /// Owning channel (mixes have none)
    pub channel: Option<ChannelCompact>,
    pub thumbnails: Vec<Thumbnail>,
    /// Videos in playlist order, first page already loaded
    #[serde(skip)]
    pub videos: Continuable<PlaylistVideos>,
}

impl Playlist {
    /// Build a playlist from its browse response
    ///
    /// `Ok(None)` when the response carries neither the sidebar nor the
    /// header, which is how unavailable playlists come back. `videos` is only
    /// called for playlists that exist.
    pub(crate) fn from_browse(
        id: &str,
        response: &RawNode,
        videos: impl FnOnce() -> Result<Continuable<PlaylistVideos>>,
    ) -> Result<Option<Self>> {
        let sidebar = response.pointer(SIDEBAR_ITEMS).and_then(RawNode::as_array);
        let primary = sidebar.and_then(|items| {
            items
                .iter()
                .find_map(|item| item.get("playlistSidebarPrimaryInfoRenderer"))
        });
        let owner = sidebar.and_then(|items| {
            items.iter().find_map(|item| {
                item.pointer("/playlistSidebarSecondaryInfoRenderer/videoOwner/videoOwnerRenderer")
            })
        });
        let header = response.pointer(HEADER);

        if primary.is_none() && header.is_none() {
            return Ok(None);
        }

        // Sidebar stats: video count, views, last update
        let stat = |index: usize| {
            primary
                .and_then(|p| p.get("stats"))
                .and_then(|stats| text(stats.get(index)))
        };

        let title = primary
            .and_then(|p| text_of(p, "title"))
            .or_else(|| header.and_then(|h| text_of(h, "title")))
            .unwrap_or_default();

        let video_count = stat(0)
            .or_else(|| header.and_then(|h| text_of(h, "numVideosText")))
            .and_then(|t| parse_count(&t));
        let view_count = stat(1)
            .or_else(|| header.and_then(|h| text_of(h, "viewCountText")))
            .and_then(|t| parse_count(&t));

        let channel = owner
            .and_then(|o| {
                let channel = ChannelCompact::from_byline(o.get("title")?)?;
                Some(channel.with_thumbnails(
                    o.get("thumbnail").map(Thumbnail::list_from).unwrap_or_default(),
                ))
            })
            .or_else(|| header.and_then(|h| ChannelCompact::from_byline(h.get("ownerText")?)));

        let thumbnails = primary
            .and_then(|p| p.pointer(SIDEBAR_THUMBNAIL))
            .or_else(|| header.and_then(|h| h.pointer(HEADER_THUMBNAIL)))
            .map(Thumbnail::list_from)
            .unwrap_or_default();

        Ok(Some(Self {
            id: id.to_string(),
            title,
            video_count,
            view_count,
            last_updated: stat(2),
            channel,
            thumbnails,
            videos: videos()?,
        }))
    }
}
