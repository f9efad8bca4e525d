//! Collection fetchers
//!
//! Each fetcher builds the first request from its own parameters and every
//! later request from the continuation token alone.

use crate::continuation::{continuation_items, extract_continuation, flatten_items};
use crate::entity::{load_renderers, Comment, Content, VideoCompact};
use crate::error::{Error, Result};
use crate::extract::renderers;
use crate::http::HttpClient;
use crate::pagination::{Page, PageFetcher};
use crate::proto::{self, ChannelTabParams, SearchParams};
use crate::types::{ContinuationToken, RawNode};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub(crate) const SEARCH_ENDPOINT: &str = "search";
pub(crate) const BROWSE_ENDPOINT: &str = "browse";
pub(crate) const NEXT_ENDPOINT: &str = "next";

const SEARCH_CONTENTS: &str =
    "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents";
const BROWSE_TABS: &str = "/contents/twoColumnBrowseResultsRenderer/tabs";
const WATCH_CONTENTS: &str = "/contents/twoColumnWatchNextResults/results/results/contents";
const COMMENT_SECTION_ID: &str = "comment-item-section";
const PLAYLIST_CONTENTS: &str = "/contents/twoColumnBrowseResultsRenderer/tabs/0/tabRenderer/content/sectionListRenderer/contents/0/itemSectionRenderer/contents/0/playlistVideoListRenderer/contents";

/// Where a channel tab keeps its items, newest layout first
const TAB_CONTENT_POINTERS: &[&str] = &[
    "/tabRenderer/content/richGridRenderer/contents",
    "/tabRenderer/content/sectionListRenderer/contents/0/itemSectionRenderer/contents/0/gridRenderer/items",
    "/tabRenderer/content/sectionListRenderer/contents",
];

/// POST the first-page body, or the continuation body when a token is given
async fn request_page(
    http: &HttpClient,
    endpoint: &str,
    initial: impl FnOnce() -> Value,
    continuation: Option<&str>,
) -> Result<RawNode> {
    let body = match continuation {
        Some(token) => json!({ "continuation": token }),
        None => initial(),
    };
    http.post_json(endpoint, body).await
}

/// Flattened raw items of a page
///
/// A first page without its content list is a parse error; a continuation
/// page without one is an empty last page.
fn page_items<'a>(
    response: &'a RawNode,
    continuation: Option<&str>,
    locate: impl FnOnce(&'a RawNode) -> Option<&'a Vec<RawNode>>,
    collection: &str,
) -> Result<Vec<&'a RawNode>> {
    let items = match continuation {
        Some(_) => continuation_items(response).unwrap_or_default(),
        None => locate(response)
            .ok_or_else(|| Error::parse(format!("{collection}: content list not found")))?
            .iter()
            .collect(),
    };
    Ok(flatten_items(items))
}

// ============================================================================
// Search
// ============================================================================

/// Kind of results a search returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Everything the provider returns
    #[default]
    All,
    Video,
    Playlist,
    Channel,
}

impl SearchType {
    /// Encoded `params` for this filter
    pub fn params(self) -> Option<String> {
        let kind = match self {
            SearchType::All => return None,
            SearchType::Video => SearchParams::VIDEO,
            SearchType::Playlist => SearchParams::PLAYLIST,
            SearchType::Channel => SearchParams::CHANNEL,
        };
        Some(proto::encode(&SearchParams::of_kind(kind)))
    }
}

/// Search result pages
#[derive(Debug, Clone)]
pub struct SearchResults {
    http: Arc<HttpClient>,
    query: String,
    search_type: SearchType,
}

impl SearchResults {
    pub(crate) fn new(http: Arc<HttpClient>, query: String, search_type: SearchType) -> Self {
        Self {
            http,
            query,
            search_type,
        }
    }

    /// The search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The result filter
    pub fn search_type(&self) -> SearchType {
        self.search_type
    }
}

#[async_trait]
impl PageFetcher for SearchResults {
    type Item = Content;

    async fn fetch(&self, continuation: Option<&str>) -> Result<Page<Content>> {
        let response = request_page(
            &self.http,
            SEARCH_ENDPOINT,
            || {
                let mut body = json!({ "query": self.query });
                if let Some(params) = self.search_type.params() {
                    body["params"] = Value::String(params);
                }
                body
            },
            continuation,
        )
        .await?;

        let items = page_items(
            &response,
            continuation,
            |r| r.pointer(SEARCH_CONTENTS)?.as_array(),
            "search",
        )?;
        let next = extract_continuation(items.iter().copied());
        let contents = Content::load_all(items)?;

        debug!("Search '{}': {} results", self.query, contents.len());
        Ok(Page::new(contents, next))
    }
}

// ============================================================================
// Channel Videos
// ============================================================================

/// Uploads of a channel, newest first
#[derive(Debug, Clone)]
pub struct ChannelVideos {
    http: Arc<HttpClient>,
    channel_id: String,
}

impl ChannelVideos {
    pub(crate) fn new(http: Arc<HttpClient>, channel_id: String) -> Self {
        Self { http, channel_id }
    }

    /// The channel being listed
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// First-request body: the channel with its videos tab selected
    pub(crate) fn browse_body(channel_id: &str) -> Value {
        json!({
            "browseId": channel_id,
            "params": proto::encode(&ChannelTabParams::for_tab("videos")),
        })
    }

    /// Videos and next token of a first or continuation response
    pub(crate) fn parse_page(
        response: &RawNode,
        continuation: Option<&str>,
    ) -> Result<Page<VideoCompact>> {
        let items = page_items(response, continuation, selected_tab_items, "channel videos")?;
        let next = extract_continuation(items.iter().copied());
        Ok(Page::new(load_renderers(items, renderers::VIDEO)?, next))
    }
}

/// Item list of the selected channel tab
fn selected_tab_items(response: &RawNode) -> Option<&Vec<RawNode>> {
    let tabs = response.pointer(BROWSE_TABS)?.as_array()?;
    let tab = tabs
        .iter()
        .find(|tab| tab.pointer("/tabRenderer/selected").and_then(Value::as_bool) == Some(true))
        .or_else(|| tabs.iter().find(|tab| tab.pointer("/tabRenderer/content").is_some()))?;
    TAB_CONTENT_POINTERS
        .iter()
        .find_map(|pointer| tab.pointer(pointer)?.as_array())
}

#[async_trait]
impl PageFetcher for ChannelVideos {
    type Item = VideoCompact;

    async fn fetch(&self, continuation: Option<&str>) -> Result<Page<VideoCompact>> {
        let response = request_page(
            &self.http,
            BROWSE_ENDPOINT,
            || Self::browse_body(&self.channel_id),
            continuation,
        )
        .await?;

        let page = Self::parse_page(&response, continuation)?;
        debug!("Channel {}: {} videos", self.channel_id, page.items.len());
        Ok(page)
    }
}

// ============================================================================
// Playlist Videos
// ============================================================================

/// Videos of a playlist, in playlist order
#[derive(Debug, Clone)]
pub struct PlaylistVideos {
    http: Arc<HttpClient>,
    playlist_id: String,
}

impl PlaylistVideos {
    pub(crate) fn new(http: Arc<HttpClient>, playlist_id: String) -> Self {
        Self { http, playlist_id }
    }

    /// The playlist being listed
    pub fn playlist_id(&self) -> &str {
        &self.playlist_id
    }

    pub(crate) fn browse_body(playlist_id: &str) -> Value {
        json!({ "browseId": format!("VL{playlist_id}") })
    }

    /// Videos and next token of a first or continuation response
    pub(crate) fn parse_page(
        response: &RawNode,
        continuation: Option<&str>,
    ) -> Result<Page<VideoCompact>> {
        let items = page_items(
            response,
            continuation,
            |r| r.pointer(PLAYLIST_CONTENTS)?.as_array(),
            "playlist videos",
        )?;
        let next = extract_continuation(items.iter().copied());
        Ok(Page::new(load_renderers(items, renderers::VIDEO)?, next))
    }
}

#[async_trait]
impl PageFetcher for PlaylistVideos {
    type Item = VideoCompact;

    async fn fetch(&self, continuation: Option<&str>) -> Result<Page<VideoCompact>> {
        let response = request_page(
            &self.http,
            BROWSE_ENDPOINT,
            || Self::browse_body(&self.playlist_id),
            continuation,
        )
        .await?;

        let page = Self::parse_page(&response, continuation)?;
        debug!("Playlist {}: {} videos", self.playlist_id, page.items.len());
        Ok(page)
    }
}

// ============================================================================
// Video Comments
// ============================================================================

/// Top-level comments of a video, in the provider's default order
///
/// The watch page only points at the comment section; the first page of
/// comments costs a second request with that token.
#[derive(Debug, Clone)]
pub struct VideoComments {
    http: Arc<HttpClient>,
    video_id: String,
}

impl VideoComments {
    pub(crate) fn new(http: Arc<HttpClient>, video_id: String) -> Self {
        Self { http, video_id }
    }

    /// The video being listed
    pub fn video_id(&self) -> &str {
        &self.video_id
    }
}

/// Token that opens the comment section of a watch page
fn comment_section_token(watch: &RawNode) -> Option<ContinuationToken> {
    let section = watch
        .pointer(WATCH_CONTENTS)?
        .as_array()?
        .iter()
        .filter_map(|item| item.get("itemSectionRenderer"))
        .find(|section| {
            section.get("sectionIdentifier").and_then(Value::as_str) == Some(COMMENT_SECTION_ID)
        })?;
    extract_continuation(section.get("contents")?.as_array()?)
}

#[async_trait]
impl PageFetcher for VideoComments {
    type Item = Comment;

    async fn fetch(&self, continuation: Option<&str>) -> Result<Page<Comment>> {
        let token = match continuation {
            Some(token) => token.to_string(),
            None => {
                let watch = self
                    .http
                    .post_json(NEXT_ENDPOINT, json!({ "videoId": self.video_id }))
                    .await?;
                match comment_section_token(&watch) {
                    Some(token) => token,
                    None => {
                        debug!("Video {}: comments unavailable", self.video_id);
                        return Ok(Page::empty());
                    }
                }
            }
        };

        let response = self
            .http
            .post_json(NEXT_ENDPOINT, json!({ "continuation": token }))
            .await?;
        let items = flatten_items(continuation_items(&response).unwrap_or_default());
        let next = extract_continuation(items.iter().copied());
        let comments: Vec<Comment> = load_renderers(items, renderers::COMMENT)?;

        debug!("Video {}: {} comments", self.video_id, comments.len());
        Ok(Page::new(comments, next))
    }
}
