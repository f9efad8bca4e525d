//! Client facade

use super::fetchers::{
    ChannelVideos, PlaylistVideos, SearchResults, SearchType, VideoComments, BROWSE_ENDPOINT,
    NEXT_ENDPOINT,
};
use crate::config::ClientConfig;
use crate::entity::{Channel, Playlist, TranscriptCue, Video};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::Continuable;
use crate::proto::{self, TranscriptParams};
use crate::types::RawNode;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

const PLAYER_ENDPOINT: &str = "player";
const TRANSCRIPT_ENDPOINT: &str = "get_transcript";

/// Where a transcript response keeps its cues, oldest layout first
const TRANSCRIPT_POINTERS: &[&str] = &[
    "/actions/0/updateEngagementPanelAction/content/transcriptRenderer/body/transcriptBodyRenderer/cueGroups",
    "/actions/0/updateEngagementPanelAction/content/transcriptRenderer/content/transcriptSearchPanelRenderer/body/transcriptSegmentListRenderer/initialSegments",
];

/// Innertube client
///
/// Cheap to clone; every collection it hands out shares the same transport,
/// rate limiter included.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from a validated configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self::from_http(http))
    }

    /// Wrap an already configured transport
    pub fn from_http(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Search results for `query`, positioned before the first page
    pub fn search(
        &self,
        query: impl Into<String>,
        search_type: SearchType,
    ) -> Continuable<SearchResults> {
        Continuable::new(SearchResults::new(
            Arc::clone(&self.http),
            query.into(),
            search_type,
        ))
    }

    /// Uploads of a channel
    ///
    /// The channel videos tab is known to hand back its own token at the end
    /// of the list, so a token that did not advance ends the collection.
    pub fn channel_videos(&self, channel_id: impl Into<String>) -> Continuable<ChannelVideos> {
        Continuable::new(ChannelVideos::new(Arc::clone(&self.http), channel_id.into()))
            .with_strict_continuation_check(true)
    }

    /// Videos of a playlist
    pub fn playlist_videos(&self, playlist_id: impl Into<String>) -> Continuable<PlaylistVideos> {
        Continuable::new(PlaylistVideos::new(
            Arc::clone(&self.http),
            playlist_id.into(),
        ))
    }

    /// Top-level comments of a video
    ///
    /// Videos with comments turned off yield an empty collection.
    pub fn video_comments(&self, video_id: impl Into<String>) -> Continuable<VideoComments> {
        Continuable::new(VideoComments::new(Arc::clone(&self.http), video_id.into()))
    }

    /// Playlist metadata with its first page of videos, `None` when unavailable
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Option<Playlist>> {
        let response = self
            .http
            .post_json(BROWSE_ENDPOINT, PlaylistVideos::browse_body(playlist_id))
            .await?;

        let playlist = Playlist::from_browse(playlist_id, &response, || {
            let page = PlaylistVideos::parse_page(&response, None)?;
            Ok(Continuable::from_first_page(
                PlaylistVideos::new(Arc::clone(&self.http), playlist_id.to_string()),
                page,
            ))
        })?;
        if playlist.is_none() {
            info!("Playlist {} is unavailable", playlist_id);
        }
        Ok(playlist)
    }

    /// Channel details with its first page of uploads, `None` when unavailable
    pub async fn get_channel(&self, channel_id: &str) -> Result<Option<Channel>> {
        let response = self
            .http
            .post_json(BROWSE_ENDPOINT, ChannelVideos::browse_body(channel_id))
            .await?;

        let channel = Channel::from_browse(channel_id, &response, || {
            let page = ChannelVideos::parse_page(&response, None)?;
            Ok(Continuable::from_first_page(
                ChannelVideos::new(Arc::clone(&self.http), channel_id.to_string()),
                page,
            )
            .with_strict_continuation_check(true))
        })?;
        if channel.is_none() {
            info!("Channel {} is unavailable", channel_id);
        }
        Ok(channel)
    }

    /// Full video details, `None` when the video is unavailable
    pub async fn get_video(&self, video_id: &str) -> Result<Option<Video>> {
        let (player, next) = futures::try_join!(
            self.http
                .post_json(PLAYER_ENDPOINT, json!({ "videoId": video_id })),
            self.http.post_json(NEXT_ENDPOINT, json!({ "videoId": video_id })),
        )?;

        if !is_playable(&player) {
            info!("Video {} is unavailable", video_id);
            return Ok(None);
        }

        Video::from_responses(&player, &next).map(Some)
    }

    /// Transcript cues of a video, `None` when it has no transcript
    pub async fn get_video_transcript(&self, video_id: &str) -> Result<Option<Vec<TranscriptCue>>> {
        let params = proto::encode(&TranscriptParams::for_video(video_id));
        let response = self
            .http
            .post_json(TRANSCRIPT_ENDPOINT, json!({ "params": params }))
            .await?;

        let Some(nodes) = transcript_nodes(&response) else {
            info!("Video {} has no transcript", video_id);
            return Ok(None);
        };

        let mut cues = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(cue) = TranscriptCue::load_any(node)? {
                cues.push(cue);
            }
        }
        debug!("Video {}: {} transcript cues", video_id, cues.len());
        Ok(Some(cues))
    }
}

/// A player response describes a video only when it carries its details
fn is_playable(player: &RawNode) -> bool {
    let status = player
        .pointer("/playabilityStatus/status")
        .and_then(Value::as_str);
    player.get("videoDetails").is_some() && status != Some("ERROR")
}

fn transcript_nodes(response: &RawNode) -> Option<&Vec<RawNode>> {
    TRANSCRIPT_POINTERS
        .iter()
        .find_map(|pointer| response.pointer(pointer)?.as_array())
}
