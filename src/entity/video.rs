//! Full video details

use super::channel_compact::ChannelCompact;
use super::content::Content;
use crate::error::{Error, Result};
use crate::extract::{first_renderer, parse_count, parse_duration, string_at, text_of};
use crate::types::{RawNode, Thumbnail};
use serde::Serialize;

const RESULTS_POINTER: &str = "/contents/twoColumnWatchNextResults/results/results/contents";
const SECONDARY_POINTER: &str =
    "/contents/twoColumnWatchNextResults/secondaryResults/secondaryResults/results";

/// Like button label candidates, newest layout first
const LIKE_LABEL_POINTERS: &[&str] = &[
    "/videoActions/menuRenderer/topLevelButtons/0/segmentedLikeDislikeButtonRenderer/likeButton/toggleButtonRenderer/defaultText/accessibility/accessibilityData/label",
    "/videoActions/menuRenderer/topLevelButtons/0/toggleButtonRenderer/defaultText/accessibility/accessibilityData/label",
];

/// Dislike button label candidates, newest layout first
const DISLIKE_LABEL_POINTERS: &[&str] = &[
    "/videoActions/menuRenderer/topLevelButtons/0/segmentedLikeDislikeButtonRenderer/dislikeButton/toggleButtonRenderer/defaultText/accessibility/accessibilityData/label",
    "/videoActions/menuRenderer/topLevelButtons/1/toggleButtonRenderer/defaultText/accessibility/accessibilityData/label",
];

/// A video with everything the watch page shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Video {
    /// Video id
    pub id: String,
    /// Title, empty when neither response carries one
    pub title: String,
    /// Duration in seconds, `None` for live streams
    pub duration: Option<u64>,
    /// Thumbnail renditions, smallest first
    pub thumbnails: Vec<Thumbnail>,
    /// Full description text
    pub description: String,
    /// Owning channel, with its avatar when the watch page has one
    pub channel: Option<ChannelCompact>,
    /// Upload date as displayed (`"Jan 1, 2024"`)
    pub upload_date: Option<String>,
    /// Total views
    pub view_count: Option<u64>,
    /// Likes, from the like button label
    pub like_count: Option<u64>,
    /// Dislikes, from the dislike button label when the provider still shows one
    pub dislike_count: Option<u64>,
    /// Was this video a live stream?
    pub is_live_content: bool,
    /// Keywords, or the hashtags above the title
    pub tags: Vec<String>,
    /// Autoplay candidate
    pub up_next: Option<Content>,
    /// Sidebar recommendations in display order
    pub related: Vec<Content>,
}

impl Video {
    /// Build a video from the `player` and `next` responses for the same id
    pub fn from_responses(player: &RawNode, next: &RawNode) -> Result<Self> {
        let details = player
            .get("videoDetails")
            .ok_or_else(|| Error::malformed("Video", "videoDetails"))?;
        let id = string_at(details, "/videoId")
            .ok_or_else(|| Error::malformed("Video", "videoId"))?;

        let results = next
            .pointer(RESULTS_POINTER)
            .and_then(RawNode::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let primary = find_renderer(results, "videoPrimaryInfoRenderer");
        let secondary = find_renderer(results, "videoSecondaryInfoRenderer");

        let title = string_at(details, "/title")
            .or_else(|| primary.and_then(|p| text_of(p, "title")))
            .unwrap_or_default();

        let description = string_at(details, "/shortDescription")
            .or_else(|| secondary.and_then(|s| text_of(s, "description")))
            .or_else(|| {
                secondary.and_then(|s| string_at(s, "/attributedDescription/content"))
            })
            .unwrap_or_default();

        let channel = secondary
            .and_then(|s| s.pointer("/owner/videoOwnerRenderer"))
            .and_then(|owner| {
                let channel = ChannelCompact::from_byline(owner.get("title")?)?;
                Some(channel.with_thumbnails(
                    owner
                        .get("thumbnail")
                        .map(Thumbnail::list_from)
                        .unwrap_or_default(),
                ))
            })
            .or_else(|| {
                let id = string_at(details, "/channelId")?;
                Some(ChannelCompact::new(
                    id,
                    string_at(details, "/author").unwrap_or_default(),
                ))
            });

        let like_count = primary.and_then(|p| button_count(p, LIKE_LABEL_POINTERS));
        let dislike_count = primary.and_then(|p| button_count(p, DISLIKE_LABEL_POINTERS));

        let (up_next, related) = load_secondary(next)?;

        Ok(Self {
            id,
            title,
            duration: string_at(details, "/lengthSeconds").and_then(|s| parse_duration(&s)),
            thumbnails: details
                .get("thumbnail")
                .map(Thumbnail::list_from)
                .unwrap_or_default(),
            description,
            channel,
            upload_date: primary.and_then(|p| text_of(p, "dateText")),
            view_count: string_at(details, "/viewCount").and_then(|s| parse_count(&s)),
            like_count,
            dislike_count,
            is_live_content: details
                .get("isLiveContent")
                .and_then(RawNode::as_bool)
                .unwrap_or(false),
            tags: load_tags(details, primary),
            up_next,
            related,
        })
    }
}

/// Count from the first present button accessibility label
fn button_count(primary: &RawNode, pointers: &[&str]) -> Option<u64> {
    pointers
        .iter()
        .find_map(|pointer| string_at(primary, pointer))
        .and_then(|label| parse_count(&label))
}

/// Inner node of the first element carrying `tag`
fn find_renderer<'a>(items: &'a [RawNode], tag: &'static str) -> Option<&'a RawNode> {
    items
        .iter()
        .find_map(|item| first_renderer(item, &[tag]).map(|(_, inner)| inner))
}

/// Keywords from the player, or hashtags from the super title
fn load_tags(details: &RawNode, primary: Option<&RawNode>) -> Vec<String> {
    if let Some(keywords) = details.get("keywords").and_then(RawNode::as_array) {
        return keywords
            .iter()
            .filter_map(RawNode::as_str)
            .map(str::to_string)
            .collect();
    }

    primary
        .and_then(|p| p.pointer("/superTitleLink/runs"))
        .and_then(RawNode::as_array)
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("text").and_then(RawNode::as_str))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Autoplay candidate and related items from the sidebar
fn load_secondary(next: &RawNode) -> Result<(Option<Content>, Vec<Content>)> {
    let Some(items) = next.pointer(SECONDARY_POINTER).and_then(RawNode::as_array) else {
        return Ok((None, Vec::new()));
    };

    let mut up_next = None;
    let mut related = Vec::new();
    for item in crate::continuation::flatten_items(items) {
        if let Some(autoplay) = item.pointer("/compactAutoplayRenderer/contents/0") {
            up_next = Content::load_any(autoplay)?;
        } else if let Some(content) = Content::load_any(item)? {
            related.push(content);
        }
    }

    Ok((up_next, related))
}
