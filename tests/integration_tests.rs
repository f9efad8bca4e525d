//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: client → innertube requests → paginated entities

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youtubei::http::{HttpClient, HttpClientConfig};
use youtubei::types::BackoffType;
use youtubei::{Client, Content, Error, SearchType};

fn test_client(server: &MockServer, max_retries: u32) -> Client {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(max_retries)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .no_rate_limit()
        .build();
    Client::from_http(HttpClient::with_config(config).unwrap())
}

fn video(id: &str) -> Value {
    json!({"videoRenderer": {
        "videoId": id,
        "title": {"runs": [{"text": format!("Video {id}")}]},
        "lengthText": {"simpleText": "1:00"}
    }})
}

fn continuation(token: &str) -> Value {
    json!({"continuationItemRenderer": {
        "continuationEndpoint": {"continuationCommand": {"token": token}}
    }})
}

fn append_action(items: Vec<Value>) -> Value {
    json!({"onResponseReceivedCommands": [
        {"appendContinuationItemsAction": {"continuationItems": items}}
    ]})
}

// ============================================================================
// Search Tests
// ============================================================================

fn search_first_page() -> Value {
    json!({"contents": {"twoColumnSearchResultsRenderer": {"primaryContents": {
        "sectionListRenderer": {"contents": [
            {"itemSectionRenderer": {"contents": [
                video("v1"),
                {"playlistRenderer": {"playlistId": "PL1", "title": {"simpleText": "Mix"}, "videoCount": "12"}},
                {"channelRenderer": {"channelId": "UC1", "title": {"simpleText": "Rustaceans"}}},
                {"shelfRenderer": {}}
            ]}},
            continuation("search-2")
        ]}
    }}}})
}

#[tokio::test]
async fn test_search_pages_until_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"query": "rust"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_first_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"continuation": "search-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(append_action(vec![
            json!({"itemSectionRenderer": {"contents": [video("v2")]}}),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let results = client.search("rust", SearchType::All);

    let first = results.next(1).await.unwrap();
    assert_eq!(
        first.iter().map(Content::id).collect::<Vec<_>>(),
        vec!["v1", "PL1", "UC1"]
    );
    assert!(results.has_more().await);
    assert_eq!(results.continuation().await.as_deref(), Some("search-2"));

    let rest = results.next(0).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].as_video().unwrap().title, "Video v2");
    assert!(!results.has_more().await);
    assert_eq!(results.items().await.len(), 4);

    // Exhausted collections never hit the network again
    assert!(results.next(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_type_sends_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"query": "rust", "params": "EgIQAQ=="})))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_first_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let results = client.search("rust", SearchType::Video);
    results.next(1).await.unwrap();
}

#[tokio::test]
async fn test_search_without_contents_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseContext": {}})))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let results = client.search("rust", SearchType::All);

    let err = results.next(0).await.unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(results.items().await.is_empty());
    assert!(results.has_more().await);
}

#[tokio::test]
async fn test_overlapping_fetch_fails_fast() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(search_first_page())
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let results = client.search("rust", SearchType::All);

    let (first, second) = tokio::join!(results.next(1), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        results.next(1).await
    });

    assert_eq!(first.unwrap().len(), 3);
    assert!(matches!(second.unwrap_err(), Error::ConcurrentFetch));
    assert!(!results.is_locked());
}

// ============================================================================
// Channel Videos Tests
// ============================================================================

#[tokio::test]
async fn test_channel_videos_stop_on_repeated_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"browseId": "UC123", "params": "EgZ2aWRlb3M="})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": {"twoColumnBrowseResultsRenderer": {"tabs": [
                {"tabRenderer": {"title": "Home", "selected": false}},
                {"tabRenderer": {"title": "Videos", "selected": true, "content": {
                    "richGridRenderer": {"contents": [
                        {"richItemRenderer": {"content": video("c1")}},
                        {"richItemRenderer": {"content": video("c2")}},
                        continuation("chan-2")
                    ]}
                }}}
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The last page hands back the token that requested it
    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"continuation": "chan-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "onResponseReceivedActions": [{"appendContinuationItemsAction": {"continuationItems": [
                {"richItemRenderer": {"content": video("c3")}},
                continuation("chan-2")
            ]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let videos = client.channel_videos("UC123");

    let all = videos.next(0).await.unwrap();
    let ids: Vec<_> = all.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert!(!videos.has_more().await);
    assert_eq!(videos.fetcher().channel_id(), "UC123");

    // Videos tab selector on the first request only
    let requests = server.received_requests().await.unwrap();
    let bodies: Vec<Value> = requests
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0]["browseId"], "UC123");
    assert_eq!(bodies[0]["params"], "EgZ2aWRlb3M=");
    assert_eq!(bodies[0]["context"]["client"]["clientName"], "WEB");
    assert_eq!(bodies[1]["continuation"], "chan-2");
    assert!(bodies[1].get("params").is_none());
}

// ============================================================================
// Playlist Videos Tests
// ============================================================================

#[tokio::test]
async fn test_playlist_failed_page_can_be_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"browseId": "VLPL123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": {"twoColumnBrowseResultsRenderer": {"tabs": [{"tabRenderer": {"content": {
                "sectionListRenderer": {"contents": [{"itemSectionRenderer": {"contents": [
                    {"playlistVideoListRenderer": {"contents": [
                        {"playlistVideoRenderer": {"videoId": "p1", "lengthSeconds": "90"}},
                        {"playlistVideoRenderer": {"videoId": "p2", "lengthSeconds": "120"}},
                        continuation("pl-2")
                    ]}}
                ]}}]}
            }}}]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"continuation": "pl-2"})))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"continuation": "pl-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(append_action(vec![
            json!({"playlistVideoRenderer": {"videoId": "p3", "lengthSeconds": "60"}}),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let videos = client.playlist_videos("PL123");

    let err = videos.next(0).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));

    // First page stays committed, the failed one does not
    assert_eq!(videos.items().await.len(), 2);
    assert_eq!(videos.continuation().await.as_deref(), Some("pl-2"));
    assert!(videos.has_more().await);

    let rest = videos.next(0).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id, "p3");
    assert_eq!(rest[0].duration, Some(60));
    assert!(!videos.has_more().await);
}

fn playlist_page() -> Value {
    json!({
        "contents": {"twoColumnBrowseResultsRenderer": {"tabs": [{"tabRenderer": {"content": {
            "sectionListRenderer": {"contents": [{"itemSectionRenderer": {"contents": [
                {"playlistVideoListRenderer": {"contents": [
                    {"playlistVideoRenderer": {"videoId": "p1", "lengthSeconds": "90"}},
                    continuation("pl-2")
                ]}}
            ]}}]}
        }}}]}},
        "sidebar": {"playlistSidebarRenderer": {"items": [
            {"playlistSidebarPrimaryInfoRenderer": {
                "title": {"simpleText": "Rust talks"},
                "stats": [{"runs": [{"text": "2"}, {"text": " videos"}]}, {"simpleText": "10 views"}]
            }},
            {"playlistSidebarSecondaryInfoRenderer": {"videoOwner": {"videoOwnerRenderer": {
                "title": {"runs": [{
                    "text": "Rustaceans",
                    "navigationEndpoint": {"browseEndpoint": {"browseId": "UCrust"}}
                }]}
            }}}}
        ]}}
    })
}

#[tokio::test]
async fn test_get_playlist_continues_after_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"browseId": "VLPL123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist_page()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"continuation": "pl-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(append_action(vec![
            json!({"playlistVideoRenderer": {"videoId": "p2", "lengthSeconds": "60"}}),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let playlist = client.get_playlist("PL123").await.unwrap().unwrap();

    assert_eq!(playlist.title, "Rust talks");
    assert_eq!(playlist.video_count, Some(2));
    assert_eq!(playlist.view_count, Some(10));
    assert_eq!(playlist.channel.as_ref().unwrap().name, "Rustaceans");

    // The first page came with the browse response
    assert_eq!(playlist.videos.len().await, 1);
    assert!(playlist.videos.has_more().await);

    let rest = playlist.videos.next(0).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id, "p2");
    assert_eq!(
        playlist.videos.items().await.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(),
        vec!["p1", "p2"]
    );
    assert!(!playlist.videos.has_more().await);
}

#[tokio::test]
async fn test_get_unavailable_playlist() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "alerts": [{"alertRenderer": {"type": "ERROR", "text": {"simpleText": "The playlist does not exist."}}}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    assert!(client.get_playlist("PLgone").await.unwrap().is_none());
}

// ============================================================================
// Channel Tests
// ============================================================================

#[tokio::test]
async fn test_get_channel_with_first_uploads() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/browse"))
        .and(body_partial_json(json!({"browseId": "UC123", "params": "EgZ2aWRlb3M="})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "header": {"c4TabbedHeaderRenderer": {
                "channelId": "UC123",
                "title": "Rustaceans",
                "subscriberCountText": {"simpleText": "12K subscribers"}
            }},
            "contents": {"twoColumnBrowseResultsRenderer": {"tabs": [
                {"tabRenderer": {"title": "Videos", "selected": true, "content": {
                    "richGridRenderer": {"contents": [
                        {"richItemRenderer": {"content": video("c1")}}
                    ]}
                }}}
            ]}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let channel = client.get_channel("UC123").await.unwrap().unwrap();

    assert_eq!(channel.name, "Rustaceans");
    assert_eq!(channel.subscriber_count.as_deref(), Some("12K subscribers"));
    assert_eq!(channel.videos.items().await[0].id, "c1");
    assert!(!channel.videos.has_more().await);
    assert!(channel.videos.next(0).await.unwrap().is_empty());
}

// ============================================================================
// Comment Tests
// ============================================================================

fn comment(id: &str) -> Value {
    json!({"commentThreadRenderer": {"comment": {"commentRenderer": {
        "commentId": id,
        "contentText": {"simpleText": format!("Comment {id}")},
        "voteCount": {"simpleText": "3"}
    }}}})
}

#[tokio::test]
async fn test_video_comments_open_section_then_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .and(body_partial_json(json!({"videoId": "vid1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": {"twoColumnWatchNextResults": {"results": {"results": {"contents": [
                {"videoPrimaryInfoRenderer": {}},
                {"itemSectionRenderer": {
                    "sectionIdentifier": "comment-item-section",
                    "contents": [continuation("comments-1")]
                }}
            ]}}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .and(body_partial_json(json!({"continuation": "comments-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "onResponseReceivedEndpoints": [
                {"reloadContinuationItemsCommand": {"continuationItems": [
                    {"commentsHeaderRenderer": {"countText": {"runs": [{"text": "3"}]}}}
                ]}},
                {"reloadContinuationItemsCommand": {"continuationItems": [
                    comment("k1"),
                    comment("k2"),
                    continuation("comments-2")
                ]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .and(body_partial_json(json!({"continuation": "comments-2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "onResponseReceivedEndpoints": [
                {"appendContinuationItemsAction": {"continuationItems": [comment("k3")]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let comments = client.video_comments("vid1");

    let first = comments.next(1).await.unwrap();
    assert_eq!(
        first.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["k1", "k2"]
    );
    assert_eq!(first[0].like_count, Some(3));
    assert_eq!(comments.continuation().await.as_deref(), Some("comments-2"));

    let rest = comments.next(0).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].content, "Comment k3");
    assert!(!comments.has_more().await);
    assert_eq!(comments.fetcher().video_id(), "vid1");
}

#[tokio::test]
async fn test_video_comments_disabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": {"twoColumnWatchNextResults": {"results": {"results": {"contents": [
                {"itemSectionRenderer": {
                    "sectionIdentifier": "comment-item-section",
                    "contents": [{"messageRenderer": {"text": {"simpleText": "Comments are turned off."}}}]
                }}
            ]}}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let comments = client.video_comments("quiet");

    assert!(comments.next(0).await.unwrap().is_empty());
    assert!(!comments.has_more().await);
}

// ============================================================================
// Video Tests
// ============================================================================

#[tokio::test]
async fn test_get_video() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/player"))
        .and(body_partial_json(json!({"videoId": "vid1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playabilityStatus": {"status": "OK"},
            "videoDetails": {
                "videoId": "vid1",
                "title": "A video",
                "lengthSeconds": "75",
                "keywords": ["rust"],
                "channelId": "UC1",
                "author": "Rustaceans",
                "shortDescription": "About rust",
                "viewCount": "42",
                "isLiveContent": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .and(body_partial_json(json!({"videoId": "vid1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contents": {"twoColumnWatchNextResults": {
                "secondaryResults": {"secondaryResults": {"results": [
                    {"compactVideoRenderer": {"videoId": "rel1"}}
                ]}}
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let video = client.get_video("vid1").await.unwrap().unwrap();

    assert_eq!(video.id, "vid1");
    assert_eq!(video.duration, Some(75));
    assert_eq!(video.tags, vec!["rust".to_string()]);
    assert_eq!(video.related.len(), 1);
    assert_eq!(video.related[0].id(), "rel1");
}

#[tokio::test]
async fn test_get_unavailable_video() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/player"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playabilityStatus": {"status": "ERROR", "reason": "Video unavailable"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    assert!(client.get_video("gone").await.unwrap().is_none());
}

// ============================================================================
// Transcript Tests
// ============================================================================

#[tokio::test]
async fn test_get_video_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get_transcript"))
        .and(body_partial_json(json!({"params": "CgZhYmMxMjM="})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "actions": [{"updateEngagementPanelAction": {"content": {"transcriptRenderer": {
                "body": {"transcriptBodyRenderer": {"cueGroups": [
                    {"transcriptCueGroupRenderer": {"cues": [{"transcriptCueRenderer": {
                        "cue": {"simpleText": "hello"},
                        "startOffsetMs": "0",
                        "durationMs": "1200"
                    }}]}},
                    {"transcriptCueGroupRenderer": {"cues": [{"transcriptCueRenderer": {
                        "cue": {"runs": [{"text": "world"}]},
                        "startOffsetMs": "1200",
                        "durationMs": "800"
                    }}]}}
                ]}}
            }}}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let cues = client.get_video_transcript("abc123").await.unwrap().unwrap();

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].text, "hello");
    assert_eq!(cues[1].start_ms, 1200);
    assert_eq!(cues[1].end_ms(), 2000);
}

#[tokio::test]
async fn test_missing_transcript() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get_transcript"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responseContext": {}})))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    assert!(client.get_video_transcript("abc123").await.unwrap().is_none());
}
