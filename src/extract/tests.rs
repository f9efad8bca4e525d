//! Tests for field extraction

use super::*;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Text Tests
// ============================================================================

#[test]
fn test_runs_and_simple_text_agree() {
    let runs = json!({"runs": [{"text": "Hello"}, {"text": " World"}]});
    let simple = json!({"simpleText": "Hello World"});

    assert_eq!(text(Some(&runs)), Some("Hello World".to_string()));
    assert_eq!(text(Some(&runs)), text(Some(&simple)));
}

#[test]
fn test_simple_text_wins_over_runs() {
    let node = json!({"simpleText": "simple", "runs": [{"text": "runs"}]});
    assert_eq!(text(Some(&node)), Some("simple".to_string()));
}

#[test]
fn test_content_shape() {
    let node = json!({"content": "view model"});
    assert_eq!(text(Some(&node)), Some("view model".to_string()));
}

#[test]
fn test_text_absent_or_empty() {
    assert_eq!(text(None), None);
    assert_eq!(text(Some(&json!({}))), None);
    assert_eq!(text(Some(&json!({"simpleText": ""}))), None);
    assert_eq!(text(Some(&json!({"runs": []}))), None);
}

#[test]
fn test_text_of() {
    let node = json!({"title": {"runs": [{"text": "A"}, {"text": "B"}]}});
    assert_eq!(text_of(&node, "title"), Some("AB".to_string()));
    assert_eq!(text_of(&node, "missing"), None);
}

#[test]
fn test_first_text_falls_through() {
    let node = json!({
        "lengthText": {"simpleText": ""},
        "thumbnailOverlays": [
            {"thumbnailOverlayTimeStatusRenderer": {"text": {"simpleText": "4:05"}}}
        ]
    });
    let value = first_text(
        &node,
        &[
            "/lengthText",
            "/thumbnailOverlays/0/thumbnailOverlayTimeStatusRenderer/text",
        ],
    );
    assert_eq!(value, Some("4:05".to_string()));
}

#[test]
fn test_string_at() {
    let node = json!({"a": {"b": [{"c": "value"}, {"c": ""}]}});
    assert_eq!(string_at(&node, "/a/b/0/c"), Some("value".to_string()));
    assert_eq!(string_at(&node, "/a/b/1/c"), None);
    assert_eq!(string_at(&node, "/a/x"), None);
}

// ============================================================================
// Renderer Dispatch Tests
// ============================================================================

#[test]
fn test_first_renderer_respects_candidate_order() {
    let node = json!({"compactVideoRenderer": {"videoId": "b"}, "videoRenderer": {"videoId": "a"}});
    let (tag, inner) = first_renderer(&node, renderers::VIDEO).unwrap();
    assert_eq!(tag, "videoRenderer");
    assert_eq!(inner["videoId"], "a");
}

#[test]
fn test_first_renderer_unknown() {
    let node = json!({"shelfRenderer": {}});
    assert!(first_renderer(&node, renderers::VIDEO).is_none());
}

// ============================================================================
// Number Tests
// ============================================================================

#[test_case("1,234 views", Some(1234) ; "formatted views")]
#[test_case("No views", None ; "no digits")]
#[test_case("0 views", None ; "zero collapses")]
#[test_case("", None ; "empty")]
#[test_case("12 watching", Some(12) ; "live watchers")]
fn test_parse_count(input: &str, expected: Option<u64>) {
    assert_eq!(parse_count(input), expected);
}

#[test_case("17", Some(17) ; "plain")]
#[test_case("1,234", Some(1234) ; "grouped")]
#[test_case("1.2K", Some(1200) ; "thousands")]
#[test_case("3M", Some(3_000_000) ; "millions")]
#[test_case("2.5b", Some(2_500_000_000) ; "lowercase billions")]
#[test_case("12 K replies", Some(12_000) ; "spaced suffix")]
#[test_case("12 Kommentare", Some(12) ; "word after number")]
#[test_case("0", None ; "zero collapses")]
#[test_case("", None ; "empty")]
fn test_parse_short_count(input: &str, expected: Option<u64>) {
    assert_eq!(parse_short_count(input), expected);
}

#[test_case("4:05", Some(245) ; "minutes")]
#[test_case("1:02:03", Some(3723) ; "hours")]
#[test_case("59", Some(59) ; "seconds only")]
#[test_case("0:00", None ; "zero")]
#[test_case("", None ; "empty")]
#[test_case("LIVE", None ; "no digits")]
fn test_parse_duration(input: &str, expected: Option<u64>) {
    assert_eq!(parse_duration(input), expected);
}

// ============================================================================
// Badge Tests
// ============================================================================

#[test]
fn test_live_badge_present() {
    let node = json!({
        "badges": [
            {"metadataBadgeRenderer": {"style": "BADGE_STYLE_TYPE_SIMPLE"}},
            {"metadataBadgeRenderer": {"style": "BADGE_STYLE_TYPE_LIVE_NOW"}}
        ]
    });
    assert!(has_badge_style(&node, LIVE_NOW_BADGE_STYLE));
}

#[test]
fn test_live_badge_absent() {
    assert!(!has_badge_style(&json!({}), LIVE_NOW_BADGE_STYLE));
    let node = json!({"badges": [{"metadataBadgeRenderer": {"style": "BADGE_STYLE_TYPE_SIMPLE"}}]});
    assert!(!has_badge_style(&node, LIVE_NOW_BADGE_STYLE));
}
