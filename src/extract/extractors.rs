//! Extractor implementations
//!
//! Every function here is total: a missing or oddly shaped field yields
//! `None`/`false`, never an error. Identity checks live in the loaders.

use super::types::TextShape;
use crate::types::RawNode;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Failed to compile non-digit regex"));

static SHORT_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9][0-9.,]*)\s*([KMB])?\b").expect("Failed to compile short count regex")
});

// ============================================================================
// Text
// ============================================================================

/// Resolve a text node using the first present shape
///
/// Empty results are treated as absent so callers can fall through to
/// another candidate field.
pub fn text(node: Option<&RawNode>) -> Option<String> {
    let node = node?;
    TextShape::PRIORITY
        .iter()
        .find_map(|shape| shape.resolve(node))
        .filter(|s| !s.is_empty())
}

/// Resolve the text field stored under `key`
pub fn text_of(node: &RawNode, key: &str) -> Option<String> {
    text(node.get(key))
}

/// First non-empty text among several candidate JSON pointers
pub fn first_text(node: &RawNode, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .find_map(|pointer| text(node.pointer(pointer)))
}

/// String scalar at a JSON pointer
pub fn string_at(node: &RawNode, pointer: &str) -> Option<String> {
    node.pointer(pointer)
        .and_then(RawNode::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ============================================================================
// Renderer Dispatch
// ============================================================================

/// First renderer tag present on the node, in candidate order
pub fn first_renderer<'a>(
    node: &'a RawNode,
    candidates: &[&'static str],
) -> Option<(&'static str, &'a RawNode)> {
    candidates
        .iter()
        .find_map(|tag| node.get(*tag).map(|inner| (*tag, inner)))
}

// ============================================================================
// Numbers
// ============================================================================

/// Parse a human-formatted count such as `"1,234 views"`
///
/// Zero and digit-free text both collapse to `None`.
pub fn parse_count(text: &str) -> Option<u64> {
    let digits = NON_DIGIT.replace_all(text, "");
    digits.parse::<u64>().ok().filter(|n| *n > 0)
}

/// Parse an abbreviated count such as `"1.2K"` or `"3M"`
///
/// Plain counts (`"17"`, `"1,234"`) pass through. Zero collapses to `None`.
pub fn parse_short_count(text: &str) -> Option<u64> {
    let caps = SHORT_COUNT.captures(text)?;
    let number: f64 = caps[1].replace(',', "").parse().ok()?;
    let multiplier = match caps.get(2).map(|m| m.as_str().to_ascii_uppercase()).as_deref() {
        Some("K") => 1e3,
        Some("M") => 1e6,
        Some("B") => 1e9,
        _ => 1.0,
    };
    let count = (number * multiplier).round() as u64;
    (count > 0).then_some(count)
}

/// Parse a clock-style duration (`"1:02:03"`, `"4:05"`, `"59"`) into seconds
///
/// Each segment is stripped of non-digits first. Zero collapses to `None`.
pub fn parse_duration(text: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut seen = false;
    for segment in text.split([':', '.']) {
        let digits = NON_DIGIT.replace_all(segment, "");
        if digits.is_empty() {
            continue;
        }
        let value = digits.parse::<u64>().ok()?;
        total = total.checked_mul(60)?.checked_add(value)?;
        seen = true;
    }
    if seen && total > 0 {
        Some(total)
    } else {
        None
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Whether any `metadataBadgeRenderer` in `node.badges` has the given style
pub fn has_badge_style(node: &RawNode, style: &str) -> bool {
    node.get("badges")
        .and_then(RawNode::as_array)
        .is_some_and(|badges| {
            badges.iter().any(|badge| {
                badge
                    .pointer("/metadataBadgeRenderer/style")
                    .and_then(RawNode::as_str)
                    == Some(style)
            })
        })
}
