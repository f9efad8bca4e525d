//! Common types used throughout youtubei
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Untyped provider payload (re-exported from serde_json)
pub type RawNode = serde_json::Value;

/// Opaque, provider-issued pagination cursor
pub type ContinuationToken = String;

// ============================================================================
// Provider Constants
// ============================================================================

/// Public site root, used to build canonical URLs
pub const BASE_URL: &str = "https://www.youtube.com";

/// Default innertube API root
pub const API_BASE_URL: &str = "https://www.youtube.com/youtubei/v1";

/// Default web client version sent in the request context
pub const DEFAULT_CLIENT_VERSION: &str = "2.20240101.00.00";

// ============================================================================
// Thumbnail
// ============================================================================

/// A single thumbnail rendition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL
    pub url: String,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl Thumbnail {
    /// Parse a `{ "thumbnails": [...] }` container, skipping unusable entries
    pub fn list_from(node: &RawNode) -> Vec<Thumbnail> {
        node.get("thumbnails")
            .and_then(RawNode::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|t| serde_json::from_value(t.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Retry backoff strategy used by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Utility Traits
// ============================================================================

/// Extension trait for Option<String>
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backoff_type_serde() {
        let backoff: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(backoff, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_thumbnail_list() {
        let node = json!({
            "thumbnails": [
                {"url": "https://i.ytimg.com/a.jpg", "width": 120, "height": 90},
                {"url": "https://i.ytimg.com/b.jpg"},
                {"width": 10}
            ]
        });
        let thumbnails = Thumbnail::list_from(&node);
        assert_eq!(thumbnails.len(), 2);
        assert_eq!(thumbnails[0].width, Some(120));
        assert_eq!(thumbnails[1].height, None);

        assert!(Thumbnail::list_from(&json!({})).is_empty());
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
