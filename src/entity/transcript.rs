//! Transcript cues

use super::types::{required, Loadable};
use crate::error::{Error, Result};
use crate::extract::{first_renderer, string_at, text_of};
use crate::types::RawNode;
use serde::Serialize;

/// One timed line of a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptCue {
    /// Spoken text
    pub text: String,
    /// Start offset in milliseconds
    pub start_ms: u64,
    /// Display duration in milliseconds
    pub duration_ms: u64,
}

impl TranscriptCue {
    /// Create a cue
    pub fn new(text: impl Into<String>, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            duration_ms,
        }
    }

    /// End offset in milliseconds
    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Load any element of a transcript list
    ///
    /// Handles both the cue-group layout and the segment layout; other
    /// elements (section headers) yield `Ok(None)`.
    pub fn load_any(node: &RawNode) -> Result<Option<Self>> {
        match first_renderer(node, &["transcriptCueGroupRenderer", "transcriptSegmentRenderer"])
        {
            Some(("transcriptCueGroupRenderer", group)) => group
                .pointer("/cues/0/transcriptCueRenderer")
                .map(Self::load)
                .transpose(),
            Some((_, segment)) => load_segment(segment).map(Some),
            None => Ok(None),
        }
    }
}

impl Loadable for TranscriptCue {
    const ENTITY: &'static str = "TranscriptCue";

    /// Load a `transcriptCueRenderer`
    fn load(raw: &RawNode) -> Result<Self> {
        let start_ms = parse_millis(&required(raw, Self::ENTITY, "/startOffsetMs")?)?;
        let duration_ms = match string_at(raw, "/durationMs") {
            Some(ms) => parse_millis(&ms)?,
            None => 0,
        };
        Ok(Self::new(
            text_of(raw, "cue").unwrap_or_default(),
            start_ms,
            duration_ms,
        ))
    }
}

/// `transcriptSegmentRenderer` carries start and end instead of a duration
fn load_segment(raw: &RawNode) -> Result<TranscriptCue> {
    let start_ms = parse_millis(&required(raw, TranscriptCue::ENTITY, "/startMs")?)?;
    let end_ms = match string_at(raw, "/endMs") {
        Some(ms) => parse_millis(&ms)?,
        None => start_ms,
    };
    Ok(TranscriptCue::new(
        text_of(raw, "snippet").unwrap_or_default(),
        start_ms,
        end_ms.saturating_sub(start_ms),
    ))
}

fn parse_millis(value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|e| Error::parse(format!("Invalid millisecond offset '{value}': {e}")))
}
