//! Field extraction module
//!
//! Stateless helpers that pull values out of ambiguous provider nodes.
//!
//! # Overview
//!
//! The provider expresses the same logical field in several mutually
//! exclusive shapes depending on content type, viewport and experiment.
//! Each logical field has a closed set of known shapes ([`TextShape`],
//! renderer tag candidate lists) resolved in a fixed priority order.

mod extractors;
mod types;

pub use extractors::{
    first_renderer, first_text, has_badge_style, parse_count, parse_duration, parse_short_count,
    string_at, text, text_of,
};
pub use types::{renderers, TextShape, LIVE_NOW_BADGE_STYLE};

#[cfg(test)]
mod tests;
