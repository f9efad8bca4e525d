//! CLI module
//!
//! Command-line interface over [`Client`](crate::Client).
//!
//! # Commands
//!
//! - `search` - Search videos, playlists and channels
//! - `channel-videos` - List a channel's uploads
//! - `playlist` - List a playlist's videos
//! - `video` - Show full video details
//! - `transcript` - Print a video's transcript

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SearchKind};
pub use runner::Runner;
