//! CLI commands and argument parsing

use crate::client::SearchType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the innertube API from the command line
#[derive(Parser, Debug)]
#[command(name = "youtubei")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search videos, playlists and channels
    Search {
        /// Search query
        query: String,

        /// Restrict results to one kind
        #[arg(short = 't', long = "type", default_value = "all")]
        kind: SearchKind,

        /// Stop once at least this many items arrived (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List the uploads of a channel
    ChannelVideos {
        /// Channel id (UC...)
        channel_id: String,

        /// Stop once at least this many items arrived (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show a channel and its latest uploads
    Channel {
        /// Channel id (UC...)
        channel_id: String,

        /// Stop once at least this many uploads were printed (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show a playlist and its videos
    Playlist {
        /// Playlist id (PL...)
        playlist_id: String,

        /// Stop once at least this many items arrived (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show full details of a video
    Video {
        /// Video id
        video_id: String,
    },

    /// List the top-level comments of a video
    Comments {
        /// Video id
        video_id: String,

        /// Stop once at least this many items arrived (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Print the transcript of a video
    Transcript {
        /// Video id
        video_id: String,
    },
}

/// Search result filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchKind {
    All,
    Video,
    Playlist,
    Channel,
}

impl From<SearchKind> for SearchType {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::All => SearchType::All,
            SearchKind::Video => SearchType::Video,
            SearchKind::Playlist => SearchType::Playlist,
            SearchKind::Channel => SearchType::Channel,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
}
