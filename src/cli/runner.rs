//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Result, ResultExt};
use crate::pagination::{Continuable, PageFetcher};
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::with_config(self.load_config()?)?;

        match &self.cli.command {
            Commands::Search { query, kind, limit } => {
                self.drain(&client.search(query.as_str(), (*kind).into()), *limit)
                    .await
            }
            Commands::ChannelVideos { channel_id, limit } => {
                self.drain(&client.channel_videos(channel_id.as_str()), *limit)
                    .await
            }
            Commands::Channel { channel_id, limit } => {
                match client.get_channel(channel_id).await? {
                    Some(channel) => {
                        self.output(&channel)?;
                        self.drain(&channel.videos, *limit).await
                    }
                    None => self.not_found("channel", channel_id),
                }
            }
            Commands::Playlist { playlist_id, limit } => {
                match client.get_playlist(playlist_id).await? {
                    Some(playlist) => {
                        self.output(&playlist)?;
                        self.drain(&playlist.videos, *limit).await
                    }
                    None => self.not_found("playlist", playlist_id),
                }
            }
            Commands::Comments { video_id, limit } => {
                self.drain(&client.video_comments(video_id.as_str()), *limit)
                    .await
            }
            Commands::Video { video_id } => match client.get_video(video_id).await? {
                Some(video) => self.output(&video),
                None => self.not_found("video", video_id),
            },
            Commands::Transcript { video_id } => {
                match client.get_video_transcript(video_id).await? {
                    Some(cues) => cues.iter().try_for_each(|cue| self.output(cue)),
                    None => self.not_found("transcript", video_id),
                }
            }
        }
    }

    /// Load client configuration, defaults when no file is given
    fn load_config(&self) -> Result<ClientConfig> {
        match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Client config {}", path.display())),
            None => Ok(ClientConfig::default()),
        }
    }

    /// Print at least `limit` items of a collection, fetching what is missing
    ///
    /// Items already loaded with the collection count towards the limit.
    async fn drain<F>(&self, collection: &Continuable<F>, limit: usize) -> Result<()>
    where
        F: PageFetcher,
        F::Item: Clone + Serialize,
    {
        let start = Instant::now();
        let mut items = collection.items().await;
        if limit == 0 || items.len() < limit {
            let wanted = if limit == 0 { 0 } else { limit - items.len() };
            items.extend(collection.next(wanted).await?);
        }
        for item in &items {
            self.output(item)?;
        }

        info!(
            "Fetched {} items in {:?} (more available: {})",
            items.len(),
            start.elapsed(),
            collection.has_more().await
        );
        Ok(())
    }

    fn not_found(&self, kind: &str, id: &str) -> Result<()> {
        self.output(&json!({ "type": "NOT_FOUND", kind: id }))
    }

    /// Output a value
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{line}");
        Ok(())
    }
}
