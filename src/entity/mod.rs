//! Entity module
//!
//! Typed domain objects normalized from provider payloads.
//!
//! # Overview
//!
//! Every entity implements [`Loadable`]: a pure `raw node -> entity`
//! function with no I/O. Identity fields are mandatory and fail with
//! [`Error::MalformedEntity`](crate::Error::MalformedEntity); everything else
//! falls back to a default. Polymorphic lists go through [`Content`].
//!
//! [`Playlist`] and [`Channel`] are built from a whole browse response and
//! carry a [`Continuable`](crate::Continuable) seeded with the videos that
//! came with it.

mod channel;
mod channel_compact;
mod comment;
mod content;
mod playlist;
mod playlist_compact;
mod transcript;
mod types;
mod video;
mod video_compact;

pub use channel::Channel;
pub use channel_compact::ChannelCompact;
pub use comment::Comment;
pub use content::Content;
pub use playlist::Playlist;
pub use playlist_compact::PlaylistCompact;
pub use transcript::TranscriptCue;
pub use types::{load_renderers, Loadable};
pub use video::Video;
pub use video_compact::VideoCompact;
