//! Request parameter encoding
//!
//! Some endpoints take an opaque `params` string: a protobuf message,
//! base64 encoded. Message shapes are fixed at compile time with `prost`
//! derives and turned into strings with [`encode`].

mod codec;
mod messages;

pub use codec::encode;
pub use messages::{ChannelTabParams, SearchFilters, SearchParams, TranscriptParams};
