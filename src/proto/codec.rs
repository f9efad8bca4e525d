//! Message encoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use prost::Message;

/// Serialize a message and return its transport-safe representation
///
/// Output is deterministic: equal messages always produce equal strings.
pub fn encode<M: Message>(message: &M) -> String {
    STANDARD.encode(message.encode_to_vec())
}
