//! Codec trait and the JSON implementation.
//!
//! A codec converts between protocol types and raw bytes. The dispatcher
//! in the client crate only needs something implementing [`Codec`]; the
//! server API speaks JSON today, but the two-phase reply decode (envelope
//! first, typed payload second) goes through the same seam both times, so
//! swapping the framing stays a one-line change for callers.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// Encodes protocol values to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` because the client holding the codec is shared
/// across tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed,
    /// truncated, or don't match the expected shape.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] using the server API's native JSON framing.
///
/// ## Example
///
/// ```rust
/// use relaycast_protocol::{Codec, Command, JsonCodec, Method, Reply};
/// use serde_json::json;
///
/// let codec = JsonCodec;
///
/// let command = Command::new(
///     Method::Publish,
///     json!({ "channel": "news", "data": { "text": "hi" } }),
/// );
/// let bytes = codec.encode(&command).unwrap();
///
/// let reply: Reply = codec
///     .decode(br#"{"error": null, "result": {"offset": 1, "epoch": "e"}}"#)
///     .unwrap();
/// assert!(reply.error().is_none());
/// # let _ = bytes;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Method, PublishResult, Reply};
    use serde_json::json;

    #[test]
    fn test_encode_command_produces_wire_json() {
        let codec = JsonCodec;
        let command = Command::new(Method::Presence, json!({ "channel": "news" }));

        let bytes = codec.encode(&command).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            json!({ "method": "presence", "params": { "channel": "news" } })
        );
    }

    #[test]
    fn test_decode_reply_then_typed_payload() {
        // The full two-phase decode through one codec.
        let codec = JsonCodec;
        let reply: Reply = codec
            .decode(br#"{"result": {"offset": 42, "epoch": "xC3q"}}"#)
            .unwrap();

        let raw = reply.into_result().unwrap();
        let result: PublishResult =
            codec.decode(raw.get().as_bytes()).unwrap();

        assert_eq!(result.offset, 42);
        assert_eq!(result.epoch, "xC3q");
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let codec = JsonCodec;
        let result: Result<Reply, _> = codec.decode(b"not json at all");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
