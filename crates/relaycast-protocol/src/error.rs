//! Error types for the protocol layer.
//!
//! [`ProtocolError`] covers failures in this crate's own job — turning
//! commands into bytes and reply bytes into typed values. An error the
//! *server* reports inside a reply is a different thing entirely; that is
//! [`ApiError`](crate::ApiError), defined next to the reply envelope.

/// Errors that can occur while encoding commands or decoding replies.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a command or params into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed — malformed JSON, missing required fields,
    /// or a payload whose shape doesn't match the requested type.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The reply parsed as JSON but is not a valid envelope.
    ///
    /// The one case today: a reply carrying neither an error nor a result.
    #[error("invalid reply: {0}")]
    InvalidReply(String),
}
