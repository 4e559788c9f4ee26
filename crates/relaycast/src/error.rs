//! The caller-facing failure taxonomy.
//!
//! Every failed call tells the caller which stage gave up: the transport
//! (nothing usable came back), the envelope (bytes that aren't a reply),
//! the server (an explicit rejection), or the typed decode (we and the
//! server disagree about the result's shape). Callers that only care
//! whether the server said no can match on [`ClientError::Api`] alone.

use relaycast_protocol::{ApiError, Method, ProtocolError};
use relaycast_transport::TransportError;

/// Errors produced by a [`Client`](crate::Client) call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Encoding the command failed before anything was sent.
    #[error("encoding {method} command failed: {source}")]
    Encode {
        method: Method,
        source: ProtocolError,
    },

    /// The transport failed — the request never completed, so no reply
    /// envelope exists. Never retried by this layer.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The transport returned bytes that do not parse as a reply
    /// envelope (truncated or garbage JSON, or an envelope carrying
    /// neither error nor result).
    #[error("malformed reply to {method}: {source}")]
    MalformedReply {
        method: Method,
        source: ProtocolError,
    },

    /// The server explicitly rejected the command. Code and message are
    /// propagated verbatim, never translated.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The reply parsed, the server reported success, but the result
    /// payload does not match the shape this method implies — the client
    /// and the server disagree about the contract.
    #[error("decoding {method} result failed: {source}")]
    Decode {
        method: Method,
        source: ProtocolError,
    },
}

impl ClientError {
    /// The server's rejection, if that is what this error is.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err: ClientError = TransportError::Timeout.into();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), "request timed out");
    }

    #[test]
    fn test_from_api_error_preserves_rendering() {
        let err: ClientError = ApiError {
            code: 103,
            message: "permission denied".into(),
        }
        .into();
        assert_eq!(err.to_string(), "permission denied: 103");
        assert_eq!(err.api_error().map(|e| e.code), Some(103));
    }

    #[test]
    fn test_decode_error_names_the_method() {
        let source = ProtocolError::InvalidReply("x".into());
        let err = ClientError::Decode {
            method: Method::PresenceStats,
            source,
        };
        assert!(err.to_string().contains("presence_stats"));
    }

    #[test]
    fn test_api_error_is_not_a_transport_error() {
        let err: ClientError = ApiError {
            code: 100,
            message: "internal server error".into(),
        }
        .into();
        assert!(err.api_error().is_some());
        assert!(!matches!(err, ClientError::Transport(_)));
    }
}
