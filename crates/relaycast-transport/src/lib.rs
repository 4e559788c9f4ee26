//! Transport seam for the Relaycast client.
//!
//! The contract layer never opens connections. It hands fully-encoded
//! command bytes to a [`Transport`] and gets raw reply bytes (or a
//! [`TransportError`]) back. Everything stateful about the network —
//! connection management, authentication, pooling, timeouts, retry
//! policy — lives behind this trait, in whatever implementation the
//! application plugs in.

#![allow(async_fn_in_trait)]

mod error;

pub use error::TransportError;

/// Delivers one encoded command and returns the raw reply bytes.
pub trait Transport: Send + Sync + 'static {
    /// Sends an encoded command and waits for the complete reply.
    ///
    /// One request produces exactly one reply; the caller never retries
    /// through this seam. The returned bytes are handed to the protocol
    /// layer unparsed — a transport has no opinion about their content.
    async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the request back, enough to exercise the seam generically.
    struct Loopback;

    impl Transport for Loopback {
        async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
            Ok(request.to_vec())
        }
    }

    async fn roundtrip<T: Transport>(transport: &T, bytes: &[u8]) -> Vec<u8> {
        transport.send(bytes).await.unwrap()
    }

    #[tokio::test]
    async fn test_send_through_generic_seam() {
        let sent = roundtrip(&Loopback, b"{\"method\":\"info\"}").await;
        assert_eq!(sent, b"{\"method\":\"info\"}");
    }
}
