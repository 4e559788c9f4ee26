/// Errors that can occur in the transport layer.
///
/// These are failures *before* a reply envelope exists: the request never
/// made it out, or no usable bytes came back. A rejection the server
/// reports inside a reply is not a transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection went away before a reply arrived.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Sending the request failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving the reply failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The transport gave up waiting for a reply. How long to wait is the
    /// transport's policy; this layer never imposes one.
    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = TransportError::SendFailed(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe broke",
        ));
        assert_eq!(err.to_string(), "send failed: pipe broke");
    }

    #[test]
    fn test_connection_closed_display() {
        let err = TransportError::ConnectionClosed("peer reset".into());
        assert_eq!(err.to_string(), "connection closed: peer reset");
    }
}
