//! # Relaycast
//!
//! Client contract layer for a Relaycast server's administrative API:
//! publish, broadcast, presence, history, channel and node introspection.
//!
//! [`Client`] turns typed calls into wire commands, hands them to a
//! [`Transport`] the application provides, and decodes each reply into
//! the result type the operation guarantees — or into a [`ClientError`]
//! that says which stage failed (transport, envelope, server rejection,
//! or result decode). Broadcast is the one aggregate operation: its
//! per-channel outcomes come back individually, so one failed channel
//! never hides the others' success.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use relaycast::{Client, Transport, TransportError};
//! use serde_json::json;
//!
//! // The application owns the wire: implement `Transport` over whatever
//! // moves bytes to the server API endpoint.
//! struct HttpBridge;
//!
//! impl Transport for HttpBridge {
//!     async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
//!         # let _ = request;
//!         todo!("POST the bytes, return the response body")
//!     }
//! }
//!
//! # async fn run() -> Result<(), relaycast::ClientError> {
//! let client = Client::new(HttpBridge);
//!
//! let published = client.publish("news", json!({ "text": "hi" })).await?;
//! println!("stored at offset {}", published.offset);
//!
//! for response in client.broadcast(&["news", "alerts"], json!(1)).await? {
//!     match response.into_result() {
//!         Ok(result) => println!("delivered at {}", result.offset),
//!         Err(err) => println!("channel rejected: {err}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::Client;
pub use error::ClientError;

// The protocol and transport vocabulary callers need, re-exported so a
// plain `use relaycast::*` application never imports the sub-crates.
pub use relaycast_protocol::{
    ApiError, ChannelInfo, ChannelsParams, ClientInfo, Codec, Command,
    EmptyResult, HistoryParams, HistoryResult, InfoResult, JsonCodec, Method,
    NodeInfo, PresenceStatsResult, ProtocolError, Publication,
    PublishResponse, PublishResult, Reply, StreamPosition,
};
pub use relaycast_transport::{Transport, TransportError};
