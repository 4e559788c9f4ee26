//! Command and reply envelopes for the server API wire format.
//!
//! Every exchange with the server is one [`Command`] out, one [`Reply`]
//! back. The command names an operation and carries opaque params; the
//! reply is either a server-reported [`ApiError`] or a raw result payload
//! whose shape depends on the method that was sent. Because the shape is
//! only resolvable once the method is known, replies decode in two phases:
//! the envelope here, the typed payload later (see the client crate's
//! dispatcher).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Method — the operation vocabulary
// ---------------------------------------------------------------------------

/// The closed set of operations the server API accepts.
///
/// Serialized as the snake_case method name the server expects
/// (`"presence_stats"`, `"history_remove"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Publish data into one channel.
    Publish,
    /// Publish the same data into many channels, with per-channel outcomes.
    Broadcast,
    /// Remove a user's subscription from a channel.
    Unsubscribe,
    /// Close all of a user's connections.
    Disconnect,
    /// Snapshot of sessions currently present in a channel.
    Presence,
    /// Presence counts only (unique users, connections).
    PresenceStats,
    /// Read a channel's publication history.
    History,
    /// Wipe a channel's publication history.
    HistoryRemove,
    /// All channels with at least one present user.
    Channels,
    /// Information about every node in the cluster.
    Info,
}

impl Method {
    /// The wire name of this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Publish => "publish",
            Method::Broadcast => "broadcast",
            Method::Unsubscribe => "unsubscribe",
            Method::Disconnect => "disconnect",
            Method::Presence => "presence",
            Method::PresenceStats => "presence_stats",
            Method::History => "history",
            Method::HistoryRemove => "history_remove",
            Method::Channels => "channels",
            Method::Info => "info",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Command — the outgoing envelope
// ---------------------------------------------------------------------------

/// An API command to send: a method plus its params.
///
/// The envelope is a pure carrier. It does not validate the params against
/// the method — that is the job of the operation-specific caller building
/// them. Constructed per call, sent once, discarded.
///
/// Wire shape: `{ "method": "publish", "params": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    /// The operation to invoke.
    pub method: Method,
    /// Operation-specific parameters, opaque at this level.
    pub params: serde_json::Value,
}

impl Command {
    /// Wraps a method and params into a sendable command.
    pub fn new(method: Method, params: serde_json::Value) -> Self {
        Self { method, params }
    }
}

// ---------------------------------------------------------------------------
// ApiError — a rejection reported by the server
// ---------------------------------------------------------------------------

/// An error the server explicitly reported in a reply.
///
/// Not to be confused with transport failures (connection problems,
/// malformed bytes) — those never produce an `ApiError`. The server
/// guarantees a non-zero `code` and non-empty `message` whenever it
/// reports one; this type does not re-validate that.
///
/// Displays as `"message: code"`, e.g. `"permission denied: 103"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}: {code}")]
pub struct ApiError {
    /// Numeric error code, stable across server versions.
    pub code: u32,
    /// Human-readable description.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Reply — the incoming envelope
// ---------------------------------------------------------------------------

/// A decoded reply envelope: a server error xor a raw result payload.
///
/// On the wire a reply is two nullable fields,
/// `{ "error": object|null, "result": object|null }`. That shape can
/// express states that have no meaning ("both present", "neither
/// present"), so it is decoded into this tagged form instead:
///
/// - `error` present → [`Reply::Error`], and whatever sits in `result`
///   is ignored without ever being inspected;
/// - only `result` present → [`Reply::Result`] with the payload kept raw,
///   to be decoded once the issuing method is known;
/// - neither present → a [`ProtocolError::InvalidReply`], never a silent
///   empty success.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "WireReply")]
pub enum Reply {
    /// The server rejected the command.
    Error(ApiError),
    /// The command succeeded; the payload is not yet typed.
    Result(Box<RawValue>),
}

impl Reply {
    /// Unwraps the envelope into the raw payload or the server's error.
    pub fn into_result(self) -> Result<Box<RawValue>, ApiError> {
        match self {
            Reply::Error(err) => Err(err),
            Reply::Result(raw) => Ok(raw),
        }
    }

    /// Returns the server error, if this reply carries one.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Reply::Error(err) => Some(err),
            Reply::Result(_) => None,
        }
    }
}

/// The literal two-field wire shape, before the error-xor-result rule
/// is applied.
#[derive(Deserialize)]
struct WireReply {
    error: Option<ApiError>,
    result: Option<Box<RawValue>>,
}

impl TryFrom<WireReply> for Reply {
    type Error = ProtocolError;

    fn try_from(wire: WireReply) -> Result<Self, ProtocolError> {
        match (wire.error, wire.result) {
            // `error` is authoritative: `result` is dropped unread.
            (Some(err), _) => Ok(Reply::Error(err)),
            (None, Some(raw)) => Ok(Reply::Result(raw)),
            (None, None) => Err(ProtocolError::InvalidReply(
                "reply carries neither error nor result".into(),
            )),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
