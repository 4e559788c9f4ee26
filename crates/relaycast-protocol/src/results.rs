//! Typed results, one per operation.
//!
//! Each type here is the closed shape of a *successful* reply for its
//! operation — none of them carry a top-level error field, because the
//! error lives one level up in the [`Reply`](crate::Reply) envelope (or,
//! for broadcast, inline in each [`PublishResponse`] item).
//!
//! Decoding is structural, not semantic: the decoder accepts whatever the
//! envelope shape allows and leaves server-side invariants (monotonic
//! offsets, `num_clients >= num_users`) to the server. Empty maps and
//! empty lists are valid successes, not errors. Fields the server
//! legitimately omits (publish offsets on history-less channels, history
//! paging info) fall back to their zero values, the way the original
//! service's own clients decode them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

// ---------------------------------------------------------------------------
// Shared pieces: ClientInfo, Publication, StreamPosition
// ---------------------------------------------------------------------------

/// One connected session, as embedded in presence snapshots and
/// publication provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// User identity. Many connections may share one user.
    pub user: String,
    /// Connection id, unique per session.
    pub client: String,
    /// Opaque payload attached at connect time. Omitted, not null,
    /// when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_info: Option<Value>,
    /// Opaque payload attached at subscribe time. Omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chan_info: Option<Value>,
}

/// A message published into a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Position in the channel's stream. Monotonically increasing per
    /// channel, gaps allowed. Zero when the channel keeps no history.
    #[serde(default)]
    pub offset: u64,
    /// The published payload, opaque to this layer.
    pub data: Value,
    /// The session that published, when the server attaches provenance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ClientInfo>,
}

/// A position in a channel's history stream: offset plus the epoch that
/// offset belongs to. The epoch changes whenever history is reset, which
/// is what makes an offset comparable at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPosition {
    /// Publication sequence number within the epoch.
    pub offset: u64,
    /// History generation identifier.
    pub epoch: String,
}

// ---------------------------------------------------------------------------
// Per-operation results
// ---------------------------------------------------------------------------

/// Information and statistics about one server node.
///
/// All counts are point-in-time and may be stale by the time the caller
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Unique id of the running node instance.
    pub uid: String,
    /// Node name, configured or generated.
    pub name: String,
    /// Server version.
    #[serde(default)]
    pub version: String,
    /// Connections on this node.
    #[serde(default)]
    pub num_clients: u32,
    /// Unique users on this node.
    #[serde(default)]
    pub num_users: u32,
    /// Channels on this node.
    #[serde(default)]
    pub num_channels: u32,
    /// Node uptime in seconds.
    #[serde(default)]
    pub uptime: u64,
}

/// Result of the `info` command: a snapshot of all nodes known to the
/// cluster at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoResult {
    pub nodes: Vec<NodeInfo>,
}

/// Result of the `publish` command.
///
/// The message is durably appended to channel history at `offset`;
/// `epoch` identifies the history generation. Both are zero/empty for
/// channels that keep no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PublishResult {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub epoch: String,
}

/// The outcome for one channel of a broadcast.
///
/// A failed channel carries its error here, inline, so that sibling
/// channels' results survive. At most one of the two fields is
/// semantically meaningful; `error` wins if the wire carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PublishResult>,
}

impl PublishResponse {
    /// Collapses this per-channel outcome into a `Result`.
    ///
    /// An entry with neither field decodes as a zero [`PublishResult`],
    /// matching how the original service's clients treat it.
    pub fn into_result(self) -> Result<PublishResult, ApiError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(err),
            (None, Some(result)) => Ok(result),
            (None, None) => Ok(PublishResult::default()),
        }
    }
}

/// Result of the `broadcast` command: one [`PublishResponse`] per target
/// channel, in request order, failures included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastResult {
    pub responses: Vec<PublishResponse>,
}

/// Result of the `presence` command: every session currently present in
/// the channel, keyed by connection id. Empty is a valid outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceResult {
    pub presence: HashMap<String, ClientInfo>,
}

/// Result of the `presence_stats` command.
///
/// Users are counted by unique identity, clients by connection, so the
/// server guarantees `num_clients >= num_users` — but that is its
/// invariant to keep, and the decoder does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceStatsResult {
    pub num_users: i32,
    pub num_clients: i32,
}

/// Result of the `history` command.
///
/// Publications arrive ordered by ascending offset and are kept exactly
/// as received — no re-sorting. `offset`/`epoch` describe the stream
/// position the read was taken at, for pagination continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResult {
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub epoch: String,
}

/// Per-channel entry in a [`ChannelsResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// Unique users currently present in the channel.
    pub num_users: i32,
}

/// Result of the `channels` command: all channels with at least one
/// present user, cluster-wide. Empty is a valid outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelsResult {
    pub channels: HashMap<String, ChannelInfo>,
}

/// Result of operations that acknowledge with an empty object
/// (`unsubscribe`, `disconnect`, `history_remove`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmptyResult {}

// =========================================================================
// Tests
// =========================================================================
