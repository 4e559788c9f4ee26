//! Per-operation parameter carriers.
//!
//! One Serialize-only struct per operation. These are plain data: the
//! command envelope attaches them without validating anything, and the
//! server is the one that rejects bad values. Optional fields follow the
//! wire convention of being omitted, not sent as null.

use serde::Serialize;
use serde_json::Value;

use crate::StreamPosition;

/// Params for `publish`: append `data` to one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishParams {
    pub channel: String,
    pub data: Value,
}

/// Params for `broadcast`: append the same `data` to every channel
/// listed, each with an independent outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastParams {
    pub channels: Vec<String>,
    pub data: Value,
}

/// Params for `unsubscribe`: drop `user`'s subscription to `channel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsubscribeParams {
    pub channel: String,
    pub user: String,
}

/// Params for `disconnect`: close all of `user`'s connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisconnectParams {
    pub user: String,
}

/// Params for `presence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceParams {
    pub channel: String,
}

/// Params for `presence_stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceStatsParams {
    pub channel: String,
}

/// Params for `history`, with optional paging.
///
/// With no options set this reads from the start of the stream and the
/// wire carries only the channel name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryParams {
    pub channel: String,
    /// Maximum publications to return. Server default applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Read publications after this position, for pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<StreamPosition>,
    /// Iterate from the end of the stream instead of the start.
    #[serde(skip_serializing_if = "is_false")]
    pub reverse: bool,
}

impl HistoryParams {
    /// History of `channel` from the start of the stream, no paging.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            limit: None,
            since: None,
            reverse: false,
        }
    }

    /// Caps the number of publications returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continues a previous read from the given position.
    pub fn since(mut self, position: StreamPosition) -> Self {
        self.since = Some(position);
        self
    }

    /// Iterates from the end of the stream.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

/// Params for `history_remove`: wipe `channel`'s history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRemoveParams {
    pub channel: String,
}

/// Params for `channels`, optionally filtering names by `pattern`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChannelsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Params for `info` — an empty object on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InfoParams {}

fn is_false(value: &bool) -> bool {
    !*value
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_publish_params_wire_shape() {
        let params = PublishParams {
            channel: "news".into(),
            data: json!({ "text": "hello" }),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({ "channel": "news", "data": { "text": "hello" } })
        );
    }

    #[test]
    fn test_broadcast_params_keep_channel_order() {
        let params = BroadcastParams {
            channels: vec!["a".into(), "c".into(), "b".into()],
            data: json!(1),
        };
        let value = serde_json::to_value(&params).unwrap();
        // Request order is what the per-channel responses are matched
        // against, so serialization must not reorder.
        assert_eq!(value["channels"], json!(["a", "c", "b"]));
    }

    #[test]
    fn test_history_params_minimal_wire_shape() {
        let value = serde_json::to_value(HistoryParams::new("news")).unwrap();
        // Unset options are omitted entirely, not sent as null/false.
        assert_eq!(value, json!({ "channel": "news" }));
    }

    #[test]
    fn test_history_params_with_all_options() {
        let params = HistoryParams::new("news")
            .limit(50)
            .since(StreamPosition {
                offset: 17,
                epoch: "e9".into(),
            })
            .reverse(true);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "channel": "news",
                "limit": 50,
                "since": { "offset": 17, "epoch": "e9" },
                "reverse": true
            })
        );
    }

    #[test]
    fn test_channels_params_default_is_empty_object() {
        let value = serde_json::to_value(ChannelsParams::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_channels_params_with_pattern() {
        let params = ChannelsParams {
            pattern: Some("chat:*".into()),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({ "pattern": "chat:*" }));
    }

    #[test]
    fn test_info_params_is_empty_object() {
        let value = serde_json::to_value(InfoParams::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_unsubscribe_params_wire_shape() {
        let params = UnsubscribeParams {
            channel: "news".into(),
            user: "u-1".into(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({ "channel": "news", "user": "u-1" }));
    }
}
