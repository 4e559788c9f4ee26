//! The dispatcher: builds commands, sends them, decodes replies.
//!
//! Every public operation funnels through one generic [`Client::execute`]
//! path. The per-operation methods only decide three things: the method
//! name, the params type, and the result type the reply must decode into.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use relaycast_protocol::{
    BroadcastParams, BroadcastResult, ChannelInfo, ChannelsParams,
    ChannelsResult, ClientInfo, Codec, Command, DisconnectParams, EmptyResult,
    HistoryParams, HistoryRemoveParams, HistoryResult, InfoParams, InfoResult,
    JsonCodec, Method, NodeInfo, PresenceParams, PresenceResult,
    PresenceStatsParams, PresenceStatsResult, PublishParams, PublishResponse,
    PublishResult, Reply, UnsubscribeParams,
};
use relaycast_transport::Transport;

use crate::ClientError;

/// Client for the server's administrative API.
///
/// Generic over the [`Transport`] that moves bytes and the [`Codec`] that
/// frames them. Each call builds one immutable command, sends it, and
/// decodes one reply; the client itself holds no mutable state, so a
/// single instance can serve any number of concurrent calls.
pub struct Client<T: Transport, C: Codec = JsonCodec> {
    transport: T,
    codec: C,
}

impl<T: Transport> Client<T, JsonCodec> {
    /// Creates a client speaking JSON over the given transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            codec: JsonCodec,
        }
    }
}

impl<T: Transport, C: Codec> Client<T, C> {
    /// Creates a client with an explicit codec.
    pub fn with_codec(transport: T, codec: C) -> Self {
        Self { transport, codec }
    }

    /// Publishes `data` into `channel`.
    ///
    /// On success the message is appended to the channel's history at the
    /// returned offset; the epoch identifies the history generation. Both
    /// are zero/empty for channels that keep no history.
    pub async fn publish(
        &self,
        channel: &str,
        data: Value,
    ) -> Result<PublishResult, ClientError> {
        let params = PublishParams {
            channel: channel.to_owned(),
            data,
        };
        self.execute(Method::Publish, &params).await
    }

    /// Publishes the same `data` into every channel in `channels`.
    ///
    /// Returns one entry per requested channel, in request order. A
    /// rejected channel carries its error inline in its entry; it never
    /// drops or reorders sibling entries, and the call as a whole still
    /// succeeds — inspect each item.
    pub async fn broadcast(
        &self,
        channels: &[&str],
        data: Value,
    ) -> Result<Vec<PublishResponse>, ClientError> {
        let params = BroadcastParams {
            channels: channels.iter().map(|c| (*c).to_owned()).collect(),
            data,
        };
        let result: BroadcastResult =
            self.execute(Method::Broadcast, &params).await?;
        Ok(result.responses)
    }

    /// Removes `user`'s subscription from `channel`.
    pub async fn unsubscribe(
        &self,
        channel: &str,
        user: &str,
    ) -> Result<(), ClientError> {
        let params = UnsubscribeParams {
            channel: channel.to_owned(),
            user: user.to_owned(),
        };
        let _: EmptyResult = self.execute(Method::Unsubscribe, &params).await?;
        Ok(())
    }

    /// Closes every connection belonging to `user`.
    pub async fn disconnect(&self, user: &str) -> Result<(), ClientError> {
        let params = DisconnectParams {
            user: user.to_owned(),
        };
        let _: EmptyResult = self.execute(Method::Disconnect, &params).await?;
        Ok(())
    }

    /// Snapshot of the sessions currently present in `channel`, keyed by
    /// connection id. An empty map is a valid outcome, not an error.
    pub async fn presence(
        &self,
        channel: &str,
    ) -> Result<HashMap<String, ClientInfo>, ClientError> {
        let params = PresenceParams {
            channel: channel.to_owned(),
        };
        let result: PresenceResult =
            self.execute(Method::Presence, &params).await?;
        Ok(result.presence)
    }

    /// Presence counts for `channel`: users by unique identity, clients
    /// by connection.
    pub async fn presence_stats(
        &self,
        channel: &str,
    ) -> Result<PresenceStatsResult, ClientError> {
        let params = PresenceStatsParams {
            channel: channel.to_owned(),
        };
        self.execute(Method::PresenceStats, &params).await
    }

    /// Reads `channel`'s history from the start of the stream.
    pub async fn history(
        &self,
        channel: &str,
    ) -> Result<HistoryResult, ClientError> {
        self.history_with(HistoryParams::new(channel)).await
    }

    /// Reads history with explicit paging options.
    ///
    /// Publications come back exactly as the server ordered them; the
    /// result's offset/epoch mark where the read stopped, for
    /// continuation via [`HistoryParams::since`].
    pub async fn history_with(
        &self,
        params: HistoryParams,
    ) -> Result<HistoryResult, ClientError> {
        self.execute(Method::History, &params).await
    }

    /// Wipes `channel`'s history.
    pub async fn history_remove(&self, channel: &str) -> Result<(), ClientError> {
        let params = HistoryRemoveParams {
            channel: channel.to_owned(),
        };
        let _: EmptyResult =
            self.execute(Method::HistoryRemove, &params).await?;
        Ok(())
    }

    /// All channels with at least one present user, cluster-wide, keyed
    /// by channel name. An empty map is a valid outcome.
    pub async fn channels(
        &self,
    ) -> Result<HashMap<String, ChannelInfo>, ClientError> {
        self.channels_params(ChannelsParams::default()).await
    }

    /// Like [`channels`](Self::channels), filtered server-side by a name
    /// pattern.
    pub async fn channels_matching(
        &self,
        pattern: &str,
    ) -> Result<HashMap<String, ChannelInfo>, ClientError> {
        self.channels_params(ChannelsParams {
            pattern: Some(pattern.to_owned()),
        })
        .await
    }

    async fn channels_params(
        &self,
        params: ChannelsParams,
    ) -> Result<HashMap<String, ChannelInfo>, ClientError> {
        let result: ChannelsResult =
            self.execute(Method::Channels, &params).await?;
        Ok(result.channels)
    }

    /// Point-in-time snapshot of every node known to the cluster.
    pub async fn info(&self) -> Result<Vec<NodeInfo>, ClientError> {
        let result: InfoResult =
            self.execute(Method::Info, &InfoParams::default()).await?;
        Ok(result.nodes)
    }

    /// Sends one command and decodes its reply into `R`.
    ///
    /// The reply decodes in two phases: the envelope first (surfacing a
    /// server rejection without ever touching the result payload), then
    /// the raw payload into `R`. Which `R` a reply carries is implied by
    /// `method`, not by anything on the wire — that is why this layer,
    /// and not the transport, owns the second phase.
    async fn execute<P, R>(
        &self,
        method: Method,
        params: &P,
    ) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params).map_err(|e| {
            ClientError::Encode {
                method,
                source: relaycast_protocol::ProtocolError::Encode(e),
            }
        })?;
        let command = Command::new(method, params);
        let request = self
            .codec
            .encode(&command)
            .map_err(|source| ClientError::Encode { method, source })?;

        tracing::debug!(%method, request_len = request.len(), "sending command");
        let response = self.transport.send(&request).await?;

        let reply: Reply = self
            .codec
            .decode(&response)
            .map_err(|source| ClientError::MalformedReply { method, source })?;

        match reply {
            Reply::Error(err) => {
                tracing::debug!(%method, code = err.code, "server rejected command");
                Err(ClientError::Api(err))
            }
            Reply::Result(raw) => self
                .codec
                .decode(raw.get().as_bytes())
                .map_err(|source| ClientError::Decode { method, source }),
        }
    }
}
