//! Wire protocol for the Relaycast server API.
//!
//! This crate defines the contract a client speaks with the server's
//! administrative API:
//!
//! - **Envelopes** ([`Command`], [`Reply`]) — a named operation with
//!   opaque params, and the error-xor-result reply it produces.
//! - **Params** ([`PublishParams`], [`HistoryParams`], ...) — the typed
//!   parameter carriers, one per operation.
//! - **Results** ([`PublishResult`], [`HistoryResult`], ...) — the typed
//!   success shapes, one per operation.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how envelopes become
//!   bytes and back.
//! - **Errors** ([`ProtocolError`], [`ApiError`]) — this crate's own
//!   encode/decode failures vs. rejections the server reports inside a
//!   reply.
//!
//! # Two-phase decoding
//!
//! A reply's result payload has no self-describing shape: what it contains
//! is implied by the method of the command that produced it. So replies
//! decode in two phases — the envelope first (surfacing any server error
//! and keeping the payload raw), then the payload into the result type
//! the method implies. The dispatcher in the `relaycast` crate drives the
//! second phase.
//!
//! This layer knows nothing about connections; bytes in, bytes out is the
//! transport crate's seam.

mod codec;
mod error;
mod params;
mod results;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use params::{
    BroadcastParams, ChannelsParams, DisconnectParams, HistoryParams,
    HistoryRemoveParams, InfoParams, PresenceParams, PresenceStatsParams,
    PublishParams, UnsubscribeParams,
};
pub use results::{
    BroadcastResult, ChannelInfo, ChannelsResult, ClientInfo, EmptyResult,
    HistoryResult, InfoResult, NodeInfo, PresenceResult, PresenceStatsResult,
    Publication, PublishResponse, PublishResult, StreamPosition,
};
pub use types::{ApiError, Command, Method, Reply};
