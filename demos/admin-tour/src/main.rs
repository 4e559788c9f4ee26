//! A tour of every server API operation against an in-process fake
//! server, so the whole dispatch path runs without a network.
//!
//! Run with `RUST_LOG=debug` to watch the client's tracing output.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Value, json};

use relaycast::{Client, Transport, TransportError};

// ---------------------------------------------------------------------------
// Fake server
// ---------------------------------------------------------------------------

/// Answers commands the way a small single-node server would. Channels
/// under `private:` reject publishes, which makes the broadcast below
/// show a partial failure.
#[derive(Default)]
struct FakeServer {
    next_offset: AtomicU64,
}

impl FakeServer {
    fn reply_for(&self, command: &Value) -> Value {
        let method = command["method"].as_str().unwrap_or_default();
        let params = &command["params"];
        match method {
            "publish" => match self.publish_one(params["channel"].as_str()) {
                Ok(result) => json!({ "result": result }),
                Err(error) => json!({ "error": error }),
            },
            "broadcast" => {
                let responses: Vec<Value> = params["channels"]
                    .as_array()
                    .cloned()
                    .unwrap_or_default()
                    .iter()
                    .map(|channel| match self.publish_one(channel.as_str()) {
                        Ok(result) => json!({ "result": result }),
                        Err(error) => json!({ "error": error }),
                    })
                    .collect();
                json!({ "result": { "responses": responses } })
            }
            "presence" => json!({ "result": { "presence": {
                "c-81f3": { "user": "u-1", "client": "c-81f3" },
                "c-92a4": { "user": "u-1", "client": "c-92a4",
                            "chan_info": { "role": "moderator" } },
                "c-05dd": { "user": "u-2", "client": "c-05dd" }
            } } }),
            "presence_stats" => json!({ "result": {
                "num_users": 2, "num_clients": 3
            } }),
            "history" => json!({ "result": {
                "publications": [
                    { "offset": 1, "data": { "text": "first" } },
                    { "offset": 2, "data": { "text": "second" } }
                ],
                "offset": 2,
                "epoch": "demo"
            } }),
            "channels" => json!({ "result": { "channels": {
                "news": { "num_users": 2 },
                "chat:lobby": { "num_users": 1 }
            } } }),
            "info" => json!({ "result": { "nodes": [{
                "uid": "f6ab-41",
                "name": "demo-node",
                "version": "0.1.0",
                "num_clients": 3,
                "num_users": 2,
                "num_channels": 2,
                "uptime": 42
            }] } }),
            "unsubscribe" | "disconnect" | "history_remove" => {
                json!({ "result": {} })
            }
            unknown => json!({ "error": {
                "code": 108, "message": format!("method not found: {unknown}")
            } }),
        }
    }

    fn publish_one(&self, channel: Option<&str>) -> Result<Value, Value> {
        match channel {
            Some(name) if name.starts_with("private:") => Err(json!({
                "code": 103, "message": "permission denied"
            })),
            Some(_) => {
                let offset = self.next_offset.fetch_add(1, Ordering::Relaxed) + 1;
                Ok(json!({ "offset": offset, "epoch": "demo" }))
            }
            None => Err(json!({ "code": 107, "message": "bad request" })),
        }
    }
}

impl Transport for FakeServer {
    async fn send(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let command: Value = serde_json::from_slice(request)
            .map_err(|e| TransportError::ConnectionClosed(e.to_string()))?;
        let reply = self.reply_for(&command);
        Ok(reply.to_string().into_bytes())
    }
}

// ---------------------------------------------------------------------------
// The tour
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), relaycast::ClientError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::new(FakeServer::default());

    let nodes = client.info().await?;
    println!("cluster: {} node(s), first is {:?}", nodes.len(), nodes[0].name);

    let published = client.publish("news", json!({ "text": "hello" })).await?;
    println!("published at offset {} (epoch {})", published.offset, published.epoch);

    println!("broadcast to news / private:ops / alerts:");
    let responses = client
        .broadcast(&["news", "private:ops", "alerts"], json!({ "text": "fanout" }))
        .await?;
    for response in responses {
        match response.into_result() {
            Ok(result) => println!("  delivered at offset {}", result.offset),
            Err(err) => println!("  rejected: {err}"),
        }
    }

    let presence = client.presence("news").await?;
    println!("{} session(s) present in news", presence.len());

    let stats = client.presence_stats("news").await?;
    println!("{} user(s) over {} connection(s)", stats.num_users, stats.num_clients);

    let history = client.history("news").await?;
    println!(
        "history: {} publication(s), stream position {}/{}",
        history.publications.len(),
        history.offset,
        history.epoch
    );

    let channels = client.channels().await?;
    println!("active channels: {:?}", {
        let mut names: Vec<&String> = channels.keys().collect();
        names.sort();
        names
    });

    client.unsubscribe("news", "u-2").await?;
    client.disconnect("u-2").await?;
    client.history_remove("news").await?;
    println!("cleanup acknowledged");

    Ok(())
}
