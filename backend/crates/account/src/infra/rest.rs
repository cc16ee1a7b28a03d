//! REST Key-Value Store
//!
//! [`KeyValueStore`] backed by an Upstash-compatible Redis REST endpoint:
//! `GET {base}/get/{key}` and `POST {base}/set/{key}?EX=n` with a bearer
//! token, replies wrapped in a `{"result": ...}` envelope. Stored values are
//! JSON text; the envelope carries them back as strings.
//!
//! Keys never need percent-encoding: the key layout only emits canonical
//! usernames, base64url tokens, and fixed prefixes.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};

/// Redis-over-REST store client
///
/// One client per process; cloning shares the connection pool.
#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Reply envelope for single commands
#[derive(Deserialize)]
struct CommandReply {
    result: Option<serde_json::Value>,
}

impl RestStore {
    /// Create a client for the endpoint at `base_url`, authenticating with
    /// `token`
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        }
    }

    async fn command(&self, request: reqwest::RequestBuilder) -> StoreResult<CommandReply> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl KeyValueStore for RestStore {
    async fn get(&self, key: &str) -> StoreResult<Option<serde_json::Value>> {
        let url = format!("{}/get/{}", self.base_url, key);
        let reply = self.command(self.client.get(&url)).await?;

        match reply.result {
            None => Ok(None),
            // Values are stored as JSON text and echoed back as a string
            Some(serde_json::Value::String(raw)) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Decode(e.to_string())),
            Some(other) => Ok(Some(other)),
        }
    }

    async fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        let mut url = format!("{}/set/{}", self.base_url, key);
        if let Some(ttl) = ttl {
            url.push_str(&format!("?EX={}", ttl.as_secs().max(1)));
        }

        let body =
            serde_json::to_string(value).map_err(|e| StoreError::Decode(e.to_string()))?;

        self.command(self.client.post(&url).body(body)).await?;
        Ok(())
    }
}
