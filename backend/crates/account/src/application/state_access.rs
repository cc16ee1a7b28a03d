//! State Access Use Cases
//!
//! Keyed JSON blob storage scoped by owner and namespace. Reads treat
//! absence as a normal value; writes overwrite wholesale with the
//! namespace's TTL policy.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::store::{KeyValueStore, state_key};
use crate::domain::value_object::{namespace::Namespace, user_name::UserName};
use crate::error::AccountResult;

/// Read state use case
pub struct ReadStateUseCase<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
}

impl<S> ReadStateUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Last written payload for this owner+namespace, `None` if never
    /// written or expired
    pub async fn execute(
        &self,
        owner: &UserName,
        namespace: Namespace,
    ) -> AccountResult<Option<serde_json::Value>> {
        Ok(self.store.get(&state_key(namespace, owner)).await?)
    }
}

/// Write state use case
pub struct WriteStateUseCase<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> WriteStateUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    /// Unconditional overwrite; no merge, no version check, last writer wins
    pub async fn execute(
        &self,
        owner: &UserName,
        namespace: Namespace,
        payload: serde_json::Value,
    ) -> AccountResult<()> {
        let ttl = self.config.namespace_ttl(namespace);
        self.store
            .set(&state_key(namespace, owner), &payload, ttl)
            .await?;

        tracing::debug!(owner = %owner, namespace = %namespace, "State written");

        Ok(())
    }
}
