//! Resolve Token Use Case
//!
//! Maps an opaque token to its owner through the reverse index. The backing
//! store may not yet reflect a reverse-index write made milliseconds earlier
//! by another edge, so resolution retries a bounded number of times with a
//! fixed pause before reporting the token unresolvable.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::store::{KeyValueStore, token_key};
use crate::domain::value_object::{access_token::AccessToken, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Resolve token use case
pub struct ResolveTokenUseCase<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> ResolveTokenUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    /// Resolve a token to the user name that owns it
    ///
    /// First non-empty result wins. A store error on one attempt is a
    /// transient miss: it is logged and retried like any other miss. Only
    /// exhaustion of all attempts surfaces, as [`AccountError::TokenUnresolved`].
    pub async fn execute(&self, token: &AccessToken) -> AccountResult<UserName> {
        let key = token_key(token);
        let attempts = self.config.resolve_attempts.max(1);

        for attempt in 1..=attempts {
            match self.store.get(&key).await {
                Ok(Some(value)) => return owner_from_value(value),
                Ok(None) => {
                    tracing::debug!(attempt, "Token not visible yet");
                }
                Err(e) => {
                    tracing::warn!(error = %e, attempt, "Store error during token resolution");
                }
            }

            if attempt < attempts {
                tokio::time::sleep(self.config.resolve_retry_delay).await;
            }
        }

        Err(AccountError::TokenUnresolved)
    }
}

/// Decode the owner stored in a reverse index entry
fn owner_from_value(value: serde_json::Value) -> AccountResult<UserName> {
    let name = value
        .as_str()
        .ok_or_else(|| AccountError::Internal("Malformed token index entry".to_string()))?;

    UserName::new(name)
        .map_err(|e| AccountError::Internal(format!("Malformed owner in token index: {e}")))
}
