//! Application Configuration
//!
//! Configuration for the account application layer.

use std::time::Duration;

use crate::domain::value_object::access_token::TOKEN_ENTROPY_BYTES;
use crate::domain::value_object::namespace::Namespace;

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Token resolution attempts before giving up
    pub resolve_attempts: u32,
    /// Fixed pause between resolution attempts
    pub resolve_retry_delay: Duration,
    /// Expiry for blobs in the `runtime` namespace (24 hours)
    pub runtime_state_ttl: Duration,
    /// Random bytes per minted token
    pub token_entropy_bytes: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            resolve_attempts: 3,
            resolve_retry_delay: Duration::from_millis(100),
            runtime_state_ttl: Duration::from_secs(24 * 3600), // 24 hours
            token_entropy_bytes: TOKEN_ENTROPY_BYTES,
        }
    }
}

impl AccountConfig {
    /// Config for development (snappier retries against a local store)
    pub fn development() -> Self {
        Self {
            resolve_retry_delay: Duration::from_millis(10),
            ..Default::default()
        }
    }

    /// TTL policy for a namespace
    pub fn namespace_ttl(&self, namespace: Namespace) -> Option<Duration> {
        match namespace {
            Namespace::Settings => None,
            Namespace::Runtime => Some(self.runtime_state_ttl),
        }
    }
}
