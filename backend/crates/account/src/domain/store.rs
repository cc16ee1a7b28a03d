//! Key-Value Store Capability
//!
//! The backing store contract and the key layout built on top of it.
//! The store offers namespaced string keys, JSON values, and optional
//! expiry - nothing else. No transactions, no compare-and-set; a read may
//! briefly miss a write made milliseconds earlier from another edge, and
//! multi-key sequences must assume partial completion is observable.

use std::time::Duration;

use thiserror::Error;

use crate::domain::value_object::{
    access_token::AccessToken, namespace::Namespace, user_name::UserName,
};

/// Store-level error
///
/// Opaque to callers: every variant maps to an internal failure at the HTTP
/// boundary, and the token resolver treats them as transient misses.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure (connection, timeout, DNS)
    #[error("Store transport error: {0}")]
    Transport(String),

    /// Store answered with a non-success status
    #[error("Store returned status {0}")]
    Status(u16),

    /// Store answered with a value we could not decode
    #[error("Store returned an undecodable value: {0}")]
    Decode(String),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store capability trait
///
/// Backing-store choice is a configuration concern; every component is
/// written once against this trait.
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Read the value at `key`; `None` if absent or expired
    async fn get(&self, key: &str) -> StoreResult<Option<serde_json::Value>>;

    /// Unconditionally write `value` at `key`, expiring after `ttl` if given
    async fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
        ttl: Option<Duration>,
    ) -> StoreResult<()>;
}

// ============================================================================
// Key layout
// ============================================================================
//
// Keys are built from canonical usernames and base64url tokens, so they never
// need escaping.

/// Key of a user's credential record
pub fn user_key(name: &UserName) -> String {
    format!("user:{}", name.as_str())
}

/// Key of the reverse index entry mapping a token to its owner
pub fn token_key(token: &AccessToken) -> String {
    format!("token:{}", token.as_str())
}

/// Key of a user's state blob in the given namespace
pub fn state_key(namespace: Namespace, name: &UserName) -> String {
    format!("{}:{}", namespace.prefix(), name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(user_key(&name), "user:alice");
        assert_eq!(state_key(Namespace::Settings, &name), "settings:alice");
        assert_eq!(state_key(Namespace::Runtime, &name), "runtime:alice");

        let token = AccessToken::parse("abc123").unwrap();
        assert_eq!(token_key(&token), "token:abc123");
    }
}
