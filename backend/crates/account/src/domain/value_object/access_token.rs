//! Access Token Value Object
//!
//! Opaque bearer credential. The token carries no structure and is never
//! parsed for meaning; identity comes from the reverse index lookup
//! (`token:<token>` -> username).

use std::fmt;

use platform::crypto::{random_bytes, to_base64_url};

/// Number of random bytes in a freshly minted token (256 bits of entropy)
pub const TOKEN_ENTROPY_BYTES: usize = 32;

/// Maximum accepted token length on the wire
///
/// Guards store keys against absurd inbound credentials; minted tokens are
/// 43 characters.
pub const TOKEN_MAX_LENGTH: usize = 256;

/// Error returned when an inbound token is not usable as a store key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessTokenError {
    #[error("Token is empty")]
    Empty,

    #[error("Token is too long (maximum {TOKEN_MAX_LENGTH} characters)")]
    TooLong,

    #[error("Token contains whitespace or control characters")]
    InvalidCharacter,
}

/// Opaque bearer token
///
/// Debug output is redacted; tokens only ever appear verbatim in responses
/// to the client that earned them.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// Mint a fresh token with `entropy_bytes` of randomness
    pub fn mint(entropy_bytes: usize) -> Self {
        Self(to_base64_url(&random_bytes(entropy_bytes)))
    }

    /// Accept an inbound token string
    ///
    /// Only shape is checked; whether the token resolves is the store's
    /// business.
    pub fn parse(raw: &str) -> Result<Self, AccessTokenError> {
        if raw.is_empty() {
            return Err(AccessTokenError::Empty);
        }
        if raw.len() > TOKEN_MAX_LENGTH {
            return Err(AccessTokenError::TooLong);
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AccessTokenError::InvalidCharacter);
        }
        Ok(Self(raw.to_string()))
    }

    /// Token value as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token string (for response bodies)
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_length_and_charset() {
        let token = AccessToken::mint(TOKEN_ENTROPY_BYTES);
        // 32 bytes -> 43 base64url characters, no padding
        assert_eq!(token.as_str().len(), 43);
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_mint_unique() {
        let a = AccessToken::mint(TOKEN_ENTROPY_BYTES);
        let b = AccessToken::mint(TOKEN_ENTROPY_BYTES);
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_accepts_minted() {
        let token = AccessToken::mint(TOKEN_ENTROPY_BYTES);
        assert_eq!(AccessToken::parse(token.as_str()).unwrap(), token);
    }

    #[test]
    fn test_parse_rejects_garbage_shapes() {
        assert_eq!(AccessToken::parse("").unwrap_err(), AccessTokenError::Empty);
        assert_eq!(
            AccessToken::parse(&"x".repeat(TOKEN_MAX_LENGTH + 1)).unwrap_err(),
            AccessTokenError::TooLong
        );
        assert_eq!(
            AccessToken::parse("ab cd").unwrap_err(),
            AccessTokenError::InvalidCharacter
        );
    }

    #[test]
    fn test_debug_redacted() {
        let token = AccessToken::mint(TOKEN_ENTROPY_BYTES);
        let debug = format!("{:?}", token);
        assert!(!debug.contains(token.as_str()));
        assert!(debug.contains("REDACTED"));
    }
}
