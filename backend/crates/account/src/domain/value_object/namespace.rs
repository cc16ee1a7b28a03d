//! State Namespace Value Object
//!
//! Logical partitions of a user's stored JSON blobs, each with its own
//! expiry policy.

use derive_more::Display;

/// State namespace
///
/// `Settings` is durable; `Runtime` is volatile and written with a TTL so
/// stale state does not linger forever.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    #[display("settings")]
    Settings,
    #[display("runtime")]
    Runtime,
}

impl Namespace {
    /// Store key prefix for this namespace
    pub const fn prefix(&self) -> &'static str {
        match self {
            Namespace::Settings => "settings",
            Namespace::Runtime => "runtime",
        }
    }

    /// Whether blobs in this namespace expire
    pub const fn is_volatile(&self) -> bool {
        matches!(self, Namespace::Runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_display() {
        assert_eq!(Namespace::Settings.prefix(), "settings");
        assert_eq!(Namespace::Runtime.prefix(), "runtime");
        assert_eq!(Namespace::Settings.to_string(), "settings");
        assert_eq!(Namespace::Runtime.to_string(), "runtime");
    }

    #[test]
    fn test_volatility() {
        assert!(!Namespace::Settings.is_volatile());
        assert!(Namespace::Runtime.is_volatile());
    }
}
