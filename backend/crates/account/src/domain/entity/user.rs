//! User Record Entity
//!
//! The credential record stored under `user:<name>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record
///
/// Holds only credential material; the username itself is the store key and
/// is not duplicated in the record. Immutable after registration except by a
/// password-change flow, which does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Argon2id hash in PHC string format
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record for a freshly hashed password
    pub fn new(password_hash: impl Into<String>) -> Self {
        Self {
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let record = UserRecord::new("$argon2id$v=19$m=19456,t=2,p=1$abc$def");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("passwordHash"));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn test_roundtrip() {
        let record = UserRecord::new("phc-string");
        let value = serde_json::to_value(&record).unwrap();
        let restored: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(restored.password_hash, "phc-string");
        assert_eq!(restored.created_at, record.created_at);
    }
}
