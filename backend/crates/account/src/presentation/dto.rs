//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth
// ============================================================================

/// Auth request (`{action, username, password}`)
///
/// Fields are optional so that missing parameters surface as 400 from our
/// own validation instead of a framework deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub action: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Auth response (register and login)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// State
// ============================================================================

/// Settings read response
///
/// `settings` is `null` when nothing has been written yet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub username: String,
    pub settings: Option<serde_json::Value>,
}

/// Runtime state read response
///
/// `runtime` is `null` when never written or expired.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeResponse {
    pub runtime: Option<serde_json::Value>,
}

/// Generic acknowledgement response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
