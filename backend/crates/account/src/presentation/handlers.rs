//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::error::app_error::AppError;

use crate::application::config::AccountConfig;
use crate::application::{
    LoginInput, LoginUseCase, ReadStateUseCase, RegisterInput, RegisterUseCase, WriteStateUseCase,
};
use crate::domain::store::KeyValueStore;
use crate::domain::value_object::namespace::Namespace;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    AuthRequest, AuthResponse, MessageResponse, RuntimeResponse, SettingsResponse,
};
use crate::presentation::middleware::Identity;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Auth (register / login)
// ============================================================================

/// POST /api/auth
///
/// Single endpoint dispatching on the `action` field: `register` answers
/// 201, `login` answers 200, both with a freshly minted token.
pub async fn auth<S>(
    State(state): State<AccountAppState<S>>,
    Json(req): Json<AuthRequest>,
) -> AccountResult<Response>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let action = req
        .action
        .ok_or_else(|| AccountError::InvalidInput("Missing action".to_string()))?;
    let username = req
        .username
        .ok_or_else(|| AccountError::InvalidInput("Missing username".to_string()))?;
    let password = req
        .password
        .ok_or_else(|| AccountError::InvalidInput("Missing password".to_string()))?;

    match action.as_str() {
        "register" => {
            let use_case = RegisterUseCase::new(state.store.clone(), state.config.clone());
            let output = use_case.execute(RegisterInput { username, password }).await?;

            Ok((
                StatusCode::CREATED,
                Json(AuthResponse {
                    message: "User registered.".to_string(),
                    token: output.token.into_string(),
                }),
            )
                .into_response())
        }
        "login" => {
            let use_case = LoginUseCase::new(state.store.clone(), state.config.clone());
            let output = use_case.execute(LoginInput { username, password }).await?;

            Ok((
                StatusCode::OK,
                Json(AuthResponse {
                    message: "Login successful.".to_string(),
                    token: output.token.into_string(),
                }),
            )
                .into_response())
        }
        other => Err(AccountError::InvalidInput(format!(
            "Unknown action: {other}"
        ))),
    }
}

// ============================================================================
// Settings
// ============================================================================

/// GET /api/settings
pub async fn read_settings<S>(
    State(state): State<AccountAppState<S>>,
    Extension(identity): Extension<Identity>,
) -> AccountResult<Json<SettingsResponse>>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let use_case = ReadStateUseCase::new(state.store.clone());
    let settings = use_case
        .execute(&identity.user_name, Namespace::Settings)
        .await?;

    Ok(Json(SettingsResponse {
        username: identity.user_name.to_string(),
        settings,
    }))
}

/// POST /api/settings
pub async fn write_settings<S>(
    State(state): State<AccountAppState<S>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<serde_json::Value>,
) -> AccountResult<Json<MessageResponse>>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let use_case = WriteStateUseCase::new(state.store.clone(), state.config.clone());
    use_case
        .execute(&identity.user_name, Namespace::Settings, payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "Settings saved.".to_string(),
    }))
}

// ============================================================================
// Runtime state
// ============================================================================

/// GET /api/runtime
pub async fn read_runtime<S>(
    State(state): State<AccountAppState<S>>,
    Extension(identity): Extension<Identity>,
) -> AccountResult<Json<RuntimeResponse>>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let use_case = ReadStateUseCase::new(state.store.clone());
    let runtime = use_case
        .execute(&identity.user_name, Namespace::Runtime)
        .await?;

    Ok(Json(RuntimeResponse { runtime }))
}

/// POST /api/runtime
pub async fn write_runtime<S>(
    State(state): State<AccountAppState<S>>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<serde_json::Value>,
) -> AccountResult<Json<MessageResponse>>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let use_case = WriteStateUseCase::new(state.store.clone(), state.config.clone());
    use_case
        .execute(&identity.user_name, Namespace::Runtime, payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "Runtime state synced.".to_string(),
    }))
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::not_found("No such route")
}

/// Fallback for known routes hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method not supported for this route")
}
