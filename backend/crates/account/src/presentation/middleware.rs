//! Identity Gate Middleware
//!
//! Extracts the bearer token, resolves it through the reverse index, and
//! hands the authenticated user name to downstream handlers. The status
//! asymmetry is deliberate: no credential at all answers 401, a credential
//! that will not resolve answers 403.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::ResolveTokenUseCase;
use crate::domain::store::KeyValueStore;
use crate::domain::value_object::{access_token::AccessToken, user_name::UserName};
use crate::error::AccountError;
use crate::presentation::handlers::AccountAppState;

/// Authenticated identity stored in request extensions
#[derive(Clone)]
pub struct Identity {
    pub user_name: UserName,
}

/// Middleware that requires a resolvable bearer token
pub async fn require_identity<S>(
    State(state): State<AccountAppState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let raw = match platform::bearer::extract_bearer(req.headers()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "Request without usable bearer credential");
            return Err(AccountError::MissingBearer.into_response());
        }
    };

    // A token that cannot even be a store key cannot resolve; report it
    // exactly like an unknown one
    let token = match AccessToken::parse(&raw) {
        Ok(token) => token,
        Err(_) => return Err(AccountError::TokenUnresolved.into_response()),
    };

    let resolver = ResolveTokenUseCase::new(state.store.clone(), state.config.clone());
    let user_name = match resolver.execute(&token).await {
        Ok(user_name) => user_name,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(Identity { user_name });

    Ok(next.run(req).await)
}
