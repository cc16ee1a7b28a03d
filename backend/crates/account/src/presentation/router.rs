//! Account Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::store::KeyValueStore;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::require_identity;

/// Create the account router for any store implementation
///
/// `/auth` is public; `/settings` and `/runtime` sit behind the identity
/// gate. Unsupported methods on known routes answer 405.
pub fn account_router<S>(store: S, config: AccountConfig) -> Router
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route(
            "/settings",
            get(handlers::read_settings::<S>).post(handlers::write_settings::<S>),
        )
        .route(
            "/runtime",
            get(handlers::read_runtime::<S>).post(handlers::write_runtime::<S>),
        )
        .route_layer(from_fn_with_state(state.clone(), require_identity::<S>));

    Router::new()
        .route("/auth", post(handlers::auth::<S>))
        .merge(protected)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
