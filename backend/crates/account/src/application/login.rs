//! Login Use Case
//!
//! Verifies credentials and mints a fresh token. Earlier tokens for the same
//! user stay valid; there is no session list to update.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AccountConfig;
use crate::domain::entity::user::UserRecord;
use crate::domain::store::{KeyValueStore, token_key, user_key};
use crate::domain::value_object::{access_token::AccessToken, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: AccessToken,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> LoginUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        // A name that cannot be valid cannot have a record; report it exactly
        // like an unknown user to avoid enumeration
        let user_name =
            UserName::new(&input.username).map_err(|_| AccountError::InvalidCredentials)?;
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AccountError::InvalidCredentials)?;

        let record_value = self
            .store
            .get(&user_key(&user_name))
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let record: UserRecord = serde_json::from_value(record_value)
            .map_err(|e| AccountError::Internal(format!("Corrupt user record: {e}")))?;

        let hashed = HashedPassword::from_phc_string(&record.password_hash)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        if !hashed.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        // Fresh token, independent of any the user already holds
        let token = AccessToken::mint(self.config.token_entropy_bytes);
        let owner = serde_json::Value::String(user_name.as_str().to_string());
        self.store.set(&token_key(&token), &owner, None).await?;

        tracing::info!(user_name = %user_name, "User logged in");

        Ok(LoginOutput { token })
    }
}
