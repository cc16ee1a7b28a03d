//! Register Use Case
//!
//! Creates a new user account and mints its first token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::UserRecord;
use crate::domain::store::{KeyValueStore, token_key, user_key};
use crate::domain::value_object::{access_token::AccessToken, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: AccessToken,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> RegisterUseCase<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        // Validate user name
        let user_name = UserName::new(&input.username)
            .map_err(|e| AccountError::InvalidInput(e.to_string()))?;

        // Validate password
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AccountError::InvalidInput(e.to_string()))?;

        // Check-then-set: two concurrent registrations of the same name can
        // both pass this check on an eventually consistent store; the later
        // write wins silently. The store offers no compare-and-set.
        if self.store.get(&user_key(&user_name)).await?.is_some() {
            return Err(AccountError::UsernameTaken);
        }

        // Hash and persist the credential record
        let hashed = password
            .hash()
            .map_err(|e| AccountError::Internal(e.to_string()))?;
        let record = UserRecord::new(hashed.as_phc_string());
        let record_value =
            serde_json::to_value(&record).map_err(|e| AccountError::Internal(e.to_string()))?;
        self.store
            .set(&user_key(&user_name), &record_value, None)
            .await?;

        // Mint the first token and write the reverse index. This second
        // write is not atomic with the first; a crash in between leaves a
        // user who can simply log in again.
        let token = AccessToken::mint(self.config.token_entropy_bytes);
        let owner = serde_json::Value::String(user_name.as_str().to_string());
        self.store.set(&token_key(&token), &owner, None).await?;

        tracing::info!(user_name = %user_name, "User registered");

        Ok(RegisterOutput { token })
    }
}
