//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod resolve_token;
pub mod state_access;

// Re-exports
pub use config::AccountConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_token::ResolveTokenUseCase;
pub use state_access::{ReadStateUseCase, WriteStateUseCase};
