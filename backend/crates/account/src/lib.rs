//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, the store capability trait
//! - `application/` - Use cases and application services
//! - `infra/` - Backing store implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration/login with username + password
//! - Opaque bearer tokens resolved through a reverse index
//! - Per-user JSON state blobs (`settings` durable, `runtime` expiring)
//!
//! ## Consistency Model
//! - All coordination lives in the backing key-value store (get/set/expire only)
//! - Token lookups retry with a fixed pause to mask read-after-write lag
//! - State writes are last-writer-wins, no versioning

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::memory::MemoryStore;
pub use infra::rest::RestStore;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::store::*;
    pub use crate::infra::memory::MemoryStore;
    pub use crate::infra::rest::RestStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
