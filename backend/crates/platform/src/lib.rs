//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id)
//! - Bearer token header handling

pub mod bearer;
pub mod crypto;
pub mod password;
