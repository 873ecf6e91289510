//! Common library for the account client
//!
//! This crate provides the collaborators the account core relies on but
//! does not own: persistent key-value storage for the session mirror,
//! configuration loading, and the error types they raise.

pub mod config;
pub mod error;
pub mod storage;

/// Example usage of the storage module
///
/// ```rust,no_run
/// use common::config::ClientConfig;
/// use common::storage::{FileStorage, Storage, AUTH_TOKEN_KEY};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ClientConfig::from_env()?;
///     let storage = FileStorage::new(&config.storage_dir);
///     let token = storage.get(AUTH_TOKEN_KEY)?;
///     println!("Persisted token present: {}", token.is_some());
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
