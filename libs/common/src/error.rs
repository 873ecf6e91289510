//! Custom error types for the common library
//!
//! This module defines the error types raised by the persistence mirror and
//! the configuration loader.

use thiserror::Error;

/// Custom error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key contains characters the backend cannot store
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Writing the entry would exceed the configured quota
    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// The backend cannot be reached (lock poisoned, medium gone, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Error occurred while reading or writing the backing medium
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized for storage
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reported by the configuration sources
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),

    /// A value was present but is not usable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
