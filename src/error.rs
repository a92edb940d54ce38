//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.
//!
//! Only two conditions originate here: an invalid application name or store
//! address rejected before any connection is made, and the normalized
//! "key does not exist" value that replaces the store's nil reply. Every
//! other variant wraps an error from the store client or the object codec
//! unmodified; nothing is retried or recovered at this layer.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The requested key does not exist in the store.
    ///
    /// This is the single sentinel every read maps the store's nil reply
    /// to, so calling code never has to know the store's own not-found
    /// representation.
    #[error("key does not exist")]
    NotExist,

    /// Application name rejected at connect time (empty after trimming, or
    /// containing the key delimiter).
    #[error("invalid app name: {0:?}")]
    InvalidAppName(String),

    /// Store address rejected at connect time (not `host:port`).
    #[error("invalid redis address: {0:?}")]
    InvalidAddr(String),

    /// Error surfaced by the store client (connectivity, auth, timeouts,
    /// wrong value kind for the issued command). Passed through unchanged.
    #[error("redis error: {0}")]
    Store(#[from] redis::RedisError),

    /// Stored bytes are not a valid decimal integer of the requested width.
    #[error("stored value is not a valid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Stored bytes are not a valid decimal float.
    #[error("stored value is not a valid float: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Structured value could not be encoded to MessagePack.
    #[error("object encode failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Stored bytes are not valid MessagePack for the requested type.
    #[error("object decode failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

impl CacheError {
    /// Returns true for the normalized missing-key sentinel.
    ///
    /// Convenience for call sites that treat a miss as a non-error path.
    pub fn is_not_exist(&self) -> bool {
        matches!(self, CacheError::NotExist)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
