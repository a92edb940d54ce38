//! nscache - A typed, app-namespaced cache layer over Redis
//!
//! Composes versioned keys per application, stores scalars as decimal
//! text and structured values as MessagePack, and reports a missing key
//! as a single `NotExist` error regardless of the backend's own wording.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, KEY_DELIMITER, KEY_PREFIX, KEY_VERSION};
pub use config::RedisConf;
pub use error::{CacheError, Result};
