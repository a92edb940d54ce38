//! Cache Module
//!
//! Typed, namespaced key-value access backed by a shared Redis connection.
//!
//! The [`Cache`] handle owns the connection and the namespace identity;
//! `key` composes the namespaced keys sent over the wire, `codec` holds the
//! value encodings, and `values` exposes one set/get pair per supported
//! value type.

mod client;
mod codec;
mod key;
mod values;


// Re-export public types
pub use client::Cache;

// == Public Constants ==
/// Fixed first segment of every composed key, identifying this library's
/// keyspace inside a shared store.
pub const KEY_PREFIX: &str = "nscache";

/// Second segment of every composed key. Bumped only for wire-format
/// revisions that must not read each other's data.
pub const KEY_VERSION: &str = "v1";

/// Separator between key segments. Application names must not contain it;
/// raw keys may.
pub const KEY_DELIMITER: &str = ":";
