//! Key Composition Module
//!
//! Builds the namespaced keys actually sent to the store.

use crate::cache::{KEY_DELIMITER, KEY_PREFIX, KEY_VERSION};
use crate::error::{CacheError, Result};

// == Namespace ==
/// Immutable namespace identity, fixed when a handle is created.
///
/// Every key sent to the store is composed as
/// `<prefix>:<version>:<app>:<raw key>`. The prefix identifies this
/// library's keyspace, the version isolates incompatible wire-format
/// revisions, and the app name isolates applications sharing one store
/// instance. The composed form is the wire contract: changing it orphans
/// every previously stored key.
#[derive(Debug, Clone)]
pub(crate) struct Namespace {
    app: String,
}

impl Namespace {
    // == Constructor ==
    /// Validates an application name and builds the namespace.
    ///
    /// The name is trimmed of surrounding whitespace and must be non-empty
    /// and free of the key delimiter; otherwise composed keys would no
    /// longer parse into four segments.
    pub fn new(app_name: &str) -> Result<Self> {
        let app = app_name.trim();
        if app.is_empty() || app.contains(KEY_DELIMITER) {
            return Err(CacheError::InvalidAppName(app_name.to_string()));
        }
        Ok(Self {
            app: app.to_string(),
        })
    }

    /// Returns the validated application name.
    pub fn app(&self) -> &str {
        &self.app
    }

    // == Compose ==
    /// Composes the namespaced key for a caller-supplied raw key.
    ///
    /// Deterministic: the same raw key maps to the same stored key on
    /// every call. Raw keys may themselves contain the delimiter; the app
    /// segment cannot, so distinct `(app, raw key)` pairs never collide.
    pub fn compose(&self, raw_key: &str) -> String {
        [KEY_PREFIX, KEY_VERSION, &self.app, raw_key].join(KEY_DELIMITER)
    }
}
