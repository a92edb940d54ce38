//! Cache Client Module
//!
//! The [`Cache`] handle owns an app namespace and a managed connection to
//! the Redis backend. Handles are cheap to clone and safe to share across
//! tasks; clones talk to the same underlying multiplexed connection, and
//! dropping the last clone closes it.

use std::fmt;
use std::time::Duration;

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, ToRedisArgs};
use tracing::{debug, warn};

use crate::cache::key::Namespace;
use crate::config::RedisConf;
use crate::error::{CacheError, Result};

// == Cache Handle ==

/// A typed cache bound to one application namespace.
///
/// Every key passed to an operation is composed into the full namespaced
/// form before it reaches the backend, so two caches connected with
/// different app names never see each other's entries.
///
/// Each operation is a single awaited round trip with no retries or
/// batching at this layer. Dropping the future cancels the call; callers
/// that need a deadline wrap the call in `tokio::time::timeout`.
#[derive(Clone)]
pub struct Cache {
    conn: ConnectionManager,
    ns: Namespace,
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("app", &self.ns.app())
            .finish_non_exhaustive()
    }
}

impl Cache {
    // == Construction ==

    /// Connects to the backend and binds the handle to an app namespace.
    ///
    /// The app name is validated before any network activity, so an
    /// invalid name fails fast even when the server is unreachable. The
    /// connection is probed with a ping so a bad address surfaces here
    /// rather than on the first real operation.
    ///
    /// # Arguments
    /// * `app` - Application namespace; trimmed, must be non-empty and
    ///   must not contain the key delimiter
    /// * `conf` - Backend address, password, and database index
    ///
    /// # Returns
    /// * `Ok(Cache)` - Connected handle ready for use
    /// * `Err(CacheError::InvalidAppName)` - App name failed validation
    /// * `Err(CacheError::InvalidAddr)` - Address could not be parsed
    /// * `Err(CacheError::Store)` - Connection or ping failure
    pub async fn connect(app: &str, conf: &RedisConf) -> Result<Self> {
        let ns = Namespace::new(app)?;
        let client = Client::open(conf.connection_info()?)?;
        let mut conn = client.get_connection_manager().await?;

        let pong: String = match redis::cmd("PING").query_async(&mut conn).await {
            Ok(pong) => pong,
            Err(err) => {
                warn!(app = ns.app(), addr = %conf.addr, error = %err, "cache backend refused ping");
                return Err(err.into());
            }
        };
        debug!(app = ns.app(), addr = %conf.addr, pong = %pong, "connected to cache backend");

        Ok(Self { conn, ns })
    }

    // == Key Introspection ==

    /// Returns the app namespace this handle is bound to.
    pub fn app_name(&self) -> &str {
        self.ns.app()
    }

    /// Returns the full namespaced key an operation would use for `key`.
    pub fn compose_key(&self, key: &str) -> String {
        self.ns.compose(key)
    }

    /// Returns a clone of the underlying connection for commands this
    /// layer does not cover. Keys passed to it are not namespaced.
    pub fn raw(&self) -> ConnectionManager {
        self.conn.clone()
    }

    // == Store Operations ==

    /// Deletes the entry under `key`.
    ///
    /// Succeeds whether or not the key existed.
    pub async fn del(&self, key: &str) -> Result<()> {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        let _: () = conn.del(&full).await?;
        debug!(key = %full, "deleted cache entry");
        Ok(())
    }

    /// Returns the remaining time to live of `key` in seconds.
    ///
    /// The backend's sentinels pass through unmodified: `-2` when the key
    /// does not exist, `-1` when it exists without an expiry.
    pub async fn ttl(&self, key: &str) -> Result<i64> {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        let ttl: i64 = conn.ttl(&full).await?;
        Ok(ttl)
    }

    /// Returns the remaining time to live of `key` in milliseconds.
    ///
    /// Same sentinel contract as [`Cache::ttl`]: `-2` for a missing key,
    /// `-1` for a key without an expiry.
    pub async fn pttl(&self, key: &str) -> Result<i64> {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        let ttl: i64 = conn.pttl(&full).await?;
        Ok(ttl)
    }

    // == Internal Plumbing ==

    /// Writes a value under the namespaced key, with an optional expiry.
    ///
    /// `None` and a zero duration both mean no expiry. A non-zero expiry
    /// is applied with millisecond precision; sub-millisecond durations
    /// round up to one millisecond so they still expire.
    pub(crate) async fn store<V>(&self, key: &str, value: V, expiry: Option<Duration>) -> Result<()>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        match expiry {
            Some(ttl) if !ttl.is_zero() => {
                let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
                let _: () = conn.pset_ex(&full, value, millis).await?;
            }
            _ => {
                let _: () = conn.set(&full, value).await?;
            }
        }
        Ok(())
    }

    /// Reads the value under the namespaced key as text.
    ///
    /// A missing key surfaces as [`CacheError::NotExist`].
    pub(crate) async fn fetch_string(&self, key: &str) -> Result<String> {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(&full).await?;
        value.ok_or(CacheError::NotExist)
    }

    /// Reads the value under the namespaced key as raw bytes.
    ///
    /// A missing key surfaces as [`CacheError::NotExist`].
    pub(crate) async fn fetch_bytes(&self, key: &str) -> Result<Vec<u8>> {
        let full = self.ns.compose(key);
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(&full).await?;
        value.ok_or(CacheError::NotExist)
    }
}
