//! Configuration Module
//!
//! Connection parameters for the Redis instance backing the cache layer.

use std::env;

use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

use crate::error::{CacheError, Result};

/// Redis connection parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. This is the only configuration surface of the crate; pool
/// sizing, timeouts, and reconnect behavior belong to the store client.
#[derive(Debug, Clone)]
pub struct RedisConf {
    /// Store address as `host:port`
    pub addr: String,
    /// AUTH credential; an empty string disables AUTH
    pub password: String,
    /// Logical database index selected after connecting
    pub db: i64,
}

impl RedisConf {
    /// Creates a new RedisConf by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_ADDR` - Store address as host:port (default: "127.0.0.1:6379")
    /// - `REDIS_PASSWORD` - AUTH credential (default: empty, no AUTH)
    /// - `REDIS_DB` - Logical database index (default: 0)
    pub fn from_env() -> Self {
        Self {
            addr: env::var("REDIS_ADDR").unwrap_or_else(|_| "127.0.0.1:6379".to_string()),
            password: env::var("REDIS_PASSWORD").unwrap_or_default(),
            db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Translates the configuration into redis-rs connection parameters.
    ///
    /// The address is split into host and port here rather than deferred to
    /// dial time, so a malformed address fails fast with
    /// `CacheError::InvalidAddr`. Splitting on the last colon keeps IPv6
    /// hosts working.
    pub(crate) fn connection_info(&self) -> Result<ConnectionInfo> {
        let (host, port) = self
            .addr
            .rsplit_once(':')
            .ok_or_else(|| CacheError::InvalidAddr(self.addr.clone()))?;
        if host.is_empty() {
            return Err(CacheError::InvalidAddr(self.addr.clone()));
        }
        let port: u16 = port
            .parse()
            .map_err(|_| CacheError::InvalidAddr(self.addr.clone()))?;

        Ok(ConnectionInfo {
            addr: ConnectionAddr::Tcp(host.to_string(), port),
            redis: RedisConnectionInfo {
                db: self.db,
                password: (!self.password.is_empty()).then(|| self.password.clone()),
                ..Default::default()
            },
        })
    }
}

impl Default for RedisConf {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:6379".to_string(),
            password: String::new(),
            db: 0,
        }
    }
}
