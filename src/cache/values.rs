//! Typed Accessors Module
//!
//! The per-type read and write surface of [`Cache`]. Scalars are stored
//! as decimal text, booleans as the integers `1` and `0`, and structured
//! objects as MessagePack bytes. Every getter reports a missing key as
//! [`CacheError::NotExist`](crate::error::CacheError::NotExist).

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::client::Cache;
use crate::cache::codec;
use crate::error::Result;

impl Cache {
    // == Text Values ==

    /// Stores a text value under `key`.
    ///
    /// # Arguments
    /// * `key` - Raw key, namespaced before it reaches the backend
    /// * `value` - Text to store
    /// * `expiry` - Time to live; `None` or a zero duration stores the
    ///   value without an expiry
    pub async fn set_string(&self, key: &str, value: &str, expiry: Option<Duration>) -> Result<()> {
        self.store(key, value, expiry).await
    }

    /// Reads the text value under `key`.
    ///
    /// # Returns
    /// * `Ok(String)` - The stored text
    /// * `Err(CacheError::NotExist)` - No value under `key`
    pub async fn get_string(&self, key: &str) -> Result<String> {
        self.fetch_string(key).await
    }

    // == Integer Values ==

    /// Stores a 32-bit integer under `key` as decimal text.
    pub async fn set_i32(&self, key: &str, value: i32, expiry: Option<Duration>) -> Result<()> {
        self.store(key, value, expiry).await
    }

    /// Reads the value under `key` as a 32-bit integer.
    ///
    /// Fails with a parse error when the stored text is not a decimal
    /// integer in range, including values written by [`Cache::set_i64`]
    /// that do not fit.
    pub async fn get_i32(&self, key: &str) -> Result<i32> {
        let text = self.fetch_string(key).await?;
        codec::parse_i32(&text)
    }

    /// Stores a 64-bit integer under `key` as decimal text.
    pub async fn set_i64(&self, key: &str, value: i64, expiry: Option<Duration>) -> Result<()> {
        self.store(key, value, expiry).await
    }

    /// Reads the value under `key` as a 64-bit integer.
    pub async fn get_i64(&self, key: &str) -> Result<i64> {
        let text = self.fetch_string(key).await?;
        codec::parse_i64(&text)
    }

    // == Float Values ==

    /// Stores a 64-bit float under `key` as decimal text.
    ///
    /// The stored form is the shortest decimal representation that reads
    /// back to the same value, without exponent notation.
    pub async fn set_f64(&self, key: &str, value: f64, expiry: Option<Duration>) -> Result<()> {
        self.store(key, codec::format_f64(value), expiry).await
    }

    /// Reads the value under `key` as a 64-bit float.
    pub async fn get_f64(&self, key: &str) -> Result<f64> {
        let text = self.fetch_string(key).await?;
        codec::parse_f64(&text)
    }

    // == Boolean Values ==

    /// Stores a boolean under `key` as the integer `1` or `0`.
    pub async fn set_bool(&self, key: &str, value: bool, expiry: Option<Duration>) -> Result<()> {
        self.store(key, codec::bool_to_int(value), expiry).await
    }

    /// Reads the value under `key` as a boolean.
    ///
    /// The result is `true` only when the stored integer equals `1`;
    /// any other integer reads as `false`. Text that does not parse as
    /// an integer is a parse error, not `false`.
    pub async fn get_bool(&self, key: &str) -> Result<bool> {
        let int = self.get_i32(key).await?;
        Ok(codec::bool_from_int(int))
    }

    // == Object Values ==

    /// Stores a structured value under `key` as MessagePack bytes.
    ///
    /// # Example
    /// ```no_run
    /// use nscache::{Cache, RedisConf};
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Serialize, Deserialize)]
    /// struct User {
    ///     name: String,
    ///     email: String,
    /// }
    ///
    /// # async fn demo() -> nscache::Result<()> {
    /// let cache = Cache::connect("accounts", &RedisConf::default()).await?;
    /// let user = User {
    ///     name: "ada".to_string(),
    ///     email: "ada@example.com".to_string(),
    /// };
    /// cache.set_object("user.7", &user, None).await?;
    /// let back: User = cache.get_object("user.7").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_object<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        expiry: Option<Duration>,
    ) -> Result<()> {
        let bytes = codec::encode_object(value)?;
        self.store(key, bytes, expiry).await
    }

    /// Reads the value under `key` and decodes it as `T`.
    ///
    /// Decoding fails when the stored bytes were written as a different
    /// shape or not written by [`Cache::set_object`] at all.
    pub async fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let bytes = self.fetch_bytes(key).await?;
        codec::decode_object(&bytes)
    }
}
