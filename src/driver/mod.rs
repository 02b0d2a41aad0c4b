//! Cache Driver Boundary
//!
//! The narrow contract a cache abstraction layer uses to talk to a
//! backend: a [`Driver`] produces named [`Connection`]s, and a
//! [`DriverRegistry`] resolves drivers by name. Registration is an
//! explicit call made by application startup code, never an
//! import-time side effect.

mod memory;
mod registry;

use std::time::Duration;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::value::Value;

pub use memory::{MemoryConnection, MemoryDriver};
pub use registry::DriverRegistry;

/// Factory for cache connections
pub trait Driver: Send + Sync {
    /// Produce a connection bound to a logical cache name and config
    fn connect(&self, name: &str, config: CacheConfig) -> Result<Box<dyn Connection>>;
}

/// A live cache backend connection.
///
/// All operations return ordinary result values; none are fatal. The
/// miss kinds ([`CacheError::NotFound`](crate::CacheError::NotFound),
/// [`CacheError::Stale`](crate::CacheError::Stale)) and the
/// absence-as-error `exists` contract are part of this boundary.
pub trait Connection: Send + Sync {
    /// Lifecycle hook called before first use
    fn open(&self) -> Result<()>;

    /// Lifecycle hook called when the connection is retired
    fn close(&self) -> Result<()>;

    /// Look up a live value
    fn read(&self, key: &str) -> Result<Value>;

    /// Store a value; `ttl` of `None` requests the configured default
    fn write(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()>;

    /// Report physical presence; absence is an error
    fn exists(&self, key: &str) -> Result<bool>;

    /// Remove a key; succeeds whether or not it was present
    fn delete(&self, key: &str) -> Result<()>;

    /// Atomic per-key increment-and-store, persisted without expiry
    fn serial(&self, key: &str, start: i64, step: i64) -> Result<i64>;

    /// All keys matching a prefix, in unspecified order
    fn keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Delete all keys matching a prefix
    fn clear(&self, prefix: &str) -> Result<()>;
}
