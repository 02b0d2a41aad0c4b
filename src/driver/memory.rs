//! In-Memory Cache Backend
//!
//! [`MemoryDriver`] binds an [`ExpiringStore`] to the driver boundary.
//! The connection applies the configured TTL policy on writes and
//! owns the optional background sweeper.

use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

use super::{Connection, Driver};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::storage::{ExpiringStore, Sweeper};
use crate::value::Value;

/// Driver for the in-memory expiring store
#[derive(Debug, Default)]
pub struct MemoryDriver;

impl MemoryDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Driver for MemoryDriver {
    fn connect(&self, name: &str, config: CacheConfig) -> Result<Box<dyn Connection>> {
        Ok(Box::new(MemoryConnection::new(name, config)))
    }
}

/// A connection to an in-memory expiring store
pub struct MemoryConnection {
    name: String,
    config: CacheConfig,
    store: ExpiringStore,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl MemoryConnection {
    /// Create a connection bound to a logical cache name
    pub fn new(name: &str, config: CacheConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            store: ExpiringStore::new(),
            sweeper: Mutex::new(None),
        }
    }

    /// Logical cache name this connection is bound to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct handle to the backing store (shares the same map)
    pub fn store(&self) -> ExpiringStore {
        self.store.clone()
    }
}

impl Connection for MemoryConnection {
    /// Starts the background sweeper when the config schedules one.
    /// Must run inside a tokio runtime in that case; with the default
    /// lazy-only config it is a plain no-op.
    fn open(&self) -> Result<()> {
        if let Some(interval) = self.config.sweep_interval {
            let handle = Sweeper::spawn(self.store.clone(), interval);
            *self.sweeper.lock().unwrap() = Some(handle);
            info!(name = %self.name, "cache connection opened with sweeper");
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(handle) = self.sweeper.lock().unwrap().take() {
            handle.abort();
            info!(name = %self.name, "cache connection closed, sweeper stopped");
        }
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Value> {
        self.store.read(key)
    }

    fn write(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()> {
        self.store.write(key, value, self.config.resolve_ttl(ttl))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        self.store.exists(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.store.delete(key)
    }

    fn serial(&self, key: &str, start: i64, step: i64) -> Result<i64> {
        self.store.serial(key, start, step)
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.store.keys(prefix))
    }

    fn clear(&self, prefix: &str) -> Result<()> {
        self.store.clear(prefix)
    }
}
