//! Driver Registry
//!
//! Name-to-driver table the host consults to build connections.
//! Drivers are registered by an explicit startup call.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

use super::{Connection, Driver, MemoryDriver};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

/// Registry of named cache drivers
#[derive(Default)]
pub struct DriverRegistry {
    drivers: DashMap<String, Arc<dyn Driver>>,
}

impl DriverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            drivers: DashMap::new(),
        }
    }

    /// Registry with the in-memory driver pre-registered as "memory"
    pub fn with_memory_driver() -> Self {
        let registry = Self::new();
        registry.register("memory", Arc::new(MemoryDriver::new()));
        registry
    }

    /// Register a driver under a name, replacing any previous one
    pub fn register(&self, name: &str, driver: Arc<dyn Driver>) {
        info!(driver = name, "cache driver registered");
        self.drivers.insert(name.to_string(), driver);
    }

    /// Whether a driver is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Build a connection using the driver registered under `driver`,
    /// bound to the logical cache `name`
    pub fn connect(
        &self,
        driver: &str,
        name: &str,
        config: CacheConfig,
    ) -> Result<Box<dyn Connection>> {
        let entry = self
            .drivers
            .get(driver)
            .ok_or_else(|| CacheError::InvalidConnection(driver.to_string()))?;
        entry.value().connect(name, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_connect_registered_driver() {
        let registry = DriverRegistry::with_memory_driver();
        assert!(registry.contains("memory"));

        let conn = registry
            .connect("memory", "sessions", CacheConfig::new())
            .unwrap();
        conn.write("k", Value::Integer(1), None).unwrap();
        assert_eq!(conn.read("k").unwrap(), Value::Integer(1));
    }

    #[test]
    fn test_connect_unknown_driver() {
        let registry = DriverRegistry::new();
        let err = registry
            .connect("redis", "sessions", CacheConfig::new())
            .err()
            .unwrap();
        assert!(matches!(err, CacheError::InvalidConnection(_)));
    }

    #[test]
    fn test_register_replaces() {
        let registry = DriverRegistry::new();
        registry.register("memory", Arc::new(MemoryDriver::new()));
        registry.register("memory", Arc::new(MemoryDriver::new()));
        assert!(registry.contains("memory"));
    }

    #[test]
    fn test_connections_are_independent() {
        let registry = DriverRegistry::with_memory_driver();
        let a = registry
            .connect("memory", "a", CacheConfig::new())
            .unwrap();
        let b = registry
            .connect("memory", "b", CacheConfig::new())
            .unwrap();

        a.write("k", Value::Integer(1), None).unwrap();
        assert!(b.read("k").unwrap_err().is_miss());
    }
}
