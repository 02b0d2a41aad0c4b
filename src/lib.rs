//! fadecache - In-Memory Expiring Cache Backend
//!
//! A concurrent key-value store with per-entry expiry, prefix
//! enumeration and an atomic serial counter, exposed through a
//! pluggable driver boundary so a cache abstraction layer can
//! instantiate it by name.
//!
//! ```
//! use fadecache::{CacheConfig, Connection, DriverRegistry, Value};
//! use std::time::Duration;
//!
//! let registry = DriverRegistry::with_memory_driver();
//! let conn = registry
//!     .connect("memory", "sessions", CacheConfig::new())
//!     .unwrap();
//!
//! conn.write("user:1", Value::from("alice"), Some(Duration::from_secs(60)))
//!     .unwrap();
//! assert_eq!(conn.read("user:1").unwrap(), Value::from("alice"));
//! assert_eq!(conn.serial("visits", 0, 1).unwrap(), 1);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod storage;
pub mod value;

pub use config::{CacheConfig, TtlPolicy};
pub use driver::{Connection, Driver, DriverRegistry, MemoryConnection, MemoryDriver};
pub use error::{CacheError, Result};
pub use storage::{ExpiringStore, Sweeper};
pub use value::Value;
