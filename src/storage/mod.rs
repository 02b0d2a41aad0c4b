//! Storage Engine
//!
//! Concurrent in-memory key-value store with per-entry expiry.

mod store;
mod sweeper;

pub use store::{Entry, ExpiringStore};
pub use sweeper::Sweeper;
