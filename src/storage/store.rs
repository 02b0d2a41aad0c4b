//! Expiring Key-Value Store
//!
//! Concurrent mapping from string keys to payloads tagged with an
//! absolute expiry instant. Built on DashMap so reads, writes and
//! deletes on different keys proceed without a global lock; the entry
//! API doubles as the per-key critical section the serial counter
//! needs.

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{CacheError, Result};
use crate::value::Value;

/// Entry in the store with value and expiration
#[derive(Debug, Clone)]
pub struct Entry {
    pub value: Value,
    pub expires_at: Option<Instant>,
}

impl Entry {
    pub fn new(value: Value, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|d| Instant::now() + d),
        }
    }

    /// Entry that never expires (serial counters are stored this way)
    pub fn permanent(value: Value) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// An entry is expired once its expiry instant has been reached.
    /// A zero TTL therefore expires on the very next observation.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|t| t <= Instant::now()).unwrap_or(false)
    }
}

/// Concurrent in-memory store with per-entry expiry.
///
/// Expired entries are logically absent but reclaimed lazily: the read
/// that observes an expired entry removes it. No background work runs
/// unless a [`Sweeper`](crate::storage::Sweeper) is scheduled
/// explicitly.
#[derive(Debug, Clone, Default)]
pub struct ExpiringStore {
    inner: Arc<DashMap<String, Entry>>,
}

impl ExpiringStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Look up a live value.
    ///
    /// A physically present but expired entry is removed as a side
    /// effect and reported as [`CacheError::Stale`]; a key that was
    /// never written reports [`CacheError::NotFound`]. Both are misses
    /// to callers that do not care about the distinction.
    pub fn read(&self, key: &str) -> Result<Value> {
        match self.inner.get(key) {
            Some(entry) if !entry.is_expired() => Ok(entry.value.clone()),
            Some(entry) => {
                // Release the shard guard before removing
                drop(entry);
                self.inner.remove(key);
                Err(CacheError::Stale(key.to_string()))
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    /// Store or overwrite a value.
    ///
    /// `ttl` of `None` means the entry never expires; a zero duration
    /// yields an entry already at its expiry. Last writer wins on races
    /// to the same key. Cannot fail: there is no capacity bound or
    /// validation.
    pub fn write(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<()> {
        self.inner.insert(key.to_string(), Entry::new(value, ttl));
        Ok(())
    }

    /// Report physical presence without evaluating expiry.
    ///
    /// Absence is an error, not `Ok(false)`: downstream callers branch
    /// on "definitely absent" as a distinct signal.
    pub fn exists(&self, key: &str) -> Result<bool> {
        if self.inner.contains_key(key) {
            Ok(true)
        } else {
            Err(CacheError::ExistsFailed(key.to_string()))
        }
    }

    /// Remove a key; succeeds whether or not it was present
    pub fn delete(&self, key: &str) -> Result<()> {
        self.inner.remove(key);
        Ok(())
    }

    /// Atomic increment-and-store counter.
    ///
    /// Loads the current numeric value (missing, expired or non-numeric
    /// entries read as `start`), adds `step`, and stores the result
    /// permanently. The DashMap entry lock serializes concurrent calls
    /// on the same key, so no increments are lost; calls on different
    /// keys contend only at shard granularity.
    pub fn serial(&self, key: &str, start: i64, step: i64) -> Result<i64> {
        match self.inner.entry(key.to_string()) {
            MapEntry::Occupied(mut slot) => {
                let current = if slot.get().is_expired() {
                    None
                } else {
                    slot.get().value.as_serial()
                };
                let next = current.unwrap_or(start) + step;
                slot.insert(Entry::permanent(Value::Integer(next)));
                Ok(next)
            }
            MapEntry::Vacant(slot) => {
                let next = start + step;
                slot.insert(Entry::permanent(Value::Integer(next)));
                Ok(next)
            }
        }
    }

    /// All physically present keys starting with `prefix`, in
    /// unspecified order. Logically expired entries are included; an
    /// empty prefix matches everything.
    pub fn keys(&self, prefix: &str) -> Vec<String> {
        self.inner
            .iter()
            .map(|r| r.key().clone())
            .filter(|k| k.starts_with(prefix))
            .collect()
    }

    /// Delete every key matching `prefix`.
    ///
    /// Enumerates via [`keys`](Self::keys) and deletes each hit. The
    /// fallible signature exists for driver-contract parity; in-memory
    /// enumeration itself cannot fail.
    pub fn clear(&self, prefix: &str) -> Result<()> {
        for key in self.keys(prefix) {
            self.inner.remove(&key);
        }
        Ok(())
    }

    /// Number of physically present keys, expired included
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no keys are physically present
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove every expired entry, returning the count removed.
    /// Called from the sweeper, never from the read/write paths.
    pub fn sweep_expired(&self) -> usize {
        let mut removed = 0;
        self.inner.retain(|_, entry| {
            if entry.is_expired() {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }
}
