//! Cache Error Types
//!
//! All failures surface as ordinary result values; nothing in the
//! library panics the caller or retries internally.

use thiserror::Error;

/// Errors produced by the cache store and driver boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key was never written or has already been reclaimed
    #[error("key not found: {0}")]
    NotFound(String),

    /// Key was present but its entry had expired; the entry has been
    /// removed as a side effect of the read that observed it
    #[error("stale entry: {0}")]
    Stale(String),

    /// Existence check found no physical entry. Absence is reported as
    /// an error rather than `Ok(false)` so callers can tell "definitely
    /// absent" apart from an ordinary boolean result.
    #[error("existence check failed: {0}")]
    ExistsFailed(String),

    /// No driver registered under the requested name, or the
    /// connection is otherwise unusable
    #[error("invalid cache connection: {0}")]
    InvalidConnection(String),

    /// A stored value could not be decoded as the requested type
    #[error("invalid cache data: {0}")]
    InvalidData(String),
}

impl CacheError {
    /// True for the two miss kinds (`NotFound`, `Stale`). Both surface
    /// identically to callers that only care about hit-or-miss.
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::NotFound(_) | CacheError::Stale(_))
    }
}

/// Convenience result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
