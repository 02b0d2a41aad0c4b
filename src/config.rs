//! Cache Configuration

use std::time::Duration;

/// Which TTL a write honors.
///
/// Two observed deployments disagree on whether the per-call TTL or the
/// connection-level default wins, so both behaviors are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtlPolicy {
    /// Per-call TTL wins; the configured default fills in when the call
    /// carries none
    #[default]
    HonorPerCall,
    /// The configured default always wins and per-call TTLs are ignored
    ForceConfigured,
}

/// Connection-level cache configuration
#[derive(Debug, Clone, Default)]
pub struct CacheConfig {
    /// TTL applied when a write carries no per-call TTL.
    /// `None` makes such writes permanent.
    pub default_ttl: Option<Duration>,

    /// How per-call TTLs interact with `default_ttl`
    pub ttl_policy: TtlPolicy,

    /// Interval for the background expiry sweep. `None` (the default)
    /// disables it; reclamation then happens only lazily on access.
    pub sweep_interval: Option<Duration>,
}

impl CacheConfig {
    /// Create a config with no default TTL and no sweeper
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default TTL
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Set the TTL policy
    pub fn with_ttl_policy(mut self, policy: TtlPolicy) -> Self {
        self.ttl_policy = policy;
        self
    }

    /// Enable the background sweep at the given interval
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Resolve the TTL a write should use
    pub fn resolve_ttl(&self, requested: Option<Duration>) -> Option<Duration> {
        match self.ttl_policy {
            TtlPolicy::HonorPerCall => requested.or(self.default_ttl),
            TtlPolicy::ForceConfigured => self.default_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::new();
        assert_eq!(config.default_ttl, None);
        assert_eq!(config.ttl_policy, TtlPolicy::HonorPerCall);
        assert_eq!(config.sweep_interval, None);
    }

    #[test]
    fn test_resolve_honor_per_call() {
        let config = CacheConfig::new().with_default_ttl(Duration::from_secs(60));

        assert_eq!(
            config.resolve_ttl(Some(Duration::from_secs(5))),
            Some(Duration::from_secs(5))
        );
        assert_eq!(config.resolve_ttl(None), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_resolve_force_configured() {
        let config = CacheConfig::new()
            .with_default_ttl(Duration::from_secs(60))
            .with_ttl_policy(TtlPolicy::ForceConfigured);

        assert_eq!(
            config.resolve_ttl(Some(Duration::from_secs(5))),
            Some(Duration::from_secs(60))
        );
        assert_eq!(config.resolve_ttl(None), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_resolve_without_default() {
        let config = CacheConfig::new().with_ttl_policy(TtlPolicy::ForceConfigured);
        assert_eq!(config.resolve_ttl(Some(Duration::from_secs(5))), None);
    }
}
