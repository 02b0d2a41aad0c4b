//! Expiry Sweeper
//!
//! Optional background task that periodically reclaims expired
//! entries. The store never sweeps on its own; reclamation is lazy
//! unless this task is scheduled explicitly by the host.

use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use super::ExpiringStore;

/// Periodic expiry sweep over an [`ExpiringStore`]
pub struct Sweeper {
    store: ExpiringStore,
    interval: Duration,
}

impl Sweeper {
    /// Create a new sweeper
    pub fn new(store: ExpiringStore, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run the sweep loop (should be spawned as a task)
    pub async fn run(self) {
        let mut ticker = interval(self.interval);
        info!("expiry sweeper started, interval: {:?}", self.interval);

        loop {
            ticker.tick().await;
            let removed = self.store.sweep_expired();
            if removed > 0 {
                debug!(removed = removed, "swept expired entries");
            }
        }
    }

    /// Spawn the sweeper as a background task.
    /// Must be called within a tokio runtime.
    pub fn spawn(store: ExpiringStore, interval: Duration) -> tokio::task::JoinHandle<()> {
        let sweeper = Self::new(store, interval);
        tokio::spawn(sweeper.run())
    }
}
