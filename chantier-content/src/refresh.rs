//! Periodic full-cache refresh.
//!
//! Optional: content also refreshes naturally through the TTL. The task is
//! owned by the application's top-level lifecycle, started on init and shut
//! down explicitly, never an implicit always-running interval.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::ContentCache;

/// Cancellable background task that clears the cache every `interval`.
pub struct RefreshTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshTask {
    pub fn spawn(cache: ContentCache, interval: Duration) -> Self {
        let (shutdown, mut rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so a freshly warmed
            // cache is not wiped at startup.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tracing::debug!(entries = cache.len(), "refresh sweep, clearing cache");
                        cache.clear();
                    }
                    _ = rx.changed() => break,
                }
            }
        });
        Self { shutdown, handle }
    }

    /// Stop the task and wait for it to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

impl std::fmt::Debug for RefreshTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTask").finish_non_exhaustive()
    }
}
