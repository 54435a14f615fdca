//! TTL cache over document loads.
//!
//! A single shared instance lives for the lifetime of the client. Nothing
//! is persisted; a restart starts cold. Staleness handling is deliberate:
//! when a refresh fails and an expired entry is still around, the expired
//! value is returned instead of the error. Content documents change rarely,
//! so briefly serving old data beats blanking a section of the site.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::Mutex;

use chantier_core::{ContentResult, Document};

/// Configuration for the content cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum age at which a cached document is still served without
    /// invoking the loader.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300), // 5 minutes
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Document,
    fetched_at: DateTime<Utc>,
}

/// In-process document cache with a fixed TTL and stale-on-error fallback.
///
/// Explicitly constructed and injected into loaders; never a module-level
/// global, so tests can run independent instances without cross-test
/// leakage. Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct ContentCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    entries: RwLock<HashMap<String, CacheEntry>>,
    // One gate per key so near-simultaneous callers for the same uncached
    // key trigger a single underlying fetch.
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    ttl: Duration,
}

impl ContentCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                entries: RwLock::new(HashMap::new()),
                in_flight: Mutex::new(HashMap::new()),
                ttl: config.ttl,
            }),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    /// Return the cached value for `key`, invoking `loader` on miss or expiry.
    ///
    /// - Fresh entry (age < TTL): returned as-is, `loader` is not invoked.
    /// - Miss or expired: `loader` runs; its result overwrites the entry.
    /// - `loader` failure with an expired entry present: the expired value
    ///   is returned instead of the error.
    /// - `loader` failure with no entry: the error propagates.
    pub async fn get_or_load<F, Fut>(&self, key: &str, loader: F) -> ContentResult<Document>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ContentResult<Document>>,
    {
        if let Some(value) = self.fresh_value(key) {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }

        let gate = self.gate_for(key).await;
        let _guard = gate.lock().await;

        // A caller that held the gate before us may have populated the entry.
        if let Some(value) = self.fresh_value(key) {
            tracing::debug!(key, "cache hit after in-flight load");
            return Ok(value);
        }

        tracing::debug!(key, "cache miss");
        match loader().await {
            Ok(value) => {
                self.store(key, value.clone());
                Ok(value)
            }
            Err(err) => {
                if let Some(stale) = self.any_value(key) {
                    tracing::warn!(key, error = %err, "refresh failed, serving stale entry");
                    Ok(stale)
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Drop one entry.
    pub fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.inner.entries.write() {
            entries.remove(key);
        }
    }

    /// Drop all entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.inner.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fresh_value(&self, key: &str) -> Option<Document> {
        let entries = self.inner.entries.read().ok()?;
        let entry = entries.get(key)?;
        let age = Utc::now()
            .signed_duration_since(entry.fetched_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        if age < self.inner.ttl {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    fn any_value(&self, key: &str) -> Option<Document> {
        let entries = self.inner.entries.read().ok()?;
        entries.get(key).map(|entry| entry.value.clone())
    }

    fn store(&self, key: &str, value: Document) {
        if let Ok(mut entries) = self.inner.entries.write() {
            // fetched_at is monotonically non-decreasing per key, even if the
            // wall clock steps backwards between overwrites.
            let fetched_at = match entries.get(key) {
                Some(existing) => existing.fetched_at.max(Utc::now()),
                None => Utc::now(),
            };
            entries.insert(key.to_string(), CacheEntry { value, fetched_at });
        }
    }

    async fn gate_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.inner.in_flight.lock().await;
        Arc::clone(
            in_flight
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }
}

impl std::fmt::Debug for ContentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("ttl", &self.inner.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chantier_core::ContentError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type BoxedLoad = std::pin::Pin<Box<dyn Future<Output = ContentResult<Document>> + Send>>;

    fn counting_loader(calls: Arc<AtomicUsize>, value: Document) -> impl FnOnce() -> BoxedLoad {
        move || -> BoxedLoad {
            calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { Ok(value) })
        }
    }

    #[tokio::test]
    async fn test_second_read_within_ttl_skips_loader() {
        let cache = ContentCache::with_defaults();
        let calls = Arc::new(AtomicUsize::new(0));
        let settings = json!({"company_name": "X"});

        let first = cache
            .get_or_load("settings", counting_loader(Arc::clone(&calls), settings.clone()))
            .await
            .unwrap();
        let second = cache
            .get_or_load("settings", counting_loader(Arc::clone(&calls), json!({"company_name": "Y"})))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, settings);
        assert_eq!(second, settings);
    }

    #[tokio::test]
    async fn test_loader_runs_again_after_ttl() {
        let cache = ContentCache::new(CacheConfig::new().with_ttl(Duration::from_millis(20)));
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_load("hero", counting_loader(Arc::clone(&calls), json!(1)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        let value = cache
            .get_or_load("hero", counting_loader(Arc::clone(&calls), json!(2)))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(value, json!(2));
    }

    #[tokio::test]
    async fn test_failed_refresh_serves_stale_value() {
        let cache = ContentCache::new(CacheConfig::new().with_ttl(Duration::from_millis(1)));
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_load("hero", counting_loader(Arc::clone(&calls), json!({"title": "old"})))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let value = cache
            .get_or_load("hero", || async {
                Err(ContentError::Fetch {
                    path: "data/hero.json".to_string(),
                    status: 500,
                })
            })
            .await
            .unwrap();

        assert_eq!(value, json!({"title": "old"}));
    }

    #[tokio::test]
    async fn test_failure_with_empty_cache_propagates() {
        let cache = ContentCache::with_defaults();
        let err = cache
            .get_or_load("hero", || async {
                Err(ContentError::Fetch {
                    path: "data/hero.json".to_string(),
                    status: 404,
                })
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::Fetch {
                path: "data/hero.json".to_string(),
                status: 404,
            }
        );
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let cache = ContentCache::with_defaults();
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_load("settings", counting_loader(Arc::clone(&calls), json!(1)))
            .await
            .unwrap();
        cache.invalidate("settings");
        cache
            .get_or_load("settings", counting_loader(Arc::clone(&calls), json!(2)))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clear_drops_all_entries() {
        let cache = ContentCache::with_defaults();
        let calls = Arc::new(AtomicUsize::new(0));
        cache
            .get_or_load("a", counting_loader(Arc::clone(&calls), json!(1)))
            .await
            .unwrap();
        cache
            .get_or_load("b", counting_loader(Arc::clone(&calls), json!(2)))
            .await
            .unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_callers_share_one_load() {
        let cache = ContentCache::with_defaults();
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_loader = |calls: Arc<AtomicUsize>| {
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(30)).await;
                Ok(json!({"company_name": "X"}))
            }
        };

        let (a, b) = tokio::join!(
            cache.get_or_load("settings", slow_loader(Arc::clone(&calls))),
            cache.get_or_load("settings", slow_loader(Arc::clone(&calls))),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
