//! Time-bounded in-memory cache for search results
//!
//! Entries expire `ttl` after they were last written. Expiry is enforced on
//! the read path (an expired entry is removed and reported as a miss) and by
//! a background sweeper that drops expired entries nobody reads again.
//!
//! The store is guarded by a mutex since the sweeper runs on the tokio
//! runtime alongside request handlers. A `set` followed by a `get` on the
//! same thread always observes the written value.

use crate::config::settings::DEFAULT_SWEEP_INTERVAL_SECS;
use crate::config::CacheSettings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

/// Shortest sweep period; `tokio::time::interval` rejects zero
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

type Store<T> = Mutex<HashMap<String, CacheEntry<T>>>;

/// A cached payload with its insertion time and lifetime
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    payload: T,
    inserted_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn new(payload: T, ttl: Duration) -> Self {
        Self {
            payload,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) > self.ttl
    }
}

/// Search result cache keyed by encoded query
pub struct SearchCache<T> {
    /// Cached entries indexed by encoded key
    store: Arc<Store<T>>,

    /// TTL used by `set`
    default_ttl: Duration,

    /// Period of the background sweep
    sweep_interval: Duration,

    /// Optional cap on the number of entries
    max_entries: Option<usize>,

    /// Handle of the running sweeper, if any
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<T> SearchCache<T>
where
    T: Clone + Send + 'static,
{
    /// Create an empty cache without a sweeper
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
            default_ttl,
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            max_entries: None,
            sweeper: Mutex::new(None),
        }
    }

    /// Create an empty cache from settings, without a sweeper
    pub fn from_settings(settings: &CacheSettings) -> Self {
        let cache = Self::new(settings.default_ttl()).with_sweep_interval(settings.sweep_interval());
        match settings.max_entries {
            Some(max) => cache.with_max_entries(max),
            None => cache,
        }
    }

    /// Create a cache from settings and start its sweeper
    ///
    /// Must be called from within a tokio runtime for the sweeper to start.
    pub fn create(settings: &CacheSettings) -> Self {
        let cache = Self::from_settings(settings);
        cache.start_sweeper();
        cache
    }

    /// Set the sweep period, at least one millisecond
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval.max(MIN_SWEEP_INTERVAL);
        self
    }

    /// Cap the number of entries
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = Some(max.max(1));
        self
    }

    /// Start the background sweeper
    ///
    /// Returns `false` if a sweeper is already running or there is no tokio
    /// runtime to run it on. Never starts a second sweeper.
    pub fn start_sweeper(&self) -> bool {
        let mut sweeper = self.sweeper.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = sweeper.as_ref() {
            if !handle.is_finished() {
                warn!("Cache sweeper already running, ignoring start request");
                return false;
            }
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No tokio runtime available, cache sweeper not started");
                return false;
            }
        };

        let store = Arc::downgrade(&self.store);
        let interval = self.sweep_interval;
        *sweeper = Some(runtime.spawn(sweep_loop(store, interval)));

        info!("Cache sweeper started (interval: {:?})", interval);
        true
    }

    /// Stop the background sweeper
    pub fn destroy(&self) {
        let handle = self
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            handle.abort();
            info!("Cache sweeper stopped");
        }
    }

    /// Whether the background sweeper is running
    pub fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Get a cached payload
    ///
    /// An entry past its TTL is removed and reported as a miss.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut store = self.lock();
        let now = Instant::now();

        let expired = match store.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                debug!("Cache miss: {}", key);
                return None;
            }
        };

        if expired {
            store.remove(key);
            debug!("Cache entry expired on read: {}", key);
            return None;
        }

        debug!("Cache hit: {}", key);
        store.get(key).map(|entry| entry.payload.clone())
    }

    /// Store a payload under the default TTL
    pub fn set(&self, key: impl Into<String>, data: T) {
        self.set_with_ttl(key, data, self.default_ttl);
    }

    /// Store a payload with an explicit TTL
    ///
    /// Overwrites any existing entry for the key and resets its age.
    pub fn set_with_ttl(&self, key: impl Into<String>, data: T, ttl: Duration) {
        let key = key.into();
        let mut store = self.lock();

        if let Some(max) = self.max_entries {
            if !store.contains_key(&key) && store.len() >= max {
                make_room(&mut store, max);
            }
        }

        debug!("Cache set: {} (ttl: {:?})", key, ttl);
        store.insert(key, CacheEntry::new(data, ttl));
    }

    /// Remove one entry
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.lock().remove(key).is_some();
        if removed {
            debug!("Cache invalidated: {}", key);
        }
        removed
    }

    /// Remove every entry
    pub fn clear(&self) {
        let mut store = self.lock();
        debug!("Cache cleared ({} entries)", store.len());
        store.clear();
    }

    /// Drop every expired entry, returning how many were removed
    ///
    /// This is what the background sweeper runs on each tick.
    pub fn purge_expired(&self) -> usize {
        purge(&self.store)
    }

    /// Number of stored entries, expired or not
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the cache contents
    ///
    /// Reports entries as stored, without evicting expired ones.
    pub fn stats(&self) -> CacheStats {
        let store = self.lock();
        let now = Instant::now();

        let mut entries: Vec<CacheEntryStats> = store
            .iter()
            .map(|(key, entry)| CacheEntryStats {
                key: key.clone(),
                age: now.saturating_duration_since(entry.inserted_at),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheStats {
            size: store.len(),
            entries,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for SearchCache<T> {
    fn drop(&mut self) {
        if let Some(handle) = self
            .sweeper
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

async fn sweep_loop<T>(store: Weak<Store<T>>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let Some(store) = store.upgrade() else {
            break;
        };

        let removed = purge(&store);
        if removed > 0 {
            debug!("Cache sweep removed {} expired entries", removed);
        } else {
            trace!("Cache sweep found nothing to remove");
        }
    }
}

fn purge<T>(store: &Store<T>) -> usize {
    let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
    let now = Instant::now();
    let before = store.len();
    store.retain(|_, entry| !entry.is_expired(now));
    before - store.len()
}

/// Free a slot for a new key: expired entries first, then the oldest insert
fn make_room<T>(store: &mut HashMap<String, CacheEntry<T>>, max: usize) {
    let now = Instant::now();
    store.retain(|_, entry| !entry.is_expired(now));

    while store.len() >= max {
        let oldest = store
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone());

        match oldest {
            Some(key) => {
                debug!("Cache full, evicting oldest entry: {}", key);
                store.remove(&key);
            }
            None => break,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    pub entries: Vec<CacheEntryStats>,
}

/// Age of a single cache entry
#[derive(Debug, Clone)]
pub struct CacheEntryStats {
    pub key: String,
    pub age: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> SearchCache<Vec<String>> {
        SearchCache::new(Duration::from_secs(300))
    }

    fn payload(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_set_then_get() {
        let cache = cache();
        cache.set("chu", payload(&["chu", "water"]));

        assert_eq!(cache.get("chu"), Some(payload(&["chu", "water"])));
        assert_eq!(cache.get("ri"), None);
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let cache = cache();
        cache.set("chu", payload(&["first"]));
        cache.set("chu", payload(&["second"]));

        assert_eq!(cache.get("chu"), Some(payload(&["second"])));
        assert_eq!(cache.stats().size, 1);
    }

    #[test]
    fn test_overwrite_resets_age() {
        let cache = cache();
        cache.set_with_ttl("chu", payload(&["first"]), Duration::from_millis(80));
        std::thread::sleep(Duration::from_millis(50));
        cache.set_with_ttl("chu", payload(&["second"]), Duration::from_millis(80));
        std::thread::sleep(Duration::from_millis(50));

        assert_eq!(cache.get("chu"), Some(payload(&["second"])));
    }

    #[test]
    fn test_expired_entry_is_a_miss() {
        let cache = cache();
        cache.set_with_ttl("chu", payload(&["chu"]), Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.get("chu"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_stats_do_not_evict() {
        let cache = cache();
        cache.set_with_ttl("chu", payload(&["chu"]), Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(20));

        let stats = cache.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.entries[0].key, "chu");
        assert!(stats.entries[0].age >= Duration::from_millis(20));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stats_are_sorted_by_key() {
        let cache = cache();
        cache.set("ri", payload(&[]));
        cache.set("chu", payload(&[]));
        cache.set("kha", payload(&[]));

        let keys: Vec<String> = cache.stats().entries.into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["chu", "kha", "ri"]);
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = cache();
        cache.set("chu", payload(&["chu"]));
        cache.set("ri", payload(&["ri"]));

        assert!(cache.invalidate("chu"));
        assert!(!cache.invalidate("chu"));
        assert_eq!(cache.get("chu"), None);
        assert_eq!(cache.get("ri"), Some(payload(&["ri"])));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let cache = cache();
        cache.set_with_ttl("old", payload(&[]), Duration::from_millis(5));
        cache.set("fresh", payload(&[]));
        std::thread::sleep(Duration::from_millis(15));

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").is_some());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let cache = cache().with_max_entries(2);
        cache.set("a", payload(&["a"]));
        std::thread::sleep(Duration::from_millis(2));
        cache.set("b", payload(&["b"]));
        std::thread::sleep(Duration::from_millis(2));
        cache.set("c", payload(&["c"]));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_capacity_prefers_expired_entries() {
        let cache = cache().with_max_entries(2);
        cache.set("a", payload(&["a"]));
        cache.set_with_ttl("b", payload(&["b"]), Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(15));
        cache.set("c", payload(&["c"]));

        assert!(cache.get("a").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_capacity_overwrite_does_not_evict() {
        let cache = cache().with_max_entries(2);
        cache.set("a", payload(&["a"]));
        cache.set("b", payload(&["b"]));
        cache.set("a", payload(&["a2"]));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b"), Some(payload(&["b"])));
    }

    #[test]
    fn test_no_sweeper_outside_runtime() {
        let cache = cache();
        assert!(!cache.start_sweeper());
        assert!(!cache.is_sweeping());
    }

    #[tokio::test]
    async fn test_sweeper_evicts_unread_entries() {
        let cache = cache().with_sweep_interval(Duration::from_millis(20));
        assert!(cache.start_sweeper());

        cache.set_with_ttl("chu", payload(&["chu"]), Duration::from_millis(5));
        cache.set("ri", payload(&["ri"]));
        tokio::time::sleep(Duration::from_millis(100)).await;

        let stats = cache.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.entries[0].key, "ri");

        cache.destroy();
    }

    #[tokio::test]
    async fn test_sweeper_starts_once() {
        let cache = cache();
        assert!(cache.start_sweeper());
        assert!(!cache.start_sweeper());
        assert!(cache.is_sweeping());

        cache.destroy();
        assert!(!cache.is_sweeping());
    }

    #[tokio::test]
    async fn test_destroy_stops_sweeping() {
        let cache = cache().with_sweep_interval(Duration::from_millis(10));
        cache.start_sweeper();
        cache.destroy();

        cache.set_with_ttl("chu", payload(&["chu"]), Duration::from_millis(1));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.stats().size, 1);
    }

    #[tokio::test]
    async fn test_zero_sweep_interval_is_clamped() {
        let settings = CacheSettings {
            default_ttl_secs: 300,
            sweep_interval_secs: 0,
            max_entries: None,
        };
        let cache: SearchCache<Vec<String>> = SearchCache::create(&settings);

        cache.set_with_ttl("chu", payload(&["chu"]), Duration::from_millis(1));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.is_sweeping());
        assert_eq!(cache.stats().size, 0);
        assert!(!cache.start_sweeper());

        cache.destroy();
    }

    #[tokio::test]
    async fn test_create_from_settings() {
        let settings = CacheSettings {
            default_ttl_secs: 1,
            sweep_interval_secs: 1,
            max_entries: Some(8),
        };
        let cache: SearchCache<Vec<String>> = SearchCache::create(&settings);

        assert!(cache.is_sweeping());
        cache.set("chu", payload(&["chu"]));
        assert_eq!(cache.get("chu"), Some(payload(&["chu"])));

        cache.destroy();
    }
}
