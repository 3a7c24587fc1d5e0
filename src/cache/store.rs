//! Cache Store Module
//!
//! The response cache: a key/value store of raw HTTP response bodies with a
//! fixed time-to-live. [`CacheStore`] is the plain map guarded by the lock;
//! [`Cache`] is the shared handle that owns the lock and the reaper task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache Store ==
/// Key/value storage of response bodies with a fixed TTL.
///
/// All mutation happens behind the write half of the enclosing lock; lookups
/// only need the read half. Expiry is never checked on lookup — removal of
/// stale entries is exclusively the reaper's job, so an entry may survive up
/// to one sweep period past its TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Response bodies keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live for every entry, fixed at construction
    ttl: Duration,
    /// Performance counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores a payload under `key`, stamped with the current time.
    ///
    /// If the key already exists the entry is replaced wholesale and its age
    /// resets (last-write-wins). Empty keys and empty payloads are legal.
    /// This operation is total: it never fails.
    pub fn put(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Looks up a payload by key, returning a copy of the stored bytes.
    ///
    /// Returns `None` if the key was never inserted or has been reaped.
    /// A hit does not refresh the entry's timestamp, and an entry older than
    /// the TTL is still returned if the reaper has not swept it yet.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload().to_vec())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Full scan rather than a deadline queue: entry counts are bounded by
    /// the distinct URLs requested in a session, so simplicity wins.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();
        self.stats.record_reaped(removed as u64);
        removed
    }

    // == TTL ==
    /// Returns the store's time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Cache Handle ==
/// Shared handle to the response cache.
///
/// Wraps the store in `Arc<RwLock<_>>`: lookups take the read lock so they
/// never block each other, while `put` and the reaper's sweep take the
/// write lock. Constructing the handle starts the reaper; dropping it (or
/// calling [`Cache::shutdown`]) cancels the reaper so the background task
/// cannot outlive its owner.
#[derive(Debug)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    reaper: ReaperHandle,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl` and starts the
    /// background reaper, sweeping once per TTL period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper(store.clone(), ttl);
        Self { store, reaper }
    }

    // == Put ==
    /// Stores a payload under `key`, replacing any existing entry.
    pub async fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = payload.len(), "caching response");
        self.store.write().await.put(key, payload);
    }

    // == Get ==
    /// Looks up a payload by key. `None` on a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    pub async fn shutdown(self) {
        self.reaper.shutdown().await;
    }

    /// True once the reaper task has stopped.
    pub fn reaper_finished(&self) -> bool {
        self.reaper.is_finished()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn test_store() -> CacheStore {
        CacheStore::new(Duration::from_secs(300))
    }

    #[test]
    fn test_get_before_any_put_misses() {
        let store = test_store();
        assert_eq!(store.get("never-inserted"), None);
    }

    #[test]
    fn test_hit_after_put() {
        let mut store = test_store();
        store.put("key1".to_string(), b"value1".to_vec());
        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_replaces_entry() {
        let mut store = test_store();
        store.put("key1".to_string(), b"old".to_vec());
        store.put("key1".to_string(), b"new".to_vec());
        assert_eq!(store.get("key1"), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_key_and_payload_are_legal() {
        let mut store = test_store();
        store.put(String::new(), Vec::new());
        assert_eq!(store.get(""), Some(Vec::new()));
    }

    #[test]
    fn test_get_does_not_expire_stale_entry() {
        let mut store = CacheStore::new(Duration::from_millis(10));
        store.put("stale".to_string(), b"x".to_vec());
        sleep(Duration::from_millis(30));
        // Older than the TTL, but only the sweep may remove it.
        assert_eq!(store.get("stale"), Some(b"x".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let mut store = CacheStore::new(Duration::from_millis(50));
        store.put("old".to_string(), b"1".to_vec());
        sleep(Duration::from_millis(60));
        store.put("fresh".to_string(), b"2".to_vec());

        let removed = store.sweep_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("fresh"), Some(b"2".to_vec()));
    }

    #[test]
    fn test_sweep_with_nothing_expired_is_noop() {
        let mut store = test_store();
        store.put("key1".to_string(), b"v".to_vec());
        assert_eq!(store.sweep_expired(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(50));
        store.put("k".to_string(), b"v1".to_vec());
        sleep(Duration::from_millis(60));
        store.put("k".to_string(), b"v2".to_vec());
        // The rewrite restarted the clock, so the sweep must keep it.
        assert_eq!(store.sweep_expired(), 0);
        assert_eq!(store.get("k"), Some(b"v2".to_vec()));
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut store = test_store();
        store.put("key1".to_string(), b"v".to_vec());
        store.get("key1");
        store.get("nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_cache_handle_put_and_get() {
        let cache = Cache::new(Duration::from_secs(300));
        cache.put("url", b"body".to_vec()).await;
        assert_eq!(cache.get("url").await, Some(b"body".to_vec()));
        assert_eq!(cache.len().await, 1);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_cache_handle_shutdown_stops_reaper() {
        let cache = Cache::new(Duration::from_secs(300));
        cache.shutdown().await;
    }
}
