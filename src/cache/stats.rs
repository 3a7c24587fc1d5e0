//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and reaped
//! entries. Counters are atomic so lookups can record hits and misses
//! while holding only the shared (read) lock on the store.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Atomic counters for cache activity.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of successful lookups
    hits: AtomicU64,
    /// Number of failed lookups (key absent or already reaped)
    misses: AtomicU64,
    /// Number of entries removed by the reaper
    reaped: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Reaped ==
    /// Adds a sweep's removal count to the reaped counter.
    pub fn record_reaped(&self, count: u64) {
        self.reaped.fetch_add(count, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.reaped.load(Ordering::Relaxed),
            total_entries,
        )
    }
}

// == Stats Snapshot ==
/// A plain copy of the cache counters, suitable for display.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by the reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsSnapshot {
    /// Creates a snapshot, deriving the hit rate from the counters.
    pub fn new(hits: u64, misses: u64, reaped: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            reaped,
            total_entries,
            hit_rate,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        let snap = stats.snapshot(0);
        assert_eq!(snap.hits, 0);
        assert_eq!(snap.misses, 0);
        assert_eq!(snap.reaped, 0);
        assert_eq!(snap.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.snapshot(0).hit_rate, 0.0);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        assert_eq!(stats.snapshot(3).hit_rate, 1.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.snapshot(1).hit_rate, 0.5);
    }

    #[test]
    fn test_record_reaped_accumulates() {
        let stats = CacheStats::new();
        stats.record_reaped(2);
        stats.record_reaped(3);
        assert_eq!(stats.snapshot(0).reaped, 5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = StatsSnapshot::new(80, 20, 5, 7);
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"hits\":80"));
        assert!((snap.hit_rate - 0.8).abs() < 0.001);
    }
}
