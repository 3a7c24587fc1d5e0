//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response body with its creation timestamp.
///
/// Both fields are set exactly once at insertion and never mutated.
/// Callers receive a copy of the payload, never a mutable alias into it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response bytes.
    payload: Vec<u8>,
    /// When the entry was inserted.
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Payload ==
    /// Returns a read-only view of the stored bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    // == Age ==
    /// Returns how long the entry has been in the cache.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry's age has reached the given TTL.
    ///
    /// Boundary condition: an entry is expired once `age >= ttl`. Expiry is
    /// only ever acted on by the reaper's sweep; lookups never consult it.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
