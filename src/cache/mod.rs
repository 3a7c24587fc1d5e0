//! Cache Module
//!
//! In-memory memoization of raw HTTP response bodies keyed by request URL,
//! with a fixed time-to-live enforced by a background reaper task. Purely a
//! single-process optimization layer: the cache never performs network I/O
//! itself and nothing survives a restart.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::{Cache, CacheStore};
