//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! The sweep period equals the cache TTL, so an entry created just after a
//! sweep is not examined again until the next tick one full period later —
//! worst-case residency is twice the TTL. That coarse reaping is deliberate:
//! entry counts stay small and the request path never pays for expiry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Reaper Handle ==
/// Handle to a running reaper task.
///
/// The reaper has two states, running and stopped, and the transition is
/// one-way: once cancelled it never restarts. Dropping the handle cancels
/// the task so it cannot outlive the cache that spawned it.
#[derive(Debug)]
pub struct ReaperHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    // == Stop ==
    /// Signals the reaper to stop without waiting for it to finish.
    pub fn stop(&self) {
        self.token.cancel();
    }

    // == Shutdown ==
    /// Signals the reaper to stop and waits for the task to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        // The task only ever exits via the cancellation branch, so a join
        // error here means it was aborted elsewhere; nothing left to do.
        let _ = (&mut self.task).await;
    }

    // == Is Finished ==
    /// True once the reaper task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

// == Spawn Reaper ==
/// Spawns the background sweep loop for a shared cache store.
///
/// Every `period` the task acquires the write lock and removes all entries
/// whose age has reached the TTL. A sweep that removes nothing is a no-op,
/// not a failure. The returned handle cancels the loop on drop.
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, period: Duration) -> ReaperHandle {
    let token = CancellationToken::new();
    let task_token = token.clone();

    let task = tokio::spawn(async move {
        info!(period_ms = period.as_millis() as u64, "cache reaper started");

        loop {
            tokio::select! {
                _ = tokio::time::sleep(period) => {
                    let removed = {
                        let mut store = store.write().await;
                        store.sweep_expired()
                    };
                    if removed > 0 {
                        info!(removed, "cache reaper removed expired entries");
                    } else {
                        debug!("cache reaper found no expired entries");
                    }
                }
                _ = task_token.cancelled() => {
                    debug!("cache reaper stopped");
                    break;
                }
            }
        }
    });

    ReaperHandle { token, task }
}
