// src/crawl/tracker.rs
// =============================================================================
// Outstanding-work tracking for a crawl.
//
// Every task that is scheduled holds a WorkPermit. The Tracker counts live
// permits; when the count drops to zero the whole recursive tree is done.
//
// Rules that keep the count honest:
// - A parent reserves a permit for a child BEFORE spawning it, so the count
//   can never read zero while a child is about to start.
// - A permit decrements exactly once, when it is dropped. Dropping happens on
//   every exit path of a task (success, HTTP error, read error, even panic).
//
// Rust concepts:
// - AtomicUsize: a counter many tasks can update without a lock
// - tokio::sync::Notify: lets the watcher sleep until the count hits zero
// - Drop: runs cleanup automatically when a value goes out of scope
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    idle: Notify,
}

/// Shared counter of crawl tasks that have been scheduled but not finished
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    inner: Arc<Inner>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more task and hands back the permit that will uncount it
    pub fn reserve(&self) -> WorkPermit {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        WorkPermit {
            inner: self.inner.clone(),
        }
    }

    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    /// Waits until no permits are alive
    ///
    /// Returns immediately if nothing was ever reserved, so reserve the root
    /// task first.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            // Register before checking, so a release between the check and
            // the await still wakes us.
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Proof that one task is counted as outstanding
#[derive(Debug)]
pub struct WorkPermit {
    inner: Arc<Inner>,
}

impl Drop for WorkPermit {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}
