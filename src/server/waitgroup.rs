use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

/// Counted barrier tracking in-flight connections.
///
/// Starts at zero; [`guard`](WaitGroup::guard) increments, dropping the
/// guard decrements, and [`wait`](WaitGroup::wait) resolves once the count
/// is back to zero. Guards decrement on every exit path, including a panic
/// unwinding through a connection task.
#[derive(Clone, Default)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    active: AtomicUsize,
    drained: Notify,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one unit of in-flight work.
    pub fn guard(&self) -> WaitGuard {
        self.inner.active.fetch_add(1, Ordering::AcqRel);
        WaitGuard {
            inner: self.inner.clone(),
        }
    }

    /// Resolves once every outstanding guard has been dropped.
    pub async fn wait(&self) {
        loop {
            // Register interest before checking, so a decrement landing
            // between the check and the await is not missed.
            let drained = self.inner.drained.notified();
            if self.inner.active.load(Ordering::Acquire) == 0 {
                return;
            }
            drained.await;
        }
    }
}

pub struct WaitGuard {
    inner: Arc<Inner>,
}

impl Drop for WaitGuard {
    fn drop(&mut self) {
        if self.inner.active.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.drained.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn wait_returns_immediately_when_idle() {
        WaitGroup::new().wait().await;
    }

    #[tokio::test]
    async fn wait_blocks_until_last_guard_drops() {
        let wg = WaitGroup::new();
        let first = wg.guard();
        let second = wg.guard();

        let waiter = tokio::spawn({
            let wg = wg.clone();
            async move { wg.wait().await }
        });

        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        drop(first);
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        drop(second);
        waiter.await.unwrap();
    }
}
