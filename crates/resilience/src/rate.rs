//! Debounce and throttle wrappers.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

/// Trailing-edge debouncer.
///
/// Each call cancels the pending one and reschedules `wait` later, so only
/// the last call inside any `wait`-length window actually runs. Dropping
/// the debouncer cancels whatever is still pending.
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given window.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `action`, cancelling any previously scheduled call.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            sleep(wait).await;
            action();
        }));
    }

    /// Cancel the pending call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Leading-edge throttle.
///
/// The first call runs immediately; calls inside the following `limit`
/// window are dropped, and the window restarts with the next call that
/// gets through.
pub struct Throttle {
    limit: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given window.
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_run: None,
        }
    }

    /// Run `action` unless a previous call ran inside the window.
    /// Returns whether the action ran.
    pub fn call<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(),
    {
        let now = Instant::now();
        if let Some(previous) = self.last_run {
            if now.duration_since(previous) < self.limit {
                return false;
            }
        }
        self.last_run = Some(now);
        action();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_debounce_runs_only_the_last_call() {
        let wait = Duration::from_millis(100);
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(wait);

        for _ in 0..3 {
            let runs = runs.clone();
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::advance(Duration::from_millis(50)).await;
        }

        // Let the last scheduled call fire.
        sleep(wait * 2).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel_drops_the_pending_call() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        let counter = runs.clone();
        debouncer.call(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        sleep(Duration::from_millis(300)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_is_leading_edge() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut throttle = Throttle::new(Duration::from_millis(100));

        let bump = |runs: &Arc<AtomicUsize>| {
            let runs = runs.clone();
            move || {
                runs.fetch_add(1, Ordering::SeqCst);
            }
        };

        // First call goes through, the window swallows the next two.
        assert!(throttle.call(bump(&runs)));
        assert!(!throttle.call(bump(&runs)));
        tokio::time::advance(Duration::from_millis(50)).await;
        assert!(!throttle.call(bump(&runs)));

        // Window expired: the next call runs and restarts it.
        tokio::time::advance(Duration::from_millis(60)).await;
        assert!(throttle.call(bump(&runs)));
        assert!(!throttle.call(bump(&runs)));

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
