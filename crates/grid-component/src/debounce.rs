//! Search input debouncing.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Collapses bursts of events into the last one. Each caller takes a
/// ticket, waits out the delay, and only the newest ticket survives.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    epoch: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Wait out the delay; returns true when no newer event arrived in the
    /// meantime.
    pub async fn settle(&self) -> bool {
        let ticket = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        ticket == self.epoch.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn only_the_newest_event_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let first = debouncer.settle();
        let second = debouncer.settle();
        let (first, second) = tokio::join!(first, second);
        assert!(!first);
        assert!(second);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_events_both_settle() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert!(debouncer.settle().await);
        assert!(debouncer.settle().await);
    }
}
