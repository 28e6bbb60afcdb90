use std::time::Duration;

use futures::StreamExt;
use tokio_util::time::DelayQueue;
use tokio_util::time::delay_queue::Key;

/// Single-slot delay queue for search queries.
///
/// At most one query waits at a time: scheduling a new one cancels the
/// previous one, so a superseded query is never yielded. Needs a tokio
/// runtime with the time driver enabled.
pub struct SearchDebouncer {
    queue: DelayQueue<String>,
    pending: Option<Key>,
    delay: Duration,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        SearchDebouncer {
            queue: DelayQueue::new(),
            pending: None,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `query` to fire after the delay, replacing any pending query.
    pub fn schedule(&mut self, query: String) {
        if let Some(superseded) = self.cancel() {
            tracing::trace!(query = %superseded, "search superseded");
        }
        self.pending = Some(self.queue.insert(query, self.delay));
    }

    /// Drop the pending query, returning it if there was one.
    pub fn cancel(&mut self) -> Option<String> {
        let key = self.pending.take()?;
        Some(self.queue.remove(&key).into_inner())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the pending query's delay to elapse and take it.
    ///
    /// Returns `None` at once when nothing is pending. Dropping the future
    /// before it completes leaves the pending query in place.
    pub async fn next_expired(&mut self) -> Option<String> {
        self.pending.as_ref()?;
        let expired = self.queue.next().await?;
        self.pending = None;
        Some(expired.into_inner())
    }
}
