//! Search-as-you-type debouncing.
//!
//! Each keystroke calls [`SearchDebouncer::push`]. The previous pending query
//! is cancelled and the new one fires after the configured delay unless
//! another push arrives first. Fired queries are delivered on the receiver
//! returned by [`SearchDebouncer::new`]; the UI loop applies them with
//! `CatalogStore::set_search`.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Delay between the last keystroke and the search firing.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces bursts of search input so only the latest query fires.
///
/// Must be used from within a tokio runtime.
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<CancellationToken>,
    tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            pending: None,
            tx,
        };
        (debouncer, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `query`, cancelling any not-yet-fired query.
    pub fn push(&mut self, query: impl Into<String>) {
        self.cancel();

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let query = query.into();
        let delay = self.delay;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the page is shutting down.
                    let _ = tx.send(query);
                }
            }
        });
    }

    /// Drop the pending query, if any, without firing it.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            if !token.is_cancelled() {
                tracing::debug!("Cancelling pending search");
            }
            token.cancel();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
