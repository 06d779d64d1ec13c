//! One-shot fold scheduling per document.
//!
//! Each newly opened document gets at most one pending fold: a spawned race
//! between a fixed-delay timer and the first selection event, which supplies
//! the target line. This registry tracks the in-flight races so selection
//! events can be routed to them and document close / shutdown can cancel
//! them.
//!
//! Settlement discipline: the race task removes its own entry before it
//! touches the host (the "finished" latch). A selection event that arrives
//! after settlement finds either no entry or an already-taken sender, and
//! is a silent no-op either way.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use crate::document::DocumentKey;

/// Default delay before folding without a selection event (450ms).
///
/// Long enough for Search / Go To Definition to place the caret first,
/// short enough that folding still reads as part of opening the file.
pub const DEFAULT_FOLD_DELAY: Duration = Duration::from_millis(450);

/// Logging target for fold scheduling.
const LOG_TARGET: &str = "oritatami::pending";

/// A scheduled fold waiting for its target line.
struct PendingFold {
    /// Feeds the selection side of the race. Taken on first use; a taken
    /// sender means a selection already settled the race.
    line_tx: Mutex<Option<oneshot::Sender<i64>>>,
    /// Cancels the race task on close or shutdown.
    abort: AbortHandle,
}

/// Registry of in-flight fold races keyed by document.
///
/// Uses `DashMap` for lock-free concurrent access from host callbacks and
/// the spawned race tasks.
#[derive(Default)]
pub(crate) struct PendingFolds {
    entries: DashMap<DocumentKey, PendingFold>,
}

impl PendingFolds {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a race for a document, replacing (and aborting) any
    /// previous one for the same key.
    pub(crate) fn register(
        &self,
        key: DocumentKey,
        line_tx: oneshot::Sender<i64>,
        abort: AbortHandle,
    ) {
        // Opportunistic cleanup: drop entries whose task already finished
        // so the map does not accumulate settled races.
        const CLEANUP_THRESHOLD: usize = 32;
        if self.entries.len() > CLEANUP_THRESHOLD {
            self.entries.retain(|_, pending| !pending.abort.is_finished());
        }

        if let Some((_, previous)) = self.entries.remove(&key) {
            previous.abort.abort();
            log::trace!(
                target: LOG_TARGET,
                "Replaced pending fold for {}",
                key
            );
        }

        self.entries.insert(
            key,
            PendingFold {
                line_tx: Mutex::new(Some(line_tx)),
                abort,
            },
        );
    }

    /// Feed a selection line into the pending race for `key`.
    ///
    /// Returns `false` when no race is pending for the key or the race has
    /// already settled; a late selection event is a silent no-op.
    pub(crate) fn supply_line(&self, key: &DocumentKey, line: i64) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return false;
        };

        let sender = entry
            .line_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            // Send fails only when the timer side already won and dropped
            // the receiver; that still counts as settled.
            Some(tx) => tx.send(line).is_ok(),
            None => false,
        }
    }

    /// Settle latch: drop the entry once the race has resolved, without
    /// aborting the task (the task calls this about itself).
    pub(crate) fn settle(&self, key: &DocumentKey) {
        self.entries.remove(key);
    }

    /// Cancel the pending fold for a document.
    ///
    /// Called when the document closes - its fold decision is moot.
    pub(crate) fn cancel(&self, key: &DocumentKey) {
        if let Some((_, pending)) = self.entries.remove(key) {
            pending.abort.abort();
            log::trace!(
                target: LOG_TARGET,
                "Cancelled pending fold for closed document {}",
                key
            );
        }
    }

    /// Cancel every pending fold. Called on host shutdown.
    pub(crate) fn cancel_all(&self) {
        for entry in self.entries.iter() {
            entry.value().abort.abort();
        }
        self.entries.clear();
        log::debug!(target: LOG_TARGET, "Cancelled all pending folds");
    }

    /// Whether a race is pending for a document. Useful for testing.
    #[cfg(test)]
    pub(crate) fn is_pending(&self, key: &DocumentKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of pending races. Useful for testing.
    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.entries.len()
    }
}
