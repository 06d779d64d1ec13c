//! Auto-fold coordination over the host editor.
//!
//! The engine receives document lifecycle callbacks from the host and turns
//! "a document was opened for the first time" into fold commands, keeping
//! the region under the user's caret open.
//!
//! # Architecture
//!
//! ```text
//! document_activated
//!       │
//!       ├─► tracker gate (once per open/close cycle)
//!       ├─► language gate (settings)
//!       │
//!       └─► schedule one-shot race
//!               │
//!               ├─► fold-delay timer (450ms default) ──┐  first settlement
//!               └─► selection event ───────────────────┤  wins; the entry
//!                                                      ▼  removal is the latch
//!                                   stale check → folding ranges → fold commands
//! ```
//!
//! The delay exists because Search and Go To navigation place the caret
//! shortly after the document becomes active; folding the caret's region
//! away in that window would hide exactly the code the user asked for.
//!
//! Nothing here retries: a failure mid-fold is logged and terminal for that
//! open event, and every failure path degrades to "do not fold".

mod pending;

pub use pending::DEFAULT_FOLD_DELAY;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use arc_swap::ArcSwap;
use tokio::sync::oneshot;

use crate::config::FoldSettings;
use crate::document::{DocumentDescriptor, DocumentKey};
use crate::error::FoldResult;
use crate::fold::{containing_region, lines_to_fold, region_candidates, should_fold_language};
use crate::host::EditorHost;
use crate::tracker::OpenDocumentTracker;
use pending::PendingFolds;

const LOG_TARGET: &str = "oritatami::engine";

/// Coordinates the fold policy against host lifecycle events.
///
/// All methods take `&self` and are safe to call from concurrent host
/// callbacks: settings live behind `ArcSwap`, the tracker behind a `Mutex`,
/// and in-flight fold races in a concurrent map. Must run inside a tokio
/// runtime (fold decisions are spawned tasks).
pub struct AutoFoldEngine<H: EditorHost + 'static> {
    host: Arc<H>,
    settings: ArcSwap<FoldSettings>,
    tracker: Mutex<OpenDocumentTracker>,
    pending: Arc<PendingFolds>,
    fold_delay: Duration,
}

impl<H: EditorHost + 'static> AutoFoldEngine<H> {
    /// Create an engine with the default fold delay.
    pub fn new(host: Arc<H>, settings: FoldSettings) -> Self {
        Self::with_fold_delay(host, settings, DEFAULT_FOLD_DELAY)
    }

    /// Create an engine with a custom fold delay.
    pub fn with_fold_delay(host: Arc<H>, settings: FoldSettings, fold_delay: Duration) -> Self {
        Self {
            host,
            settings: ArcSwap::new(Arc::new(settings)),
            tracker: Mutex::new(OpenDocumentTracker::new()),
            pending: Arc::new(PendingFolds::new()),
            fold_delay,
        }
    }

    fn lock_tracker(&self) -> MutexGuard<'_, OpenDocumentTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed the tracker with documents the host already had open before the
    /// engine started, so their first activation does not refold them.
    pub fn seed_open_documents<I>(&self, keys: I)
    where
        I: IntoIterator<Item = DocumentKey>,
    {
        self.lock_tracker().seed_open(keys);
    }

    /// Replace the settings (host configuration change). Takes effect for
    /// subsequent activations; in-flight decisions keep the settings they
    /// were gated with.
    pub fn apply_settings(&self, settings: FoldSettings) {
        self.settings.store(Arc::new(settings));
        log::debug!(target: LOG_TARGET, "Settings updated");
    }

    /// The currently applied settings.
    pub fn settings(&self) -> Arc<FoldSettings> {
        self.settings.load_full()
    }

    /// Whether a document is currently tracked as open.
    pub fn is_open(&self, key: &DocumentKey) -> bool {
        self.lock_tracker().is_open(key)
    }

    /// A document became active.
    ///
    /// Runs the once-per-open gate synchronously; on the first activation
    /// of an eligible document, schedules the fold decision.
    pub fn document_activated(&self, doc: DocumentDescriptor) {
        let newly_opened = self.lock_tracker().mark_opened(&doc.key);
        if !newly_opened {
            log::trace!(target: LOG_TARGET, "Already open, skipping: {}", doc.key);
            return;
        }

        let language = doc.language_id.as_deref().unwrap_or("unknown");
        log::info!(target: LOG_TARGET, "--- {} ({}) ---", doc.key.label(), language);
        log::info!(target: LOG_TARGET, "File opened: {}", doc.key);
        if let Some(line_count) = doc.line_count {
            log::info!(target: LOG_TARGET, "Lines of code: {}", line_count);
        }

        let settings = self.settings.load();
        if !should_fold_language(&settings, doc.language_id.as_deref()) {
            log::info!(
                target: LOG_TARGET,
                "Skipping auto-fold: language '{}' disabled by settings (enableForAllFiles={})",
                language,
                settings.enable_for_all_files
            );
            return;
        }

        self.schedule_fold(doc.key);
    }

    /// Spawn the one-shot race that resolves the target line for a fold.
    fn schedule_fold(&self, key: DocumentKey) {
        let (line_tx, line_rx) = oneshot::channel();
        let data = FoldTaskData {
            host: Arc::clone(&self.host),
            pending: Arc::clone(&self.pending),
            key: key.clone(),
        };
        let delay = self.fold_delay;

        let task = tokio::spawn(async move {
            let selection_line = tokio::select! {
                line = line_rx => line.ok(),
                _ = tokio::time::sleep(delay) => None,
            };

            // Settle before touching the host: anything firing after this
            // point must find no pending entry.
            data.pending.settle(&data.key);
            run_fold(data, selection_line).await;
        });

        self.pending.register(key, line_tx, task.abort_handle());
    }

    /// The caret moved in a document.
    ///
    /// Feeds a pending fold race for that document; a no-op for documents
    /// without one, for races that already settled, and for stale events.
    pub fn selection_changed(&self, key: &DocumentKey, line: u32, character: u32) {
        if self.pending.supply_line(key, i64::from(line)) {
            log::info!(
                target: LOG_TARGET,
                "Selection changed: line {}, character {}",
                line + 1,
                character + 1
            );
        }
    }

    /// A document was closed. It may auto-fold again on its next open.
    pub fn document_closed(&self, key: &DocumentKey) {
        self.pending.cancel(key);
        self.lock_tracker().mark_closed(key);
        log::info!(target: LOG_TARGET, "File closed: {}", key);
    }

    /// Cancel everything in flight. Called on host shutdown.
    pub fn shutdown(&self) {
        self.pending.cancel_all();
    }

    /// Whether a fold race is pending for a document. Useful for testing.
    #[cfg(test)]
    pub(crate) fn has_pending_fold(&self, key: &DocumentKey) -> bool {
        self.pending.is_pending(key)
    }
}

/// Everything the race task needs once the target line resolves.
struct FoldTaskData<H: EditorHost + 'static> {
    host: Arc<H>,
    pending: Arc<PendingFolds>,
    key: DocumentKey,
}

/// Execute the fold decision after the one-shot race resolves.
async fn run_fold<H: EditorHost + 'static>(data: FoldTaskData<H>, selection_line: Option<i64>) {
    let FoldTaskData { host, key, .. } = data;

    // Stale-event guard: the user may have moved elsewhere while the race ran.
    let Some(view) = host.active_view() else {
        log::debug!(target: LOG_TARGET, "No active view, skipping fold for {}", key);
        return;
    };
    if view.key != key {
        log::debug!(
            target: LOG_TARGET,
            "Active view moved to {}, skipping fold for {}",
            view.key,
            key
        );
        return;
    }

    // The selection-event line when that side of the race won; otherwise
    // the caret wherever the host says it is now.
    let line = selection_line.unwrap_or_else(|| i64::from(view.caret_line));
    log::info!(
        target: LOG_TARGET,
        "Cursor position read: line {}, character {}",
        line + 1,
        view.caret_character + 1
    );

    let ranges = match host.folding_ranges(&key).await {
        Ok(ranges) => ranges,
        Err(err) => {
            log::warn!(
                target: LOG_TARGET,
                "Folding ranges unavailable for {}: {}",
                key,
                err
            );
            return;
        }
    };

    let regions = region_candidates(&ranges);
    log::info!(target: LOG_TARGET, "Number of regions read: {}", regions.len());
    if regions.is_empty() {
        log::info!(target: LOG_TARGET, "No marker regions found. No folding performed.");
        return;
    }

    let outcome = if line <= 0 {
        log::info!(target: LOG_TARGET, "Action: close all regions (no valid caret line)");
        log::info!(
            target: LOG_TARGET,
            "Intended to close {} regions; kept open 0",
            regions.len()
        );
        host.fold_all_marker_regions(&key).await
    } else if let Some(kept) = containing_region(&ranges, line) {
        let lines = lines_to_fold(&ranges, Some(line));
        log::info!(target: LOG_TARGET, "Action: close other regions; keep caret region open");
        log::info!(
            target: LOG_TARGET,
            "Keeping 1 region open because caret is inside it (start={}, end={})",
            kept.start + 1,
            kept.end + 1
        );
        log::info!(
            target: LOG_TARGET,
            "Intended to close {} regions; kept open 1",
            lines.len()
        );
        fold_selected_lines(host.as_ref(), &key, &lines).await
    } else {
        log::info!(target: LOG_TARGET, "Action: close all regions (caret not inside any region)");
        log::info!(
            target: LOG_TARGET,
            "Intended to close {} regions; kept open 0",
            regions.len()
        );
        host.fold_all_marker_regions(&key).await
    };

    if let Err(err) = outcome {
        log::warn!(target: LOG_TARGET, "Error while folding {}: {}", key, err);
    }
}

/// Collapse individual region start lines, unfolding each first so a
/// part-folded region ends up fully collapsed.
async fn fold_selected_lines<H: EditorHost>(
    host: &H,
    key: &DocumentKey,
    lines: &[u32],
) -> FoldResult<()> {
    for &line in lines {
        host.unfold_lines(key, &[line]).await?;
        host.fold_lines(key, &[line]).await?;
    }
    Ok(())
}
