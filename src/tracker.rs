//! Open-document tracking.
//!
//! The fold policy must fire exactly once per open/close cycle of a
//! document. [`OpenDocumentTracker`] is the dedup gate: a set of currently
//! open document keys, seeded at startup with whatever the host already has
//! open, plus an ignore-prefix list for synthetic document identities that
//! must never trigger folding.

use std::collections::HashSet;

use crate::document::DocumentKey;

/// Key prefixes of synthetic documents that never auto-fold: scratch
/// buffers, log panes, diff views and other editor-internal schemes.
pub const DEFAULT_IGNORED_PREFIXES: &[&str] =
    &["untitled:", "output:", "git:", "debug:", "vscode:"];

/// Tracks which documents are currently open so the fold policy only runs
/// on the first activation after each open.
///
/// Each key is in one of two states, `absent` or `open`. `mark_opened`
/// reports the `absent -> open` transition; everything else is a no-op
/// signal. Keys matching an ignored prefix are never tracked at all.
#[derive(Debug)]
pub struct OpenDocumentTracker {
    open: HashSet<DocumentKey>,
    ignored_prefixes: Vec<String>,
}

impl Default for OpenDocumentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenDocumentTracker {
    /// Create an empty tracker with the default ignore-prefix list.
    pub fn new() -> Self {
        Self::with_ignored_prefixes(
            DEFAULT_IGNORED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        )
    }

    /// Create an empty tracker with a custom ignore-prefix list.
    pub fn with_ignored_prefixes(ignored_prefixes: Vec<String>) -> Self {
        Self {
            open: HashSet::new(),
            ignored_prefixes,
        }
    }

    /// Create a tracker pre-seeded with documents that are already open,
    /// using the default ignore-prefix list.
    pub fn with_open_documents<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = DocumentKey>,
    {
        let mut tracker = Self::new();
        tracker.seed_open(seed);
        tracker
    }

    /// Mark documents as already open without reporting them as newly
    /// opened later. Ignored keys are dropped during seeding.
    pub fn seed_open<I>(&mut self, seed: I)
    where
        I: IntoIterator<Item = DocumentKey>,
    {
        for key in seed {
            if !self.is_ignored(&key) {
                self.open.insert(key);
            }
        }
    }

    fn is_ignored(&self, key: &DocumentKey) -> bool {
        self.ignored_prefixes.iter().any(|p| key.has_prefix(p))
    }

    /// Record that a document became active.
    ///
    /// Returns `true` exactly when this is the first activation since the
    /// document was (re)opened; consumers use `false` as the signal to skip
    /// re-triggering the fold policy. Ignored keys always return `false`
    /// and are never tracked.
    pub fn mark_opened(&mut self, key: &DocumentKey) -> bool {
        if self.is_ignored(key) {
            return false;
        }

        self.open.insert(key.clone())
    }

    /// Record that a document closed. Idempotent; closing an untracked key
    /// is a no-op.
    pub fn mark_closed(&mut self, key: &DocumentKey) {
        self.open.remove(key);
    }

    /// Whether a document is currently tracked as open.
    pub fn is_open(&self, key: &DocumentKey) -> bool {
        self.open.contains(key)
    }

    /// Number of documents currently tracked as open.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> DocumentKey {
        DocumentKey::from_raw(raw)
    }

    #[test]
    fn first_open_reports_newly_opened_exactly_once() {
        let mut tracker = OpenDocumentTracker::new();
        let doc = key("file:///a.rs");

        assert!(tracker.mark_opened(&doc));
        assert!(!tracker.mark_opened(&doc));
        assert!(!tracker.mark_opened(&doc));
        assert!(tracker.is_open(&doc));
    }

    #[test]
    fn close_then_open_reports_newly_opened_again() {
        let mut tracker = OpenDocumentTracker::new();
        let doc = key("file:///a.rs");

        assert!(tracker.mark_opened(&doc));
        tracker.mark_closed(&doc);
        assert!(!tracker.is_open(&doc));
        assert!(tracker.mark_opened(&doc));
    }

    #[test]
    fn closing_an_untracked_key_is_a_noop() {
        let mut tracker = OpenDocumentTracker::new();
        let doc = key("file:///a.rs");

        tracker.mark_closed(&doc);
        assert!(!tracker.is_open(&doc));
        assert!(tracker.mark_opened(&doc));
    }

    #[test]
    fn keys_are_independent() {
        let mut tracker = OpenDocumentTracker::new();
        let a = key("file:///a.rs");
        let b = key("file:///b.rs");

        assert!(tracker.mark_opened(&a));
        assert!(tracker.mark_opened(&b));
        tracker.mark_closed(&a);

        assert!(!tracker.is_open(&a));
        assert!(tracker.is_open(&b));
        assert!(!tracker.mark_opened(&b));
    }

    #[test]
    fn ignored_prefixes_are_never_tracked() {
        let mut tracker = OpenDocumentTracker::new();
        let scratch = key("untitled:Untitled-1");
        let log_pane = key("output:extension-output-2");

        assert!(!tracker.mark_opened(&scratch));
        assert!(!tracker.mark_opened(&scratch));
        assert!(!tracker.is_open(&scratch));
        assert!(!tracker.mark_opened(&log_pane));
        assert_eq!(tracker.open_count(), 0);
    }

    #[test]
    fn seeded_documents_are_not_newly_opened() {
        let already_open = vec![key("file:///a.rs"), key("file:///b.rs")];
        let mut tracker = OpenDocumentTracker::with_open_documents(already_open);

        assert_eq!(tracker.open_count(), 2);
        assert!(!tracker.mark_opened(&key("file:///a.rs")));
        assert!(tracker.mark_opened(&key("file:///c.rs")));
    }

    #[test]
    fn ignored_keys_are_dropped_from_the_seed() {
        let seed = vec![key("file:///a.rs"), key("untitled:Untitled-1")];
        let mut tracker = OpenDocumentTracker::with_open_documents(seed);

        assert_eq!(tracker.open_count(), 1);
        assert!(!tracker.is_open(&key("untitled:Untitled-1")));
        assert!(!tracker.mark_opened(&key("untitled:Untitled-1")));
    }

    #[test]
    fn custom_ignore_list_replaces_the_default() {
        let mut tracker =
            OpenDocumentTracker::with_ignored_prefixes(vec!["zip:".to_string()]);

        assert!(!tracker.mark_opened(&key("zip:archive/entry.rs")));
        // Default-list prefixes are trackable once the list is replaced.
        assert!(tracker.mark_opened(&key("untitled:Untitled-1")));
    }
}
