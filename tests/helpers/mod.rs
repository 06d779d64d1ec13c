//! Shared test helpers for engine behavior tests.
//!
//! Note: We use `helpers/mod.rs` instead of the modern `helpers.rs` + `helpers/` pattern
//! because Cargo auto-discovers top-level `.rs` files in `tests/` as integration tests.
//! A `tests/helpers.rs` file would be compiled as a standalone test, which we don't want.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use oritatami::{
    ActiveView, DocumentDescriptor, DocumentKey, EditorHost, FoldError, FoldResult, FoldingRange,
};

/// A fold command as issued to the host, with the document it targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Fold(DocumentKey, Vec<u32>),
    Unfold(DocumentKey, Vec<u32>),
    FoldAllMarkerRegions(DocumentKey),
}

/// Host double that records fold commands instead of executing them.
///
/// Per-document folding ranges are looked up from the configured list;
/// `fail_ranges` simulates a folding-range provider outage.
pub struct RecordingHost {
    ranges: Mutex<Vec<(DocumentKey, Vec<FoldingRange>)>>,
    active: Mutex<Option<ActiveView>>,
    fail_ranges: bool,
    commands: Mutex<Vec<HostCommand>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            ranges: Mutex::new(Vec::new()),
            active: Mutex::new(None),
            fail_ranges: false,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_ranges: true,
            ..Self::new()
        }
    }

    pub fn set_ranges(&self, key: DocumentKey, ranges: Vec<FoldingRange>) {
        self.ranges.lock().unwrap().push((key, ranges));
    }

    pub fn set_active(&self, view: Option<ActiveView>) {
        *self.active.lock().unwrap() = view;
    }

    pub fn commands(&self) -> Vec<HostCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn clear_commands(&self) {
        self.commands.lock().unwrap().clear();
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EditorHost for RecordingHost {
    async fn folding_ranges(&self, key: &DocumentKey) -> FoldResult<Vec<FoldingRange>> {
        if self.fail_ranges {
            return Err(FoldError::host("folding range provider unavailable"));
        }
        Ok(self
            .ranges
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, ranges)| ranges.clone())
            .unwrap_or_default())
    }

    async fn fold_lines(&self, key: &DocumentKey, lines: &[u32]) -> FoldResult<()> {
        self.commands
            .lock()
            .unwrap()
            .push(HostCommand::Fold(key.clone(), lines.to_vec()));
        Ok(())
    }

    async fn unfold_lines(&self, key: &DocumentKey, lines: &[u32]) -> FoldResult<()> {
        self.commands
            .lock()
            .unwrap()
            .push(HostCommand::Unfold(key.clone(), lines.to_vec()));
        Ok(())
    }

    async fn fold_all_marker_regions(&self, key: &DocumentKey) -> FoldResult<()> {
        self.commands
            .lock()
            .unwrap()
            .push(HostCommand::FoldAllMarkerRegions(key.clone()));
        Ok(())
    }

    fn active_view(&self) -> Option<ActiveView> {
        self.active.lock().unwrap().clone()
    }
}

pub fn key(raw: &str) -> DocumentKey {
    DocumentKey::from_raw(raw)
}

pub fn descriptor(raw: &str, language: &str) -> DocumentDescriptor {
    DocumentDescriptor::new(key(raw)).with_language(language)
}

/// Let spawned fold tasks run to completion without advancing time.
pub async fn drain_tasks() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}
