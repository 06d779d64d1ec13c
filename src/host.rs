//! Host editor boundary.
//!
//! The engine never parses source or mutates editor state directly; the
//! hosting editor supplies folding-range discovery, fold/unfold commands
//! and window state through this trait. Implementations wrap the platform
//! API (command invocations, window queries) and are free to be as thin as
//! a couple of RPC calls.

use async_trait::async_trait;

use crate::document::DocumentKey;
use crate::error::FoldResult;
use crate::fold::FoldingRange;

/// The focused editor view as the host reports it right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    /// Document shown in the focused view.
    pub key: DocumentKey,
    /// 0-based caret line.
    pub caret_line: u32,
    /// 0-based caret column.
    pub caret_character: u32,
}

impl ActiveView {
    pub fn new(key: DocumentKey, caret_line: u32, caret_character: u32) -> Self {
        Self {
            key,
            caret_line,
            caret_character,
        }
    }
}

/// Commands and queries the auto-fold engine needs from the hosting editor.
///
/// Fold and unfold commands are idempotent on the host side: folding an
/// already-folded line is harmless. A provider failure is an ordinary
/// error, not a fault; the engine degrades to doing nothing.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Folding ranges for a document. An empty result means the document
    /// has nothing foldable.
    async fn folding_ranges(&self, key: &DocumentKey) -> FoldResult<Vec<FoldingRange>>;

    /// Fold the ranges starting at the given 0-based lines.
    async fn fold_lines(&self, key: &DocumentKey, lines: &[u32]) -> FoldResult<()>;

    /// Unfold the ranges starting at the given 0-based lines.
    async fn unfold_lines(&self, key: &DocumentKey, lines: &[u32]) -> FoldResult<()>;

    /// Collapse every marker region in the document with one bulk command.
    async fn fold_all_marker_regions(&self, key: &DocumentKey) -> FoldResult<()>;

    /// The currently focused view, if any.
    fn active_view(&self) -> Option<ActiveView>;
}
