//! Folding range data as reported by the host's code-structure analysis.

use serde::{Deserialize, Serialize};

/// Kind tag of a folding range.
///
/// Hosts with the common editor vocabulary report one of the three
/// enumerated kinds; hosts with a free-text vocabulary land in
/// [`FoldingRangeKind::Other`], which keeps the original tag so region
/// detection can still fall back to a substring test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoldingRangeKind {
    Comment,
    Imports,
    Region,
    /// Free-text kind outside the standard enumeration.
    Other(String),
}

impl FoldingRangeKind {
    /// Whether this kind marks a region block.
    ///
    /// `Region` matches exactly; a free-text tag matches when it contains
    /// "region" case-insensitively, so host vocabularies like
    /// `"marker.region"` still qualify.
    pub fn is_region(&self) -> bool {
        match self {
            FoldingRangeKind::Region => true,
            FoldingRangeKind::Comment | FoldingRangeKind::Imports => false,
            FoldingRangeKind::Other(tag) => tag.to_lowercase().contains("region"),
        }
    }
}

impl From<String> for FoldingRangeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "comment" => FoldingRangeKind::Comment,
            "imports" => FoldingRangeKind::Imports,
            "region" => FoldingRangeKind::Region,
            _ => FoldingRangeKind::Other(tag),
        }
    }
}

impl From<FoldingRangeKind> for String {
    fn from(kind: FoldingRangeKind) -> Self {
        match kind {
            FoldingRangeKind::Comment => "comment".to_string(),
            FoldingRangeKind::Imports => "imports".to_string(),
            FoldingRangeKind::Region => "region".to_string(),
            FoldingRangeKind::Other(tag) => tag,
        }
    }
}

/// One collapsible range over 0-based line numbers, `end` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoldingRange {
    pub start: u32,
    pub end: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FoldingRangeKind>,
}

impl FoldingRange {
    pub fn new(start: u32, end: u32, kind: Option<FoldingRangeKind>) -> Self {
        Self { start, end, kind }
    }

    /// A range tagged as a region block.
    pub fn region(start: u32, end: u32) -> Self {
        Self::new(start, end, Some(FoldingRangeKind::Region))
    }

    /// Whether this range is a candidate for marker folding.
    ///
    /// Untagged ranges count as candidates: hosts that only compute marker
    /// folds often omit the kind entirely.
    pub fn is_region_candidate(&self) -> bool {
        self.kind.as_ref().is_none_or(FoldingRangeKind::is_region)
    }

    /// Whether the (possibly out-of-range) line falls inside `[start, end]`.
    ///
    /// The line is signed so caret positions a host reports as negative or
    /// otherwise invalid are simply contained by nothing.
    pub fn contains_line(&self, line: i64) -> bool {
        line >= i64::from(self.start) && line <= i64::from(self.end)
    }
}
