//! Region selection policy.
//!
//! Given the full set of folding ranges the host reports for a document and
//! an optional target line, decide which region start lines to collapse.
//! The policy is pure and total: malformed or overlapping input degrades to
//! a best-effort answer, never a failure.

use super::range::FoldingRange;

/// The region candidates of a range set, input order preserved.
pub fn region_candidates(ranges: &[FoldingRange]) -> Vec<&FoldingRange> {
    ranges.iter().filter(|r| r.is_region_candidate()).collect()
}

/// The first region candidate containing `line`, if any.
pub fn containing_region(ranges: &[FoldingRange], line: i64) -> Option<&FoldingRange> {
    ranges
        .iter()
        .filter(|r| r.is_region_candidate())
        .find(|r| r.contains_line(line))
}

/// Compute the 0-based start lines to fold, excluding the region containing
/// `target_line`.
///
/// `None` and `Some(0)` both mean "no usable caret" and fold every region
/// candidate. Line 0 is also a legitimate caret position at the top of the
/// file; the two cases are indistinguishable here and deliberately share
/// the fold-everything outcome, matching long-standing editor behavior.
///
/// When several candidates contain the target (overlapping ranges a
/// well-behaved host should not produce), all of them stay open. A negative
/// target is contained by nothing, so every candidate folds.
pub fn lines_to_fold(ranges: &[FoldingRange], target_line: Option<i64>) -> Vec<u32> {
    if ranges.is_empty() {
        return Vec::new();
    }

    let candidates = ranges.iter().filter(|r| r.is_region_candidate());
    match target_line {
        None | Some(0) => candidates.map(|r| r.start).collect(),
        Some(line) => candidates
            .filter(|r| !r.contains_line(line))
            .map(|r| r.start)
            .collect(),
    }
}
