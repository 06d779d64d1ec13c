pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod fold;
pub mod host;
pub mod tracker;

// Re-export the types a host glue layer needs at hand.
pub use config::{
    FoldSettings, FoldSettingsUpdate, SettingsEvent, SettingsEventKind, SettingsLoadOutcome,
    load_settings,
};
pub use document::{DocumentDescriptor, DocumentKey};
pub use engine::{AutoFoldEngine, DEFAULT_FOLD_DELAY};
pub use error::{FoldError, FoldResult};
pub use fold::{
    FoldingRange, FoldingRangeKind, containing_region, lines_to_fold, region_candidates,
    should_fold_language,
};
pub use host::{ActiveView, EditorHost};
pub use tracker::{DEFAULT_IGNORED_PREFIXES, OpenDocumentTracker};
