use serde::{Deserialize, Serialize};

use super::defaults::default_settings;

/// Resolved auto-fold settings.
///
/// Field names follow the host settings store (camelCase), so a raw
/// settings payload deserializes directly. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoldSettings {
    /// Allow-all mode: fold every language unless listed in
    /// `disabled_files`. When false, only `enabled_files` qualify.
    pub enable_for_all_files: bool,
    /// Language identifiers eligible for folding in allow-list mode.
    pub enabled_files: Vec<String>,
    /// Language identifiers excluded from folding in allow-all mode.
    pub disabled_files: Vec<String>,
}

impl Default for FoldSettings {
    fn default() -> Self {
        default_settings()
    }
}

/// A partial settings layer.
///
/// Every configuration source (user file, host override) parses into this
/// all-optional mirror of [`FoldSettings`]; fields a layer leaves out stay
/// `None` and defer to lower-precedence layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoldSettingsUpdate {
    pub enable_for_all_files: Option<bool>,
    pub enabled_files: Option<Vec<String>>,
    pub disabled_files: Option<Vec<String>>,
}

impl FoldSettingsUpdate {
    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(&self, other: &FoldSettingsUpdate) -> FoldSettingsUpdate {
        FoldSettingsUpdate {
            enable_for_all_files: other.enable_for_all_files.or(self.enable_for_all_files),
            enabled_files: other
                .enabled_files
                .clone()
                .or_else(|| self.enabled_files.clone()),
            disabled_files: other
                .disabled_files
                .clone()
                .or_else(|| self.disabled_files.clone()),
        }
    }
}

impl From<FoldSettingsUpdate> for FoldSettings {
    /// Finalize a merged layer stack, filling unset fields with the
    /// programmed defaults.
    fn from(update: FoldSettingsUpdate) -> Self {
        let base = default_settings();
        FoldSettings {
            enable_for_all_files: update
                .enable_for_all_files
                .unwrap_or(base.enable_for_all_files),
            enabled_files: update.enabled_files.unwrap_or(base.enabled_files),
            disabled_files: update.disabled_files.unwrap_or(base.disabled_files),
        }
    }
}
