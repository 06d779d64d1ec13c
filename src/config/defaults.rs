//! Default configuration values for oritatami.

use super::settings::FoldSettings;

/// Returns the default fold settings: fold every language, exclude none.
pub fn default_settings() -> FoldSettings {
    FoldSettings {
        enable_for_all_files: true,
        enabled_files: Vec::new(),
        disabled_files: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_allow_all_with_empty_lists() {
        let settings = default_settings();
        assert!(settings.enable_for_all_files);
        assert!(settings.enabled_files.is_empty());
        assert!(settings.disabled_files.is_empty());
    }
}
