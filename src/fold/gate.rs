//! Language gate for auto-folding.

use crate::config::FoldSettings;

/// Decide whether a document's language qualifies for auto-folding.
///
/// Matching is case-insensitive on both sides. In allow-all mode every
/// language qualifies unless it is listed in `disabledFiles`; otherwise only
/// languages listed in `enabledFiles` qualify, and a missing or empty
/// identifier never does.
pub fn should_fold_language(settings: &FoldSettings, language_id: Option<&str>) -> bool {
    let id = language_id.unwrap_or("").to_lowercase();
    if settings.enable_for_all_files {
        return !settings
            .disabled_files
            .iter()
            .any(|entry| entry.to_lowercase() == id);
    }

    !id.is_empty()
        && settings
            .enabled_files
            .iter()
            .any(|entry| entry.to_lowercase() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn allow_all(disabled: &[&str]) -> FoldSettings {
        FoldSettings {
            enable_for_all_files: true,
            enabled_files: Vec::new(),
            disabled_files: disabled.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn allow_list(enabled: &[&str]) -> FoldSettings {
        FoldSettings {
            enable_for_all_files: false,
            enabled_files: enabled.iter().map(|s| s.to_string()).collect(),
            disabled_files: Vec::new(),
        }
    }

    #[rstest]
    #[case(Some("typescript"), true)]
    #[case(Some("markdown"), false)]
    #[case(Some("MarkDown"), false)]
    #[case(Some(""), true)]
    #[case(None, true)]
    fn allow_all_mode_excludes_only_disabled_languages(
        #[case] language_id: Option<&str>,
        #[case] expected: bool,
    ) {
        let settings = allow_all(&["markdown"]);
        assert_eq!(should_fold_language(&settings, language_id), expected);
    }

    #[rstest]
    #[case(Some("rust"), true)]
    #[case(Some("RUST"), true)]
    #[case(Some("python"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn allow_list_mode_includes_only_enabled_languages(
        #[case] language_id: Option<&str>,
        #[case] expected: bool,
    ) {
        let settings = allow_list(&["rust", "TypeScript"]);
        assert_eq!(should_fold_language(&settings, language_id), expected);
    }

    #[test]
    fn list_entries_are_matched_case_insensitively() {
        let settings = allow_list(&["TypeScript"]);
        assert!(should_fold_language(&settings, Some("typescript")));

        let settings = allow_all(&["MarkDown"]);
        assert!(!should_fold_language(&settings, Some("markdown")));
    }

    #[test]
    fn empty_identifier_never_matches_the_allow_list() {
        // Even a pathological allow-list containing the empty string must
        // not qualify documents with no language identifier.
        let settings = allow_list(&[""]);
        assert!(!should_fold_language(&settings, Some("")));
        assert!(!should_fold_language(&settings, None));
    }
}
