//! User configuration loading for oritatami.
//!
//! This module handles loading user-wide configuration from the XDG config
//! directory. User config location: $XDG_CONFIG_HOME/oritatami/oritatami.toml
//! Fallback: ~/.config/oritatami/oritatami.toml

use std::path::PathBuf;

use thiserror::Error;

use super::settings::FoldSettingsUpdate;

/// Errors from reading or parsing the user configuration file.
#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("failed to read user config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse user config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type UserConfigResult<T> = Result<T, UserConfigError>;

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/oritatami/oritatami.toml
/// 2. Otherwise: ~/.config/oritatami/oritatami.toml
///
/// Returns None if neither location can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config)
                .join("oritatami")
                .join("oritatami.toml"),
        );
    }

    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("oritatami")
            .join("oritatami.toml")
    })
}

/// Load the user configuration layer if present.
///
/// Returns `Ok(None)` when no config file exists: the zero-config
/// experience is the common case.
pub fn load_user_config() -> UserConfigResult<Option<FoldSettingsUpdate>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let update = toml::from_str::<FoldSettingsUpdate>(&contents)?;
    Ok(Some(update))
}
