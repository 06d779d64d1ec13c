//! Settings resolution for the auto-fold engine.
//!
//! Settings are resolved from three layers, later layers winning:
//! programmed defaults, the user's config file, and an override payload
//! from the host's settings store. Resolution never fails; problems with a
//! layer surface as [`SettingsEvent`] warnings and the layer is skipped.

pub mod defaults;
pub mod settings;
pub mod user;

pub use defaults::default_settings;
pub use settings::{FoldSettings, FoldSettingsUpdate};
pub use user::{UserConfigError, UserConfigResult, load_user_config, user_config_path};

use serde_json::Value;

const LOG_TARGET: &str = "oritatami::config";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsEventKind {
    Info,
    Warning,
}

/// A diagnostic record produced while resolving settings, for the host to
/// surface however it likes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub kind: SettingsEventKind,
    pub message: String,
}

impl SettingsEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Warning,
            message: message.into(),
        }
    }
}

/// Result of resolving all settings layers.
#[derive(Debug, Default)]
pub struct SettingsLoadOutcome {
    pub settings: FoldSettings,
    pub events: Vec<SettingsEvent>,
}

/// Merge partial layers left to right; later layers override earlier ones.
pub fn merge_all(layers: &[Option<FoldSettingsUpdate>]) -> FoldSettingsUpdate {
    layers
        .iter()
        .flatten()
        .fold(FoldSettingsUpdate::default(), |acc, layer| {
            acc.merged_with(layer)
        })
}

/// Resolve settings from defaults, the user config file, and an optional
/// override payload from the host's settings store.
pub fn load_settings(override_settings: Option<Value>) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    // Layer 1: programmed defaults (lowest precedence, applied during
    // finalization). Layer 2: user config from XDG_CONFIG_HOME.
    let user_config = load_user_config_with_events(&mut events);

    // Layer 3: override from the host's settings store.
    let override_config =
        override_settings.and_then(|value| parse_override_settings(value, &mut events));

    let merged = merge_all(&[user_config, override_config]);
    SettingsLoadOutcome {
        settings: FoldSettings::from(merged),
        events,
    }
}

/// Load user config and record appropriate events.
fn load_user_config_with_events(events: &mut Vec<SettingsEvent>) -> Option<FoldSettingsUpdate> {
    match load_user_config() {
        Ok(Some(update)) => {
            events.push(SettingsEvent::info(
                "Loaded user config from XDG_CONFIG_HOME",
            ));
            Some(update)
        }
        Ok(None) => {
            // No user config file exists - this is fine (zero-config experience)
            None
        }
        Err(err) => {
            log::warn!(target: LOG_TARGET, "Failed to load user config: {}", err);
            events.push(SettingsEvent::warning(format!(
                "Failed to load user config: {}",
                err
            )));
            None
        }
    }
}

fn parse_override_settings(
    value: Value,
    events: &mut Vec<SettingsEvent>,
) -> Option<FoldSettingsUpdate> {
    match serde_json::from_value::<FoldSettingsUpdate>(value) {
        Ok(update) => {
            events.push(SettingsEvent::info("Parsed host settings override"));
            Some(update)
        }
        Err(err) => {
            log::warn!(target: LOG_TARGET, "Failed to parse host settings override: {}", err);
            events.push(SettingsEvent::warning(format!(
                "Failed to parse host settings override: {}",
                err
            )));
            None
        }
    }
}
