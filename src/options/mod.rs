//! Camera and input configuration with TOML preset support.
//!
//! All tweakable settings (movement speed, look sensitivity, pitch and
//! field-of-view limits, eye-height pinning, mouse conventions, key
//! bindings) are consolidated here. Options serialize to/from TOML so a
//! walk-style and a fly-style preset can live side by side on disk.

mod camera;
mod input;
mod keybindings;

use std::path::Path;

pub use camera::{AngleRange, CameraOptions};
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Movement, look and projection parameters.
    pub camera: CameraOptions,
    /// Raw mouse and wheel conventions.
    pub input: InputOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CameraError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        opts.keybindings.fill_missing_defaults();
        opts.keybindings.validate()?;
        opts.keybindings.rebuild_reverse_map();
        opts.camera.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
