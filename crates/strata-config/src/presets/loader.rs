//! Preset resolution and loading.
//!
//! Resolves preset names to built-ins or YAML files and parses user presets
//! into [`SpecOverrides`] layered over the `default` preset.

use super::apply::apply_overrides;
use super::builtin::{built_in, default_preset};
use super::types::SpecOverrides;
use crate::schema::TerrainSpec;
use std::path::{Path, PathBuf};
use strata_common::ConfigError;
use tracing::{debug, info};

/// Resolve the filesystem path for a user preset by name.
///
/// If the name looks like a file path (contains `/` or ends in
/// `.yaml`/`.yml`), it is used directly. Otherwise `presets/<name>.yaml` is
/// tried next to the executable, under the working directory, and in the
/// user config directory, in that order.
fn resolve_preset_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let file_name = format!("{name}.yaml");

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let preset_path = exe_dir.join("presets").join(&file_name);
            if preset_path.exists() {
                return Ok(preset_path);
            }
        }
    }

    let local_path = PathBuf::from("presets").join(&file_name);
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_preset = config_dir.join("strata").join("presets").join(&file_name);
        if config_preset.exists() {
            return Ok(config_preset);
        }
    }

    Err(ConfigError::UnknownPreset(name.to_string()))
}

/// Load a preset by name.
///
/// Built-in names always succeed. Any other name is looked up as a YAML
/// user preset; a name that matches nothing is an `UnknownPreset` error.
pub fn load_preset(name: &str) -> Result<TerrainSpec, ConfigError> {
    if let Some(spec) = built_in(name) {
        debug!(preset = name, "using built-in preset");
        return Ok(spec);
    }

    let path = resolve_preset_path(name)?;
    load_preset_from_path(&path)
}

/// Load a YAML user preset from a specific path.
///
/// The file holds section overrides; they are applied over `default`.
pub fn load_preset_from_path(path: &Path) -> Result<TerrainSpec, ConfigError> {
    let overrides = load_overrides_from_path(path)?;
    let mut spec = default_preset();
    apply_overrides(&mut spec, &overrides);
    Ok(spec)
}

/// Parse a YAML overrides file without applying it.
pub fn load_overrides_from_path(path: &Path) -> Result<SpecOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to read preset file {}: {e}",
            path.display()
        ))
    })?;

    let overrides: SpecOverrides = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse preset YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded preset from {}", path.display());
    Ok(overrides)
}
