//! Core TOML loading: read a renderer selection from a path or the platform default.

use crate::presets::{RendererSelection, SelectionFile};
use std::path::Path;
use strata_common::ConfigError;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Parse a selection from TOML text.
///
/// Missing sections fall back to the chosen preset; missing fields inside a
/// present section take schema defaults.
pub fn parse_selection(content: &str) -> Result<RendererSelection, ConfigError> {
    let file: SelectionFile = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    Ok(file.into())
}

/// Load a selection from a specific TOML file path.
///
/// The result is not validated here; validation happens when the selection
/// is resolved against a color resolver.
pub fn load_from_path(path: &Path) -> Result<RendererSelection, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let selection = parse_selection(&content)?;
    info!(
        preset = selection.preset_name(),
        "loaded renderer selection from {}",
        path.display()
    );
    Ok(selection)
}

/// Load the selection from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/strata/renderer.toml`
/// On Linux: `~/.config/strata/renderer.toml`
///
/// If the file does not exist, creates a commented default file and returns
/// the `default` preset.
pub fn load_default() -> Result<RendererSelection, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(selection) => Ok(selection),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no renderer config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(RendererSelection::default())
        }
        Err(e) => Err(e),
    }
}
