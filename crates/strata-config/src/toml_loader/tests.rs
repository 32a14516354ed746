//! Tests for TOML selection loading, creation, and path resolution.

use super::*;
use crate::colors::PaletteResolver;
use crate::presets::RendererSelection;
use crate::resolve::resolve;
use std::path::Path;
use strata_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_strata_renderer.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_preset_with_section_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renderer.toml");
    std::fs::write(
        &path,
        r##"
preset = "landing"

[palette]
colors = ["#000000", "#333333", "#999999", "#ffffff"]
thresholds = [0.3, 0.5, 0.7]
"##,
    )
    .unwrap();

    let selection = load_from_path(&path).unwrap();
    assert_eq!(selection.preset_name(), "landing");
    let palette = selection.overrides().unwrap().palette.as_ref().unwrap();
    assert_eq!(palette.colors[3], "#ffffff");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renderer.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn wrong_palette_arity_is_parse_error() {
    let result = parse_selection(
        r##"
[palette]
colors = ["#000000", "#ffffff"]
"##,
    );
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn empty_file_selects_default_overrides() {
    let selection = parse_selection("").unwrap();
    assert_eq!(selection.preset_name(), "default");
    assert!(selection.overrides().unwrap().is_empty());
}

#[test]
fn template_parses_to_default_preset() {
    let selection = parse_selection(&template::default_config_toml()).unwrap();
    assert_eq!(selection, RendererSelection::Preset("default".into()));
}

#[test]
fn template_resolves_and_validates() {
    let selection = parse_selection(&template::default_config_toml()).unwrap();
    assert!(resolve(&selection, &PaletteResolver::design_system()).is_ok());
}

#[test]
fn create_default_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("strata").join("renderer.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());
    let selection = load_from_path(&path).unwrap();
    assert_eq!(selection.preset_name(), "default");
}

#[test]
fn default_config_path_ends_with_renderer_toml() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("strata/renderer.toml"));
    }
}
