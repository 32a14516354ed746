//! Preset resolution.
//!
//! Turns a [`RendererSelection`] into a validated [`RendererConfig`]: load the
//! named preset, merge overrides, resolve every color token, validate.

use strata_common::ConfigError;
use tracing::{info, warn};

use crate::colors::ColorResolver;
use crate::presets::{load_preset, merged, RendererSelection, SpecOverrides};
use crate::schema::{RendererConfig, TerrainSpec};
use crate::validation::validate;

/// Resolve a selection into a concrete, validated config.
///
/// Each color field is resolved exactly once, through `resolver`.
pub fn resolve(
    selection: &RendererSelection,
    resolver: &dyn ColorResolver,
) -> Result<RendererConfig, ConfigError> {
    let spec = resolve_spec(selection)?;
    let config = resolve_colors(&spec, resolver)?;
    info!(preset = selection.preset_name(), "resolved renderer config");
    Ok(config)
}

/// Load and merge a selection without resolving colors.
pub fn resolve_spec(selection: &RendererSelection) -> Result<TerrainSpec, ConfigError> {
    let base = load_preset(selection.preset_name())?;
    Ok(match selection.overrides() {
        Some(overrides) => merged(&base, overrides),
        None => base,
    })
}

/// Resolve color tokens of a token-form config and validate the result.
pub fn resolve_colors(
    spec: &TerrainSpec,
    resolver: &dyn ColorResolver,
) -> Result<RendererConfig, ConfigError> {
    let config = spec.try_map_colors(|token| resolver.resolve_color(token))?;
    if let Err(e) = validate(&config) {
        warn!("renderer config rejected: {e}");
        return Err(e);
    }
    Ok(config)
}

/// Merge token-form overrides into an already resolved config.
///
/// Only the sections present in `overrides` are resolved; the rest of
/// `current` is kept as-is. The result is validated before it is returned.
pub fn merge_resolved(
    current: &RendererConfig,
    overrides: &SpecOverrides,
    resolver: &dyn ColorResolver,
) -> Result<RendererConfig, ConfigError> {
    let resolved = overrides.try_map_colors(|token| resolver.resolve_color(token))?;
    let config = merged(current, &resolved);
    if let Err(e) = validate(&config) {
        warn!("config update rejected: {e}");
        return Err(e);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PaletteResolver;
    use crate::schema::{GeometryConfig, PaletteConfig};
    use std::cell::RefCell;
    use strata_common::Rgb;

    #[test]
    fn preset_and_empty_overrides_resolve_identically() {
        let resolver = PaletteResolver::design_system();
        let plain = resolve(&RendererSelection::from("landing"), &resolver).unwrap();
        let with_empty = resolve(
            &RendererSelection::PresetWithOverrides {
                preset: "landing".into(),
                overrides: SpecOverrides::default(),
            },
            &resolver,
        )
        .unwrap();
        assert_eq!(plain, with_empty);
    }

    #[test]
    fn raw_overrides_apply_over_default() {
        let resolver = PaletteResolver::design_system();
        let selection = RendererSelection::Overrides(SpecOverrides {
            geometry: Some(GeometryConfig {
                segments: 16,
                rings: 8,
                radius: 1.0,
            }),
            ..Default::default()
        });
        let config = resolve(&selection, &resolver).unwrap();
        assert_eq!(config.geometry.segments, 16);
        let default = resolve(&RendererSelection::default(), &resolver).unwrap();
        assert_eq!(config.palette, default.palette);
    }

    #[test]
    fn resolves_each_color_field_once() {
        let calls = RefCell::new(Vec::new());
        let resolver = |token: &str| {
            calls.borrow_mut().push(token.to_string());
            Ok::<_, ConfigError>(Rgb::new(0.5, 0.5, 0.5))
        };
        resolve(&RendererSelection::default(), &resolver).unwrap();
        assert_eq!(calls.borrow().len(), 8);
    }

    #[test]
    fn unresolved_token_fails_resolution() {
        let resolver = PaletteResolver::new();
        let err = resolve(&RendererSelection::default(), &resolver).unwrap_err();
        assert!(matches!(err, ConfigError::UnresolvedColor { .. }));
    }

    #[test]
    fn unknown_preset_fails_resolution() {
        let resolver = PaletteResolver::design_system();
        let err = resolve(&RendererSelection::from("volcanic"), &resolver).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(_)));
    }

    #[test]
    fn invalid_thresholds_fail_validation() {
        let resolver = PaletteResolver::design_system();
        let selection = RendererSelection::Overrides(SpecOverrides {
            palette: Some(PaletteConfig {
                thresholds: [0.6, 0.4, 0.8],
                ..PaletteConfig::default()
            }),
            ..Default::default()
        });
        let err = resolve(&selection, &resolver).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn merge_resolved_keeps_untouched_sections() {
        let resolver = PaletteResolver::design_system();
        let current = resolve(&RendererSelection::from("landing"), &resolver).unwrap();
        let overrides = SpecOverrides {
            geometry: Some(GeometryConfig {
                segments: 24,
                rings: 12,
                radius: 1.0,
            }),
            ..Default::default()
        };
        let next = merge_resolved(&current, &overrides, &resolver).unwrap();
        assert_eq!(next.geometry.segments, 24);
        assert_eq!(next.contour, current.contour);
        assert!(current.geometry_differs(&next));
    }

    #[test]
    fn merge_resolved_rejects_degenerate_geometry() {
        let resolver = PaletteResolver::design_system();
        let current = resolve(&RendererSelection::default(), &resolver).unwrap();
        let overrides = SpecOverrides {
            geometry: Some(GeometryConfig {
                segments: 2,
                rings: 96,
                radius: 1.0,
            }),
            ..Default::default()
        };
        let err = merge_resolved(&current, &overrides, &resolver).unwrap_err();
        assert!(err.to_string().contains("segments"));
    }
}
