//! Built-in presets.

use crate::schema::{
    ContourConfig, ElevationConfig, GrainConfig, MaskConfig, RotationConfig, TerrainSpec,
};

/// The `default` preset: schema defaults, animated elevation, full effects.
pub fn default_preset() -> TerrainSpec {
    TerrainSpec::default()
}

/// The `landing` preset: a calmer hero sphere for marketing surfaces.
///
/// Static terrain (no elevation drift), slower spin, heavier contours and a
/// circular mask.
pub fn landing_preset() -> TerrainSpec {
    TerrainSpec {
        contour: ContourConfig {
            width: 0.009,
            intensity: 0.7,
            ..ContourConfig::default()
        },
        grain: GrainConfig {
            intensity: 0.04,
            speed: 12.0,
            ..GrainConfig::default()
        },
        rotation: RotationConfig {
            auto_rotate_speed: 0.05,
            ..RotationConfig::default()
        },
        mask: MaskConfig {
            circular: true,
            ..MaskConfig::default()
        },
        elevation: ElevationConfig {
            enabled: false,
            ..ElevationConfig::default()
        },
        ..TerrainSpec::default()
    }
}

/// Look up a built-in preset by name.
pub fn built_in(name: &str) -> Option<TerrainSpec> {
    match name {
        "default" => Some(default_preset()),
        "landing" => Some(landing_preset()),
        _ => None,
    }
}
