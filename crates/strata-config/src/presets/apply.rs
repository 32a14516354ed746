//! Override merging.
//!
//! Applies [`TerrainOverrides`] to a [`TerrainConfig`], replacing whole
//! sections for every override that is present.

use super::types::TerrainOverrides;
use crate::schema::TerrainConfig;

/// Apply overrides to a config. Present sections replace the base section
/// entirely; absent sections are left untouched.
pub fn apply_overrides<C: Clone>(config: &mut TerrainConfig<C>, overrides: &TerrainOverrides<C>) {
    if let Some(ref geometry) = overrides.geometry {
        config.geometry = geometry.clone();
    }
    if let Some(ref noise) = overrides.noise {
        config.noise = noise.clone();
    }
    if let Some(ref palette) = overrides.palette {
        config.palette = palette.clone();
    }
    if let Some(ref contour) = overrides.contour {
        config.contour = contour.clone();
    }
    if let Some(ref grain) = overrides.grain {
        config.grain = grain.clone();
    }
    if let Some(ref rotation) = overrides.rotation {
        config.rotation = rotation.clone();
    }
    if let Some(ref mask) = overrides.mask {
        config.mask = mask.clone();
    }
    if let Some(ref shading) = overrides.shading {
        config.shading = shading.clone();
    }
    if let Some(ref elevation) = overrides.elevation {
        config.elevation = elevation.clone();
    }
    if let Some(ref camera) = overrides.camera {
        config.camera = camera.clone();
    }
    if let Some(ref fallback) = overrides.fallback {
        config.fallback = fallback.clone();
    }
}

/// Non-mutating variant of [`apply_overrides`].
pub fn merged<C: Clone>(
    base: &TerrainConfig<C>,
    overrides: &TerrainOverrides<C>,
) -> TerrainConfig<C> {
    let mut config = base.clone();
    apply_overrides(&mut config, overrides);
    config
}
