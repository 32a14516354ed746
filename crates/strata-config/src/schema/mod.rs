//! Configuration schema types for the terrain renderer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Color-bearing sections are generic over their color representation:
//! presets and files carry symbolic tokens ([`TerrainSpec`]), the renderer
//! consumes concrete colors ([`RendererConfig`]).

mod effects;
mod geometry;
mod motion;
mod noise;
mod palette;
mod view;

pub use effects::*;
pub use geometry::*;
pub use motion::*;
pub use noise::*;
pub use palette::*;
pub use view::*;

use serde::{Deserialize, Serialize};
use strata_common::Rgb;

/// A symbolic design-system color reference, e.g. `"terrain.peak"` or `"#ffcc00"`.
pub type ColorToken = String;

/// Unresolved configuration: colors are still tokens.
pub type TerrainSpec = TerrainConfig<ColorToken>;

/// Fully resolved configuration consumed by the renderer.
pub type RendererConfig = TerrainConfig<Rgb>;

/// Root renderer configuration.
///
/// Immutable for the duration of a frame; replaced wholesale between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, TerrainConfig<C>: Default, \
        PaletteConfig<C>: Default, ContourConfig<C>: Default, GrainConfig<C>: Default, \
        FallbackConfig<C>: Default")
)]
pub struct TerrainConfig<C> {
    pub geometry: GeometryConfig,
    pub noise: NoiseConfig,
    pub palette: PaletteConfig<C>,
    pub contour: ContourConfig<C>,
    pub grain: GrainConfig<C>,
    pub rotation: RotationConfig,
    pub mask: MaskConfig,
    pub shading: ShadingConfig,
    pub elevation: ElevationConfig,
    pub camera: CameraConfig,
    pub fallback: FallbackConfig<C>,
}

impl Default for TerrainSpec {
    fn default() -> Self {
        Self {
            geometry: GeometryConfig::default(),
            noise: NoiseConfig::default(),
            palette: PaletteConfig::default(),
            contour: ContourConfig::default(),
            grain: GrainConfig::default(),
            rotation: RotationConfig::default(),
            mask: MaskConfig::default(),
            shading: ShadingConfig::default(),
            elevation: ElevationConfig::default(),
            camera: CameraConfig::default(),
            fallback: FallbackConfig::default(),
        }
    }
}

impl<C> TerrainConfig<C> {
    /// Convert every color field, stopping at the first failure.
    ///
    /// Fields are visited in declaration order: palette, contour, grain,
    /// fallback.
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<TerrainConfig<D>, E> {
        Ok(TerrainConfig {
            geometry: self.geometry.clone(),
            noise: self.noise.clone(),
            palette: self.palette.try_map_colors(&mut f)?,
            contour: self.contour.try_map_colors(&mut f)?,
            grain: self.grain.try_map_colors(&mut f)?,
            rotation: self.rotation.clone(),
            mask: self.mask.clone(),
            shading: self.shading.clone(),
            elevation: self.elevation.clone(),
            camera: self.camera.clone(),
            fallback: self.fallback.try_map_colors(&mut f)?,
        })
    }

    /// Whether `other` would require a different sphere mesh.
    pub fn geometry_differs<D>(&self, other: &TerrainConfig<D>) -> bool {
        self.geometry != other.geometry
    }
}
