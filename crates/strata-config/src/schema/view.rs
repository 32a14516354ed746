//! Viewport mask, shading, camera and fallback configuration.

use serde::{Deserialize, Serialize};
use strata_common::Vec3;

use super::ColorToken;

/// Circular viewport mask with a soft edge.
///
/// Distances are measured from the screen center in units of half the
/// shorter viewport side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    pub circular: bool,
    pub viewport_radius: f32,
    pub edge_softness: f32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            circular: false,
            viewport_radius: 0.92,
            edge_softness: 0.08,
        }
    }
}

/// Single directional diffuse term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub enabled: bool,
    pub intensity: f32,
    pub light_direction: Vec3,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 0.45,
            light_direction: [-0.4, 0.6, 1.0],
        }
    }
}

/// Near clip plane distance of the terrain projection.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far clip plane distance of the terrain projection.
pub const CAMERA_FAR: f32 = 100.0;

/// Perspective camera looking down -Z at the sphere.
///
/// The whole sphere must sit between [`CAMERA_NEAR`] and [`CAMERA_FAR`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_4,
            distance: 3.2,
        }
    }
}

/// Animated gradient painted when the terrain pipeline is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, FallbackConfig<C>: Default")
)]
pub struct FallbackConfig<C> {
    pub colors: [C; 2],
    /// Seconds for one full revolution of the gradient angle.
    pub period: f32,
}

impl Default for FallbackConfig<ColorToken> {
    fn default() -> Self {
        Self {
            colors: ["surface.base".into(), "surface.raised".into()],
            period: 24.0,
        }
    }
}

impl<C> FallbackConfig<C> {
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<FallbackConfig<D>, E> {
        let [a, b] = &self.colors;
        Ok(FallbackConfig {
            colors: [f(a)?, f(b)?],
            period: self.period,
        })
    }
}
