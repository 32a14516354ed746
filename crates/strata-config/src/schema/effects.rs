//! Contour line and grain overlay configuration.

use serde::{Deserialize, Serialize};

use super::ColorToken;

/// Contour lines drawn where elevation sits within `width` of a band threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, ContourConfig<C>: Default")
)]
pub struct ContourConfig<C> {
    pub enabled: bool,
    /// Half-width of the band around each threshold, in elevation units.
    pub width: f32,
    pub intensity: f32,
    pub color: C,
}

impl Default for ContourConfig<ColorToken> {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 0.006,
            intensity: 0.55,
            color: "terrain.contour".into(),
        }
    }
}

impl<C> ContourConfig<C> {
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<ContourConfig<D>, E> {
        Ok(ContourConfig {
            enabled: self.enabled,
            width: self.width,
            intensity: self.intensity,
            color: f(&self.color)?,
        })
    }
}

/// Screen-space film grain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    default,
    bound(deserialize = "C: Deserialize<'de>, GrainConfig<C>: Default")
)]
pub struct GrainConfig<C> {
    pub enabled: bool,
    pub intensity: f32,
    pub scale: f32,
    pub speed: f32,
    pub contrast: f32,
    pub color: C,
    pub animated: bool,
}

impl Default for GrainConfig<ColorToken> {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 0.06,
            scale: 420.0,
            speed: 24.0,
            contrast: 1.4,
            color: "terrain.grain".into(),
            animated: true,
        }
    }
}

impl<C> GrainConfig<C> {
    pub fn try_map_colors<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<GrainConfig<D>, E> {
        Ok(GrainConfig {
            enabled: self.enabled,
            intensity: self.intensity,
            scale: self.scale,
            speed: self.speed,
            contrast: self.contrast,
            color: f(&self.color)?,
            animated: self.animated,
        })
    }
}
