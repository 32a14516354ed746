//! Sphere geometry configuration.

use serde::{Deserialize, Serialize};

/// UV-sphere tessellation parameters.
///
/// `segments` sweeps the azimuth, `rings` the polar angle. Both must be at
/// least 3 or the mesh degenerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub radius: f32,
    pub segments: u32,
    pub rings: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 128,
            rings: 96,
        }
    }
}
