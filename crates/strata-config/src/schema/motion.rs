//! Rotation and elevation animation configuration.

use serde::{Deserialize, Serialize};

/// Sphere rotation and pointer interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub auto_rotate: bool,
    /// Yaw speed in radians per second.
    pub auto_rotate_speed: f32,
    pub enable_drag: bool,
    /// Radians of rotation per logical pixel dragged.
    pub drag_sensitivity: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 0.08,
            enable_drag: false,
            drag_sensitivity: 0.005,
        }
    }
}

/// Time-varying offset of the noise sampling position ("terrain breathing").
///
/// Independent of rotation: when disabled the offset is exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationConfig {
    pub enabled: bool,
    pub speed: f32,
    pub amplitude: f32,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            speed: 0.12,
            amplitude: 0.25,
        }
    }
}
