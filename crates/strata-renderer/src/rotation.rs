//! Sphere rotation state.
//!
//! Yaw advances with auto-rotate; pitch (and an extra yaw term) come from
//! pointer drag when enabled. The matrix is rebuilt from the angles each
//! frame as `rotate_y(yaw) × rotate_x(pitch)`, so it is always a pure
//! rotation.

use std::f32::consts::FRAC_PI_2;

use strata_config::schema::RotationConfig;

use crate::sphere::matrix::{self, Mat4, IDENTITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPhase {
    /// Rotation frozen.
    Idle,
    /// Auto-rotate advancing yaw each frame.
    Rotating,
}

#[derive(Debug, Clone)]
pub struct RotationController {
    yaw: f32,
    drag_yaw: f32,
    pitch: f32,
    phase: RotationPhase,
    matrix: Mat4,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationController {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            drag_yaw: 0.0,
            pitch: 0.0,
            phase: RotationPhase::Idle,
            matrix: IDENTITY,
        }
    }

    /// Advance by `dt` seconds and rebuild the matrix.
    pub fn advance(&mut self, config: &RotationConfig, dt: f32) {
        if config.auto_rotate {
            self.phase = RotationPhase::Rotating;
            self.yaw += config.auto_rotate_speed * dt;
        } else {
            self.phase = RotationPhase::Idle;
        }
        self.rebuild();
    }

    /// Apply a pointer drag of `(dx, dy)` logical pixels.
    ///
    /// Ignored unless `enable_drag` is set. Returns whether the drag applied.
    pub fn apply_drag(&mut self, config: &RotationConfig, dx: f32, dy: f32) -> bool {
        if !config.enable_drag {
            return false;
        }
        let k = config.drag_sensitivity;
        self.drag_yaw += dx * k;
        self.pitch = (self.pitch + dy * k).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let yaw = matrix::rotate_y(self.yaw + self.drag_yaw);
        let pitch = matrix::rotate_x(self.pitch);
        self.matrix = matrix::mul(&yaw, &pitch);
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// World → object rotation.
    pub fn inverse(&self) -> Mat4 {
        matrix::transpose(&self.matrix)
    }

    /// Accumulated auto-rotate yaw in radians. Never decreases while
    /// auto-rotate runs at a non-negative speed.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn drag_yaw(&self) -> f32 {
        self.drag_yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn phase(&self) -> RotationPhase {
        self.phase
    }
}
