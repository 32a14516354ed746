//! GPU uniform block for the terrain pass.
//!
//! `TerrainUniforms` is rebuilt from the current config, rotation and clock
//! every frame and uploaded before the draw call. Elapsed time never reaches
//! the GPU: the time-driven terms (elevation drift, grain frame) are
//! evaluated here in f64 and uploaded as results.

use strata_common::Rgb;
use strata_config::schema::{RendererConfig, CAMERA_FAR, CAMERA_NEAR};

use super::types::PhysicalSize;
use crate::sphere::matrix::{self, Mat4};
use crate::terrain::{elevation_offset, grain_frame};

/// GPU-side uniform buffer matching the WGSL `Uniforms` struct.
///
/// Layout: 3 × mat4 + 4 × vec4 colors + 10 × vec4 params = 416 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainUniforms {
    /// Projection × view (camera) matrix.
    pub view_proj: Mat4,
    /// Object → world rotation for this frame.
    pub rotation: Mat4,
    /// World → object; the transpose of `rotation`.
    pub inverse_rotation: Mat4,
    /// Band colors, rgb + unused w.
    pub colors: [[f32; 4]; 4],
    /// t1, t2, t3, contour width.
    pub thresholds: [f32; 4],
    /// Contour rgb, contour intensity.
    pub contour_color: [f32; 4],
    /// Grain rgb, grain intensity.
    pub grain_color: [f32; 4],
    /// Grain scale, speed, contrast, animated (0/1).
    pub grain_params: [f32; 4],
    /// Octaves, frequency, persistence, seed.
    pub noise_params: [f32; 4],
    /// Light direction xyz, shading intensity.
    pub light_dir: [f32; 4],
    /// Elevation drift xyz for this frame, enabled (0/1).
    pub elevation: [f32; 4],
    /// Circular (0/1), radius, softness, unused.
    pub mask: [f32; 4],
    /// Width, height, aspect, grain frame.
    pub viewport: [f32; 4],
    /// Contour, grain, shading enabled (0/1), unused.
    pub flags: [f32; 4],
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

fn rgba(c: Rgb, w: f32) -> [f32; 4] {
    [c.r, c.g, c.b, w]
}

/// Camera matrix for a sphere at the origin viewed from `+Z`.
pub fn view_projection(config: &RendererConfig, size: PhysicalSize) -> Mat4 {
    let proj = matrix::perspective(config.camera.fov_y, size.aspect(), CAMERA_NEAR, CAMERA_FAR);
    let view = matrix::translate(0.0, 0.0, -config.camera.distance);
    matrix::mul(&proj, &view)
}

impl TerrainUniforms {
    /// Build the uniform block for one frame.
    pub fn new(
        config: &RendererConfig,
        rotation: &Mat4,
        size: PhysicalSize,
        elapsed_secs: f64,
    ) -> Self {
        let palette = &config.palette;
        let [t1, t2, t3] = palette.thresholds;
        let [x, y, z] = config.shading.light_direction;
        let [ox, oy, oz] = elevation_offset(&config.elevation, elapsed_secs);

        Self {
            view_proj: view_projection(config, size),
            rotation: *rotation,
            inverse_rotation: matrix::transpose(rotation),
            colors: palette.colors.map(|c| rgba(c, 1.0)),
            thresholds: [t1, t2, t3, config.contour.width],
            contour_color: rgba(config.contour.color, config.contour.intensity),
            grain_color: rgba(config.grain.color, config.grain.intensity),
            grain_params: [
                config.grain.scale,
                config.grain.speed,
                config.grain.contrast,
                flag(config.grain.animated),
            ],
            noise_params: [
                config.noise.octaves,
                config.noise.frequency,
                config.noise.persistence,
                config.noise.seed,
            ],
            light_dir: [x, y, z, config.shading.intensity],
            elevation: [ox, oy, oz, flag(config.elevation.enabled)],
            mask: [
                flag(config.mask.circular),
                config.mask.viewport_radius,
                config.mask.edge_softness,
                0.0,
            ],
            viewport: [
                size.width as f32,
                size.height as f32,
                size.aspect(),
                grain_frame(&config.grain, elapsed_secs),
            ],
            flags: [
                flag(config.contour.enabled),
                flag(config.grain.enabled),
                flag(config.shading.enabled),
                0.0,
            ],
        }
    }

    pub fn elevation_drift(&self) -> [f32; 3] {
        [self.elevation[0], self.elevation[1], self.elevation[2]]
    }

    pub fn grain_frame(&self) -> f32 {
        self.viewport[3]
    }
}
