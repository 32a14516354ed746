//! The terrain shading function, evaluated on the CPU.
//!
//! Each function here has a same-named counterpart in
//! `shaders/terrain.wgsl`. The renderer itself never calls them per frame;
//! they exist so the shading math can be tested and sampled (`strata
//! sample`) without a GPU.

use serde::Serialize;
use strata_common::{Rgb, Vec3};
use strata_config::schema::{
    ElevationConfig, GrainConfig, MaskConfig, NoiseConfig, PaletteConfig, RendererConfig,
};

use crate::noise::{fract, mix, multi_octave_noise, smoothstep};
use crate::sphere::matrix::{self, Mat4};

/// Fragments whose mask falls below this are discarded.
pub const MASK_DISCARD: f32 = 0.001;

/// Index of the elevation band `e` falls into (0..=3).
///
/// Comparisons are strict: `e == thresholds[k]` belongs to band `k + 1`.
pub fn band_index(e: f32, thresholds: &[f32; 3]) -> usize {
    if e < thresholds[0] {
        0
    } else if e < thresholds[1] {
        1
    } else if e < thresholds[2] {
        2
    } else {
        3
    }
}

/// Posterized band color for elevation `e`.
pub fn band_color(e: f32, palette: &PaletteConfig<Rgb>) -> Rgb {
    palette.colors[band_index(e, &palette.thresholds)]
}

/// Whether `e` lies strictly within `width` of any threshold.
pub fn on_contour(e: f32, thresholds: &[f32; 3], width: f32) -> bool {
    thresholds.iter().any(|t| (e - t).abs() < width)
}

/// Object-space drift of the sampling position. Exactly zero when disabled.
///
/// Evaluated in f64 so the drift stays smooth however long the loop runs.
pub fn elevation_offset(elevation: &ElevationConfig, time: f64) -> Vec3 {
    if !elevation.enabled {
        return [0.0; 3];
    }
    let t = time * elevation.speed as f64;
    let amplitude = elevation.amplitude as f64;
    [
        (amplitude * t.sin()) as f32,
        (amplitude * (t * 0.8 + 1.0).cos()) as f32,
        (amplitude * (t * 0.6 + 2.0).sin()) as f32,
    ]
}

/// Noise sampling position for a world-space surface point.
///
/// The point is carried back into the sphere's unrotated frame so terrain
/// turns rigidly with the mesh; the drift offset is added afterwards.
pub fn sampling_position(
    world: Vec3,
    inverse_rotation: &Mat4,
    frequency: f32,
    offset: Vec3,
) -> Vec3 {
    let object = matrix::transform_point(inverse_rotation, world);
    [
        object[0] * frequency + offset[0],
        object[1] * frequency + offset[1],
        object[2] * frequency + offset[2],
    ]
}

/// Elevation in `[0, 1]` at a sampling position.
pub fn elevation_at(noise_pos: Vec3, noise: &NoiseConfig) -> f32 {
    multi_octave_noise(
        noise_pos,
        noise.octaves,
        noise.frequency,
        noise.persistence,
    ) * 0.5
        + 0.5
}

fn normalize(v: Vec3) -> Vec3 {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        v.map(|c| c / len)
    } else {
        v
    }
}

/// Diffuse multiplier: `mix(1, max(n·l, 0), intensity)`.
pub fn diffuse_shade(normal: Vec3, light_direction: Vec3, intensity: f32) -> f32 {
    let n = normalize(normal);
    let l = normalize(light_direction);
    let lambert = (n[0] * l[0] + n[1] * l[1] + n[2] * l[2]).max(0.0);
    mix(1.0, lambert, intensity)
}

/// Screen-space hash, independent of the terrain hash.
pub fn grain_hash(p: [f32; 2]) -> f32 {
    fract((p[0] * 12.9898 + p[1] * 78.233).sin() * 43_758.547)
}

/// Grain frames cycle through this many patterns. Every frame is an
/// unrelated hash pattern, so the wrap is not visible.
pub const GRAIN_FRAME_WRAP: f64 = 4096.0;

/// Grain pattern index at `time`; 0 when grain is static.
pub fn grain_frame(grain: &GrainConfig<Rgb>, time: f64) -> f32 {
    if !grain.animated {
        return 0.0;
    }
    (time * grain.speed as f64).floor().rem_euclid(GRAIN_FRAME_WRAP) as f32
}

/// Signed grain value in `[-1, 1]` at a fragment coordinate.
pub fn grain_value(frag: [f32; 2], viewport: [f32; 2], grain: &GrainConfig<Rgb>, frame: f32) -> f32 {
    let uv = [frag[0] / viewport[0], frag[1] / viewport[1]];
    let mut cell = [(uv[0] * grain.scale).floor(), (uv[1] * grain.scale).floor()];
    if grain.animated {
        cell[0] += frame * 17.0;
        cell[1] += frame * 59.0;
    }
    grain_hash(cell).powf(grain.contrast) * 2.0 - 1.0
}

/// Circular viewport mask factor in `[0, 1]`; 1 everywhere when disabled.
///
/// Distance is measured from the viewport center in units of half the
/// shorter side.
pub fn mask_factor(frag: [f32; 2], viewport: [f32; 2], mask: &MaskConfig) -> f32 {
    if !mask.circular {
        return 1.0;
    }
    let half = 0.5 * viewport[0].min(viewport[1]);
    let dx = frag[0] - viewport[0] * 0.5;
    let dy = frag[1] - viewport[1] * 0.5;
    let dist = (dx * dx + dy * dy).sqrt() / half;
    let soft = mask.edge_softness.max(1e-5);
    1.0 - smoothstep(mask.viewport_radius, mask.viewport_radius + soft, dist)
}

/// Terrain evaluation at one surface point, before screen-space effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSample {
    pub elevation: f32,
    pub band: usize,
    pub contour: bool,
    pub color: Rgb,
}

/// Evaluate elevation, band, contour and lit color at a world-space point.
pub fn shade_surface(
    config: &RendererConfig,
    world: Vec3,
    world_normal: Vec3,
    inverse_rotation: &Mat4,
    time: f64,
) -> SurfaceSample {
    let offset = elevation_offset(&config.elevation, time);
    let noise_pos = sampling_position(world, inverse_rotation, config.noise.frequency, offset);
    let elevation = elevation_at(noise_pos, &config.noise);

    let band = band_index(elevation, &config.palette.thresholds);
    let mut color = config.palette.colors[band];

    let contour = config.contour.enabled
        && on_contour(elevation, &config.palette.thresholds, config.contour.width);
    if contour {
        color = color.lerp(config.contour.color, config.contour.intensity);
    }

    if config.shading.enabled {
        let shade = diffuse_shade(
            world_normal,
            config.shading.light_direction,
            config.shading.intensity,
        );
        color = Rgb::new(color.r * shade, color.g * shade, color.b * shade);
    }

    SurfaceSample {
        elevation,
        band,
        contour,
        color: clamp_color(color),
    }
}

/// Add signed grain to a color.
pub fn apply_grain(color: Rgb, grain: &GrainConfig<Rgb>, value: f32) -> Rgb {
    if !grain.enabled {
        return color;
    }
    let k = value * grain.intensity;
    Rgb::new(
        color.r + grain.color.r * k,
        color.g + grain.color.g * k,
        color.b + grain.color.b * k,
    )
}

pub fn clamp_color(c: Rgb) -> Rgb {
    Rgb::new(c.r.clamp(0.0, 1.0), c.g.clamp(0.0, 1.0), c.b.clamp(0.0, 1.0))
}
