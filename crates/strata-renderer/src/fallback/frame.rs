use std::f32::consts::TAU;

use strata_common::Rgb;
use strata_config::schema::FallbackConfig;

use crate::gpu::PhysicalSize;

/// One frame of the fallback gradient.
///
/// The gradient runs from `colors[0]` to `colors[1]` along the direction
/// `angle`, measured in pixel space (y down). The angle completes one
/// revolution every `fallback.period` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackFrame {
    pub colors: [Rgb; 2],
    /// Radians in `0.0..TAU`.
    pub angle: f32,
    pub size: PhysicalSize,
}

impl FallbackFrame {
    pub fn at(config: &FallbackConfig<Rgb>, elapsed_secs: f64, size: PhysicalSize) -> Self {
        let angle = if config.period > 0.0 {
            let turns = elapsed_secs / config.period as f64;
            (turns.fract() as f32) * TAU
        } else {
            0.0
        };
        Self {
            colors: config.colors,
            angle,
            size,
        }
    }

    /// Unit gradient direction.
    pub fn direction(&self) -> [f32; 2] {
        [self.angle.cos(), self.angle.sin()]
    }

    /// Color at gradient parameter `t`, clamped to `0.0..=1.0`.
    pub fn color_at(&self, t: f32) -> Rgb {
        let [a, b] = self.colors;
        a.lerp(b, t.clamp(0.0, 1.0))
    }

    /// Color at a pixel position, matching the fallback shader.
    pub fn color_at_point(&self, x: f32, y: f32) -> Rgb {
        let w = (self.size.width as f32).max(1.0);
        let h = (self.size.height as f32).max(1.0);
        let [dx, dy] = self.direction();
        let t = 0.5 + (x / w - 0.5) * dx + (y / h - 0.5) * dy;
        self.color_at(t)
    }

    /// Fill a row-major `width * height` buffer of `0x00RRGGBB` pixels,
    /// sampling at pixel centers like the fallback shader.
    ///
    /// Buffers of any other length are left untouched.
    pub fn fill_pixels(&self, pixels: &mut [u32]) {
        let width = self.size.width as usize;
        if pixels.len() != width * self.size.height as usize || width == 0 {
            return;
        }
        for (y, row) in pixels.chunks_exact_mut(width).enumerate() {
            let py = y as f32 + 0.5;
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = pack_xrgb(self.color_at_point(x as f32 + 0.5, py));
            }
        }
    }

    pub fn uniforms(&self) -> GradientUniforms {
        let [a, b] = self.colors;
        let [dx, dy] = self.direction();
        GradientUniforms {
            color_a: [a.r, a.g, a.b, 1.0],
            color_b: [b.r, b.g, b.b, 1.0],
            params: [dx, dy, self.size.width as f32, self.size.height as f32],
        }
    }
}

/// Pack a color as `0x00RRGGBB`.
pub fn pack_xrgb(color: Rgb) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(color.r) << 16) | (channel(color.g) << 8) | channel(color.b)
}

/// GPU-side uniform buffer matching the WGSL `Gradient` struct (48 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GradientUniforms {
    pub color_a: [f32; 4],
    pub color_b: [f32; 4],
    /// cos(angle), sin(angle), width, height.
    pub params: [f32; 4],
}
