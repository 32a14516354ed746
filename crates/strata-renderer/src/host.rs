//! The host surface the renderer draws into.

use crate::fallback::FallbackFrame;
use crate::gpu::PhysicalSize;

/// Device pixel ratios above this are clamped when sizing the backing buffer.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// A canvas-like drawing surface owned by the embedding application.
///
/// The host drives the loop: after [`request_frame`](Self::request_frame) it
/// calls [`TerrainRenderer::tick`](crate::TerrainRenderer::tick) once on its
/// next display refresh.
pub trait HostCanvas {
    /// Size in logical (CSS-like) pixels.
    fn logical_size(&self) -> (f64, f64);

    fn device_pixel_ratio(&self) -> f64;

    /// Schedule one tick on the next display refresh.
    fn request_frame(&mut self);

    /// Drop a tick scheduled by `request_frame`, if the host can.
    fn cancel_frame(&mut self) {}

    /// A wgpu surface target for this canvas, or `None` when the host has
    /// no GPU-capable surface.
    fn surface_target(&mut self) -> Option<wgpu::SurfaceTarget<'static>>;

    /// Paint the fallback gradient without a GPU device.
    fn paint_fallback(&mut self, frame: &FallbackFrame);
}

/// Backing buffer size: logical size × `min(dpr, 2)`, rounded.
///
/// A non-finite or non-positive ratio counts as 1.
pub fn backing_size(logical: (f64, f64), device_pixel_ratio: f64) -> PhysicalSize {
    let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let scale = |v: f64| {
        if v.is_finite() && v > 0.0 {
            (v * ratio).round() as u32
        } else {
            0
        }
    };
    PhysicalSize::new(scale(logical.0), scale(logical.1))
}
