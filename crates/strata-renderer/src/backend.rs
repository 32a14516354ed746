//! GPU submission behind traits, so the render loop can run without a device.
//!
//! [`WgpuBackendFactory`] is the real implementation. It builds a
//! [`GpuContext`] and the terrain pipeline; when the pipeline fails on an
//! otherwise working device it hands back a gradient painter on the same
//! context instead.

use tracing::{info, warn};

use crate::fallback::{FallbackFrame, GradientPipeline};
use crate::gpu::{probe_adapter, GpuContext, PhysicalSize, RendererError, TerrainUniforms};
use crate::sphere::{SphereMesh, TerrainPipeline};

/// Draws terrain frames.
pub trait FrameBackend {
    fn resize(&mut self, size: PhysicalSize);

    /// Replace the mesh used by subsequent draws.
    fn rebuild_mesh(&mut self, mesh: &SphereMesh);

    /// Submit one indexed draw of the full sphere.
    fn draw(&mut self, uniforms: &TerrainUniforms) -> Result<(), RendererError>;
}

/// Paints the fallback gradient on a device that cannot run the terrain pass.
pub trait FallbackPainter {
    fn resize(&mut self, size: PhysicalSize);

    fn paint(&mut self, frame: &FallbackFrame) -> Result<(), RendererError>;
}

/// Why a backend could not be created, plus whatever can still paint.
pub struct InitFailure {
    pub error: RendererError,
    /// `None` when no device is available; the host paints instead.
    pub fallback: Option<Box<dyn FallbackPainter>>,
}

impl std::fmt::Debug for InitFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitFailure")
            .field("error", &self.error)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl From<RendererError> for InitFailure {
    fn from(error: RendererError) -> Self {
        Self {
            error,
            fallback: None,
        }
    }
}

/// Creates backends for a host surface.
pub trait BackendFactory {
    fn create(
        &self,
        target: Option<wgpu::SurfaceTarget<'static>>,
        size: PhysicalSize,
        mesh: &SphereMesh,
    ) -> Result<Box<dyn FrameBackend>, InitFailure>;

    /// Whether this factory could create a backend on this machine.
    fn probe(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WgpuBackendFactory;

impl BackendFactory for WgpuBackendFactory {
    fn create(
        &self,
        target: Option<wgpu::SurfaceTarget<'static>>,
        size: PhysicalSize,
        mesh: &SphereMesh,
    ) -> Result<Box<dyn FrameBackend>, InitFailure> {
        let target = target.ok_or_else(|| {
            RendererError::SurfaceError("host canvas has no GPU surface".into())
        })?;
        let context = pollster::block_on(GpuContext::new(target, size))?;

        match TerrainPipeline::new(&context.device, context.format(), mesh) {
            Ok(pipeline) => {
                info!(
                    vertices = mesh.vertex_count(),
                    triangles = mesh.triangle_count(),
                    "terrain pipeline ready"
                );
                Ok(Box::new(WgpuBackend { context, pipeline }))
            }
            Err(error) => {
                let fallback = match GradientPipeline::new(&context.device, context.format()) {
                    Ok(pipeline) => {
                        Some(Box::new(GradientPainter { context, pipeline }) as Box<dyn FallbackPainter>)
                    }
                    Err(e) => {
                        warn!("fallback gradient pipeline failed too: {e}");
                        None
                    }
                };
                Err(InitFailure { error, fallback })
            }
        }
    }

    fn probe(&self) -> bool {
        probe_adapter()
    }
}

struct WgpuBackend {
    context: GpuContext,
    pipeline: TerrainPipeline,
}

impl FrameBackend for WgpuBackend {
    fn resize(&mut self, size: PhysicalSize) {
        self.context.resize(size);
    }

    fn rebuild_mesh(&mut self, mesh: &SphereMesh) {
        self.pipeline.upload_mesh(&self.context.device, mesh);
    }

    fn draw(&mut self, uniforms: &TerrainUniforms) -> Result<(), RendererError> {
        let Some(frame) = self.context.acquire_frame()? else {
            return Ok(());
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline.update_uniforms(&self.context.queue, uniforms);
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("terrain frame encoder"),
            });
        self.pipeline.render(&mut encoder, &view);
        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

struct GradientPainter {
    context: GpuContext,
    pipeline: GradientPipeline,
}

impl FallbackPainter for GradientPainter {
    fn resize(&mut self, size: PhysicalSize) {
        self.context.resize(size);
    }

    fn paint(&mut self, frame: &FallbackFrame) -> Result<(), RendererError> {
        let Some(surface) = self.context.acquire_frame()? else {
            return Ok(());
        };
        let view = surface
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline
            .update_uniforms(&self.context.queue, &frame.uniforms());
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("fallback frame encoder"),
            });
        self.pipeline.render(&mut encoder, &view);
        self.context.queue.submit(std::iter::once(encoder.finish()));
        surface.present();
        Ok(())
    }
}
