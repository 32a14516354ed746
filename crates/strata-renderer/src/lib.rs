//! Procedural terrain sphere renderer.
//!
//! A value-noise elevation field is painted onto a rotating UV sphere as four
//! color bands with contour lines, diffuse shading, film grain and an
//! optional circular mask. [`TerrainRenderer`] owns the loop; the embedding
//! application supplies a [`HostCanvas`] and calls `tick` once per display
//! refresh. When no GPU is usable the renderer paints an animated gradient
//! instead.

pub mod backend;
pub mod clock;
pub mod fallback;
pub mod gpu;
pub mod host;
pub mod noise;
pub mod render_loop;
pub mod rotation;
pub mod sphere;
pub mod terrain;

pub use backend::{BackendFactory, FallbackPainter, FrameBackend, InitFailure, WgpuBackendFactory};
pub use clock::FrameClock;
pub use fallback::FallbackFrame;
pub use gpu::{GpuContext, PhysicalSize, RendererError, TerrainUniforms};
pub use host::HostCanvas;
pub use render_loop::{LoopState, TerrainRenderer};
pub use rotation::{RotationController, RotationPhase};
pub use sphere::{build_sphere, SphereMesh};
pub use terrain::{shade_surface, SurfaceSample};

/// Whether this machine has any wgpu adapter the terrain pass could use.
pub fn is_supported() -> bool {
    WgpuBackendFactory.probe()
}
