//! The render loop: lifecycle, per-frame ticks, resize and config swaps.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use strata_common::ConfigError;
use strata_config::{
    merge_resolved, resolve, RendererConfig, RendererSelection, SharedResolver, SpecOverrides,
};

use super::types::{LoopState, Output};
use crate::backend::{BackendFactory, InitFailure, WgpuBackendFactory};
use crate::clock::FrameClock;
use crate::fallback::FallbackFrame;
use crate::gpu::{PhysicalSize, TerrainUniforms};
use crate::host::{backing_size, HostCanvas};
use crate::rotation::RotationController;
use crate::sphere::{build_sphere_from_config, SphereMesh};

/// Frames between periodic frame-rate log lines.
const FPS_LOG_INTERVAL: u64 = 600;

/// Renders the terrain sphere into a host canvas.
///
/// The host owns scheduling. [`start`](Self::start) requests the first
/// frame, and every [`tick`](Self::tick) draws one frame and requests the
/// next. Initialization failures never escape: the renderer switches to the
/// fallback gradient and keeps ticking.
pub struct TerrainRenderer<H: HostCanvas> {
    host: H,
    factory: Box<dyn BackendFactory>,
    resolver: SharedResolver,
    config: Arc<RendererConfig>,
    mesh: SphereMesh,
    mesh_dirty: bool,
    size: PhysicalSize,
    state: LoopState,
    output: Output,
    rotation: RotationController,
    clock: Option<FrameClock>,
    frame_pending: bool,
    frames: u64,
}

impl<H: HostCanvas> TerrainRenderer<H> {
    /// Resolve `selection` and prepare a renderer drawing with wgpu.
    ///
    /// Fails on an unknown preset, an unresolvable color, or a config that
    /// does not validate. No GPU work happens until [`start`](Self::start).
    pub fn new(
        host: H,
        selection: &RendererSelection,
        resolver: SharedResolver,
    ) -> Result<Self, ConfigError> {
        Self::with_factory(host, selection, resolver, Box::new(WgpuBackendFactory))
    }

    pub fn with_factory(
        host: H,
        selection: &RendererSelection,
        resolver: SharedResolver,
        factory: Box<dyn BackendFactory>,
    ) -> Result<Self, ConfigError> {
        let config = resolve(selection, &*resolver)?;
        let mesh = mesh_for(&config)?;
        let size = backing_size(host.logical_size(), host.device_pixel_ratio());

        Ok(Self {
            host,
            factory,
            resolver,
            config: Arc::new(config),
            mesh,
            mesh_dirty: false,
            size,
            state: LoopState::Uninitialized,
            output: Output::None,
            rotation: RotationController::new(),
            clock: None,
            frame_pending: false,
            frames: 0,
        })
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Start the loop with `now` as time zero. A running loop is left as is.
    pub fn start_at(&mut self, now: Instant) {
        if self.state == LoopState::Running {
            return;
        }

        self.state = LoopState::Initializing;
        self.initialize();
        self.rotation = RotationController::new();
        self.clock = Some(FrameClock::new(now));
        self.frames = 0;
        self.state = LoopState::Running;
        info!(
            width = self.size.width,
            height = self.size.height,
            fallback = self.output.is_fallback(),
            "terrain renderer started"
        );

        self.schedule();
    }

    fn initialize(&mut self) {
        let size = backing_size(self.host.logical_size(), self.host.device_pixel_ratio());
        if !size.is_empty() {
            self.size = size;
        }

        let target = self.host.surface_target();
        self.output = match self.factory.create(target, self.size, &self.mesh) {
            Ok(backend) => Output::Terrain(backend),
            Err(InitFailure { error, fallback }) => {
                warn!(
                    device_painter = fallback.is_some(),
                    "terrain rendering unavailable, painting fallback: {error}"
                );
                Output::Fallback(fallback)
            }
        };
        self.mesh_dirty = false;
    }

    /// Stop the loop and release the backend. Idempotent.
    pub fn stop(&mut self) {
        if !matches!(self.state, LoopState::Running | LoopState::Initializing) {
            return;
        }
        if self.frame_pending {
            self.host.cancel_frame();
            self.frame_pending = false;
        }
        self.output = Output::None;
        self.clock = None;
        self.state = LoopState::Stopped;
        info!(frames = self.frames, "terrain renderer stopped");
    }

    fn schedule(&mut self) {
        self.frame_pending = true;
        self.host.request_frame();
    }

    // =========================================================================
    // FRAMES
    // =========================================================================

    /// Host per-frame callback. Draws one frame and requests the next.
    ///
    /// Returns `false` without doing anything unless the loop is running and
    /// a frame was requested.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != LoopState::Running || !self.frame_pending {
            return false;
        }
        self.frame_pending = false;

        let Some(clock) = self.clock.as_mut() else {
            return false;
        };
        let dt = clock.tick(now);
        let elapsed = clock.elapsed();
        let config = Arc::clone(&self.config);

        self.rotation.advance(&config.rotation, dt);

        if !self.size.is_empty() {
            self.present(&config, elapsed);
        }

        self.frames += 1;
        if self.frames == 1 {
            info!("first terrain frame presented");
        } else if self.frames % FPS_LOG_INTERVAL == 0 {
            if let Some(clock) = &self.clock {
                debug!(
                    fps = clock.fps(),
                    frame_ms = clock.frame_time_ms(),
                    "frame rate"
                );
            }
        }

        self.schedule();
        true
    }

    fn present(&mut self, config: &RendererConfig, elapsed: f64) {
        match &mut self.output {
            Output::Terrain(backend) => {
                if self.mesh_dirty {
                    backend.rebuild_mesh(&self.mesh);
                    self.mesh_dirty = false;
                }
                let uniforms =
                    TerrainUniforms::new(config, self.rotation.matrix(), self.size, elapsed);
                if let Err(e) = backend.draw(&uniforms) {
                    error!("terrain draw failed: {e}");
                }
            }
            Output::Fallback(Some(painter)) => {
                let frame = FallbackFrame::at(&config.fallback, elapsed, self.size);
                if let Err(e) = painter.paint(&frame) {
                    error!("fallback paint failed: {e}");
                }
            }
            Output::Fallback(None) => {
                let frame = FallbackFrame::at(&config.fallback, elapsed, self.size);
                self.host.paint_fallback(&frame);
            }
            Output::None => {}
        }
    }

    /// Re-read the host size. Zero-area sizes are ignored. Safe at any time.
    pub fn resize(&mut self) {
        let size = backing_size(self.host.logical_size(), self.host.device_pixel_ratio());
        if size.is_empty() {
            debug!(width = size.width, height = size.height, "ignoring zero-area resize");
            return;
        }
        if size == self.size {
            return;
        }

        self.size = size;
        match &mut self.output {
            Output::Terrain(backend) => backend.resize(size),
            Output::Fallback(Some(painter)) => painter.resize(size),
            Output::Fallback(None) | Output::None => {}
        }
        debug!(width = size.width, height = size.height, "resized");
    }

    /// Forward a pointer drag in logical pixels. Returns whether it applied.
    pub fn pointer_drag(&mut self, dx: f32, dy: f32) -> bool {
        self.rotation.apply_drag(&self.config.rotation, dx, dy)
    }

    // =========================================================================
    // CONFIG
    // =========================================================================

    /// Merge section overrides into the current config.
    ///
    /// The new config is seen whole by the next frame. On error the current
    /// config is kept.
    pub fn update_config(
        &mut self,
        overrides: &SpecOverrides,
    ) -> Result<Arc<RendererConfig>, ConfigError> {
        let config = merge_resolved(&self.config, overrides, &*self.resolver)?;
        self.install(config)
    }

    /// Replace the config with a freshly resolved selection.
    pub fn reconfigure(
        &mut self,
        selection: &RendererSelection,
    ) -> Result<Arc<RendererConfig>, ConfigError> {
        let config = resolve(selection, &*self.resolver)?;
        self.install(config)
    }

    fn install(&mut self, config: RendererConfig) -> Result<Arc<RendererConfig>, ConfigError> {
        if config.geometry_differs(&*self.config) {
            self.mesh = mesh_for(&config)?;
            self.mesh_dirty = true;
            info!(
                segments = config.geometry.segments,
                rings = config.geometry.rings,
                radius = config.geometry.radius,
                "sphere mesh rebuilt"
            );
        }
        self.config = Arc::new(config);
        info!("renderer config updated");
        Ok(Arc::clone(&self.config))
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Whether this machine can run the terrain pass at all.
    pub fn is_supported(&self) -> bool {
        self.factory.probe()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> &Arc<RendererConfig> {
        &self.config
    }

    /// Backing buffer size in physical pixels.
    pub fn size(&self) -> PhysicalSize {
        self.size
    }

    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    /// True when frames go to the fallback gradient.
    pub fn is_fallback(&self) -> bool {
        self.output.is_fallback()
    }

    /// Frames drawn since the last `start()`.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Seconds since the last `start()`, as of the latest tick.
    pub fn elapsed(&self) -> f64 {
        self.clock.as_ref().map_or(0.0, FrameClock::elapsed)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: HostCanvas> Drop for TerrainRenderer<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn mesh_for(config: &RendererConfig) -> Result<SphereMesh, ConfigError> {
    build_sphere_from_config(&config.geometry)
        .map_err(|e| ConfigError::ValidationError(e.to_string()))
}
