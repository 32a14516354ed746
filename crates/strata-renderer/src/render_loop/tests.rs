use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use strata_common::ConfigError;
use strata_config::schema::{ContourConfig, GeometryConfig, PaletteConfig, RotationConfig};
use strata_config::{PaletteResolver, RendererSelection, SharedResolver, SpecOverrides};

use super::*;
use crate::backend::{BackendFactory, FallbackPainter, FrameBackend, InitFailure};
use crate::fallback::FallbackFrame;
use crate::gpu::{PhysicalSize, RendererError, TerrainUniforms};
use crate::host::HostCanvas;
use crate::sphere::SphereMesh;

// =============================================================================
// TEST DOUBLES
// =============================================================================

struct TestHost {
    logical: (f64, f64),
    dpr: f64,
    requests: usize,
    cancels: usize,
    painted: Vec<FallbackFrame>,
}

impl TestHost {
    fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            logical: (width, height),
            dpr,
            requests: 0,
            cancels: 0,
            painted: Vec::new(),
        }
    }
}

impl HostCanvas for TestHost {
    fn logical_size(&self) -> (f64, f64) {
        self.logical
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn request_frame(&mut self) {
        self.requests += 1;
    }

    fn cancel_frame(&mut self) {
        self.cancels += 1;
    }

    fn surface_target(&mut self) -> Option<wgpu::SurfaceTarget<'static>> {
        None
    }

    fn paint_fallback(&mut self, frame: &FallbackFrame) {
        self.painted.push(*frame);
    }
}

#[derive(Default)]
struct BackendLog {
    created: Vec<PhysicalSize>,
    resizes: Vec<PhysicalSize>,
    rebuilds: Vec<(u32, u32)>,
    draws: Vec<TerrainUniforms>,
    paints: Vec<FallbackFrame>,
}

type SharedLog = Rc<RefCell<BackendLog>>;

struct RecordingBackend(SharedLog);

impl FrameBackend for RecordingBackend {
    fn resize(&mut self, size: PhysicalSize) {
        self.0.borrow_mut().resizes.push(size);
    }

    fn rebuild_mesh(&mut self, mesh: &SphereMesh) {
        self.0.borrow_mut().rebuilds.push((mesh.segments, mesh.rings));
    }

    fn draw(&mut self, uniforms: &TerrainUniforms) -> Result<(), RendererError> {
        self.0.borrow_mut().draws.push(*uniforms);
        Ok(())
    }
}

struct RecordingPainter(SharedLog);

impl FallbackPainter for RecordingPainter {
    fn resize(&mut self, size: PhysicalSize) {
        self.0.borrow_mut().resizes.push(size);
    }

    fn paint(&mut self, frame: &FallbackFrame) -> Result<(), RendererError> {
        self.0.borrow_mut().paints.push(*frame);
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Gpu,
    NoDevice,
    ShaderFailure,
}

struct TestFactory {
    mode: Mode,
    log: SharedLog,
}

impl BackendFactory for TestFactory {
    fn create(
        &self,
        _target: Option<wgpu::SurfaceTarget<'static>>,
        size: PhysicalSize,
        _mesh: &SphereMesh,
    ) -> Result<Box<dyn FrameBackend>, InitFailure> {
        self.log.borrow_mut().created.push(size);
        match self.mode {
            Mode::Gpu => Ok(Box::new(RecordingBackend(Rc::clone(&self.log)))),
            Mode::NoDevice => Err(InitFailure::from(RendererError::AdapterNotFound)),
            Mode::ShaderFailure => Err(InitFailure {
                error: RendererError::ShaderError("terrain: link failed".into()),
                fallback: Some(Box::new(RecordingPainter(Rc::clone(&self.log)))),
            }),
        }
    }

    fn probe(&self) -> bool {
        self.mode == Mode::Gpu
    }
}

fn resolver() -> SharedResolver {
    Arc::new(PaletteResolver::design_system())
}

fn renderer_with(mode: Mode, host: TestHost) -> (TerrainRenderer<TestHost>, SharedLog) {
    let log = SharedLog::default();
    let factory = TestFactory {
        mode,
        log: Rc::clone(&log),
    };
    let renderer = TerrainRenderer::with_factory(
        host,
        &RendererSelection::default(),
        resolver(),
        Box::new(factory),
    )
    .unwrap();
    (renderer, log)
}

fn renderer(mode: Mode) -> (TerrainRenderer<TestHost>, SharedLog) {
    renderer_with(mode, TestHost::new(400.0, 300.0, 2.0))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn new_renderer_is_uninitialized() {
    let (r, log) = renderer(Mode::Gpu);
    assert_eq!(r.state(), LoopState::Uninitialized);
    assert_eq!(r.size(), PhysicalSize::new(800, 600));
    assert_eq!(r.frame_count(), 0);
    assert_eq!(r.host().requests, 0);
    assert!(log.borrow().created.is_empty());
}

#[test]
fn unknown_preset_fails_construction() {
    let result = TerrainRenderer::with_factory(
        TestHost::new(100.0, 100.0, 1.0),
        &RendererSelection::from("sunset"),
        resolver(),
        Box::new(TestFactory {
            mode: Mode::Gpu,
            log: SharedLog::default(),
        }),
    );
    assert!(matches!(result, Err(ConfigError::UnknownPreset(ref name)) if name == "sunset"));
}

#[test]
fn start_creates_backend_and_requests_a_frame() {
    let (mut r, log) = renderer(Mode::Gpu);
    r.start_at(Instant::now());
    assert_eq!(r.state(), LoopState::Running);
    assert!(!r.is_fallback());
    assert_eq!(r.host().requests, 1);
    assert_eq!(log.borrow().created, vec![PhysicalSize::new(800, 600)]);
}

#[test]
fn start_while_running_is_noop() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    r.start_at(t0 + ms(50));
    assert_eq!(r.host().requests, 1);
    assert_eq!(log.borrow().created.len(), 1);
}

#[test]
fn tick_before_start_does_nothing() {
    let (mut r, log) = renderer(Mode::Gpu);
    assert!(!r.tick(Instant::now()));
    assert_eq!(r.frame_count(), 0);
    assert!(log.borrow().draws.is_empty());
}

#[test]
fn tick_draws_once_and_reschedules() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    assert!(r.tick(t0 + ms(16)));
    assert_eq!(log.borrow().draws.len(), 1);
    assert_eq!(r.frame_count(), 1);
    assert_eq!(r.host().requests, 2);
}

#[test]
fn stop_is_idempotent() {
    let (mut r, _log) = renderer(Mode::Gpu);
    r.start_at(Instant::now());
    r.stop();
    r.stop();
    assert_eq!(r.state(), LoopState::Stopped);
    assert_eq!(r.host().cancels, 1);
}

#[test]
fn tick_after_stop_does_nothing() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    r.stop();
    assert!(!r.tick(t0 + ms(16)));
    assert!(log.borrow().draws.is_empty());
}

#[test]
fn stop_before_start_is_noop() {
    let (mut r, _log) = renderer(Mode::Gpu);
    r.stop();
    assert_eq!(r.state(), LoopState::Uninitialized);
    assert_eq!(r.host().cancels, 0);
}

#[test]
fn start_after_stop_reinitializes() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    r.tick(t0 + ms(16));
    r.stop();
    r.start_at(t0 + ms(100));
    assert_eq!(r.state(), LoopState::Running);
    assert_eq!(r.frame_count(), 0);
    assert_eq!(r.elapsed(), 0.0);
    assert_eq!(log.borrow().created.len(), 2);
}

// =============================================================================
// FALLBACK
// =============================================================================

#[test]
fn missing_device_paints_through_host() {
    let (mut r, log) = renderer(Mode::NoDevice);
    let t0 = Instant::now();
    r.start_at(t0);
    assert_eq!(r.state(), LoopState::Running);
    assert!(r.is_fallback());

    assert!(r.tick(t0 + ms(16)));
    assert!(r.tick(t0 + ms(32)));
    assert_eq!(r.host().painted.len(), 2);
    assert_eq!(r.host().painted[0].size, PhysicalSize::new(800, 600));
    assert!(log.borrow().draws.is_empty());
}

#[test]
fn shader_failure_paints_on_device() {
    let (mut r, log) = renderer(Mode::ShaderFailure);
    let t0 = Instant::now();
    r.start_at(t0);
    assert!(r.is_fallback());

    r.tick(t0 + ms(16));
    assert_eq!(log.borrow().paints.len(), 1);
    assert!(r.host().painted.is_empty());
}

#[test]
fn fallback_gradient_uses_config_colors() {
    let (mut r, _log) = renderer(Mode::NoDevice);
    let t0 = Instant::now();
    r.start_at(t0);
    r.tick(t0 + ms(16));
    let frame = r.host().painted[0];
    assert_eq!(frame.colors, r.config().fallback.colors);
}

#[test]
fn is_supported_asks_the_factory() {
    assert!(renderer(Mode::Gpu).0.is_supported());
    assert!(!renderer(Mode::NoDevice).0.is_supported());
}

// =============================================================================
// RESIZE
// =============================================================================

#[test]
fn resize_applies_capped_pixel_ratio() {
    let (mut r, log) = renderer(Mode::Gpu);
    r.start_at(Instant::now());
    r.host_mut().logical = (500.0, 250.0);
    r.host_mut().dpr = 3.0;
    r.resize();
    assert_eq!(r.size(), PhysicalSize::new(1000, 500));
    assert_eq!(log.borrow().resizes, vec![PhysicalSize::new(1000, 500)]);
}

#[test]
fn zero_area_resize_is_noop() {
    let (mut r, log) = renderer(Mode::Gpu);
    r.start_at(Instant::now());
    r.host_mut().logical = (0.0, 300.0);
    r.resize();
    assert_eq!(r.size(), PhysicalSize::new(800, 600));
    assert!(log.borrow().resizes.is_empty());
}

#[test]
fn resize_before_start_is_safe() {
    let (mut r, log) = renderer(Mode::Gpu);
    r.host_mut().logical = (320.0, 200.0);
    r.resize();
    assert_eq!(r.size(), PhysicalSize::new(640, 400));
    assert!(log.borrow().resizes.is_empty());

    r.start_at(Instant::now());
    assert_eq!(log.borrow().created, vec![PhysicalSize::new(640, 400)]);
}

#[test]
fn fallback_painter_is_resized() {
    let (mut r, log) = renderer(Mode::ShaderFailure);
    r.start_at(Instant::now());
    r.host_mut().dpr = 1.0;
    r.resize();
    assert_eq!(log.borrow().resizes, vec![PhysicalSize::new(400, 300)]);
}

#[test]
fn zero_sized_host_ticks_without_drawing() {
    let (mut r, log) = renderer_with(Mode::Gpu, TestHost::new(0.0, 0.0, 1.0));
    let t0 = Instant::now();
    r.start_at(t0);
    assert!(r.tick(t0 + ms(16)));
    assert!(log.borrow().draws.is_empty());
    assert_eq!(r.host().requests, 2);
}

// =============================================================================
// CONFIG UPDATES
// =============================================================================

fn geometry(segments: u32, rings: u32) -> SpecOverrides {
    SpecOverrides {
        geometry: Some(GeometryConfig {
            segments,
            rings,
            ..GeometryConfig::default()
        }),
        ..SpecOverrides::default()
    }
}

#[test]
fn geometry_change_rebuilds_mesh_before_next_draw() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);

    r.update_config(&geometry(32, 16)).unwrap();
    assert_eq!(r.mesh().segments, 32);
    assert!(log.borrow().rebuilds.is_empty());

    r.tick(t0 + ms(16));
    r.tick(t0 + ms(32));
    let log = log.borrow();
    assert_eq!(log.rebuilds, vec![(32, 16)]);
    assert_eq!(log.draws.len(), 2);
}

#[test]
fn non_geometry_change_keeps_mesh() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);

    let overrides = SpecOverrides {
        contour: Some(ContourConfig {
            width: 0.02,
            ..ContourConfig::default()
        }),
        ..SpecOverrides::default()
    };
    r.update_config(&overrides).unwrap();
    r.tick(t0 + ms(16));

    let log = log.borrow();
    assert!(log.rebuilds.is_empty());
    assert!((log.draws[0].thresholds[3] - 0.02).abs() < 1e-6);
}

#[test]
fn invalid_update_keeps_current_config() {
    let (mut r, _log) = renderer(Mode::Gpu);
    let before = Arc::clone(r.config());

    let overrides = SpecOverrides {
        palette: Some(PaletteConfig {
            thresholds: [0.6, 0.5, 0.7],
            ..PaletteConfig::default()
        }),
        ..SpecOverrides::default()
    };
    let err = r.update_config(&overrides).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("ascending")));
    assert!(Arc::ptr_eq(&before, r.config()));
}

#[test]
fn degenerate_geometry_update_is_rejected() {
    let (mut r, _log) = renderer(Mode::Gpu);
    let segments = r.mesh().segments;
    assert!(r.update_config(&geometry(2, 16)).is_err());
    assert_eq!(r.mesh().segments, segments);
}

#[test]
fn unresolved_color_update_is_rejected() {
    let (mut r, _log) = renderer(Mode::Gpu);
    let before = Arc::clone(r.config());
    let overrides = SpecOverrides {
        contour: Some(ContourConfig {
            color: "terrain.lava".into(),
            ..ContourConfig::default()
        }),
        ..SpecOverrides::default()
    };
    assert!(matches!(
        r.update_config(&overrides),
        Err(ConfigError::UnresolvedColor { .. })
    ));
    assert!(Arc::ptr_eq(&before, r.config()));
}

#[test]
fn reconfigure_switches_preset() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    assert!(!r.config().mask.circular);

    let config = r.reconfigure(&RendererSelection::from("landing")).unwrap();
    assert!(config.mask.circular);
    assert!(!config.elevation.enabled);

    r.tick(t0 + ms(16));
    assert!(log.borrow().rebuilds.is_empty());
}

// =============================================================================
// FRAME CONTENT
// =============================================================================

#[test]
fn uniforms_follow_clock_and_rotation() {
    let (mut r, log) = renderer(Mode::Gpu);
    let t0 = Instant::now();
    r.start_at(t0);
    for i in 1..=10 {
        r.tick(t0 + ms(100 * i));
    }

    let speed = r.config().rotation.auto_rotate_speed;
    assert!((r.elapsed() - 1.0).abs() < 1e-6);
    assert!((r.rotation().yaw() - speed).abs() < 1e-4);

    let log = log.borrow();
    let last = log.draws.last().unwrap();
    let drift = crate::terrain::elevation_offset(&r.config().elevation, 1.0);
    for (got, want) in last.elevation_drift().iter().zip(drift) {
        assert!((got - want).abs() < 1e-5);
    }
    assert_eq!(&last.rotation, r.rotation().matrix());
}

#[test]
fn pointer_drag_ignored_by_default() {
    let (mut r, _log) = renderer(Mode::Gpu);
    assert!(!r.pointer_drag(40.0, 10.0));
    assert_eq!(r.rotation().pitch(), 0.0);
}

#[test]
fn pointer_drag_applies_when_enabled() {
    let (mut r, _log) = renderer(Mode::Gpu);
    let overrides = SpecOverrides {
        rotation: Some(RotationConfig {
            enable_drag: true,
            ..RotationConfig::default()
        }),
        ..SpecOverrides::default()
    };
    r.update_config(&overrides).unwrap();
    assert!(r.pointer_drag(0.0, 10.0));
    assert!(r.rotation().pitch() > 0.0);
}
