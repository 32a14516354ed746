use std::sync::Arc;

use tokio::sync::watch;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use strata_common::StrataError;
use strata_config::{RendererSelection, SharedResolver};
use strata_renderer::TerrainRenderer;

use super::host::WindowHost;

/// Pointer drag in progress.
#[derive(Debug, Default)]
pub(super) struct DragState {
    pub pressed: bool,
    pub last: Option<PhysicalPosition<f64>>,
}

pub struct StrataApp {
    pub(super) selection: RendererSelection,
    /// `--preset`, re-applied to every reloaded selection.
    pub(super) preset_override: Option<String>,
    pub(super) resolver: SharedResolver,
    pub(super) reload_rx: watch::Receiver<RendererSelection>,
    pub(super) window: Option<Arc<Window>>,
    pub(super) renderer: Option<TerrainRenderer<WindowHost>>,
    pub(super) drag: DragState,
    pub(super) error: Option<StrataError>,
}

impl StrataApp {
    pub fn new(
        selection: RendererSelection,
        preset_override: Option<String>,
        resolver: SharedResolver,
        reload_rx: watch::Receiver<RendererSelection>,
    ) -> Self {
        Self {
            selection,
            preset_override,
            resolver,
            reload_rx,
            window: None,
            renderer: None,
            drag: DragState::default(),
            error: None,
        }
    }

    /// The error that ended the event loop, if any.
    pub fn into_result(mut self) -> Result<(), StrataError> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
