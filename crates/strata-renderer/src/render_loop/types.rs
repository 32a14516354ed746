use crate::backend::{FallbackPainter, FrameBackend};

/// Lifecycle of a [`TerrainRenderer`](super::TerrainRenderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    /// Acquiring the surface and building pipelines.
    Initializing,
    Running,
    /// Terminal until the next `start()`, which re-initializes.
    Stopped,
}

/// What draws frames while running.
pub(super) enum Output {
    None,
    Terrain(Box<dyn FrameBackend>),
    /// A device-side gradient painter, or `None` to let the host paint.
    Fallback(Option<Box<dyn FallbackPainter>>),
}

impl Output {
    pub(super) fn is_fallback(&self) -> bool {
        matches!(self, Output::Fallback(_))
    }
}
