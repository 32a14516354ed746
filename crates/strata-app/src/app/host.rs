//! `HostCanvas` over a winit window.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, SoftBufferError, Surface};
use tracing::{info, warn};
use winit::window::Window;

use strata_renderer::{FallbackFrame, HostCanvas};

/// CPU presenter used when no GPU device exists for the window.
type SoftSurface = Surface<Arc<Window>, Arc<Window>>;

pub struct WindowHost {
    window: Arc<Window>,
    soft: Option<SoftSurface>,
    soft_failed: bool,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            soft: None,
            soft_failed: false,
        }
    }

    fn present_gradient(&mut self, frame: &FallbackFrame) -> Result<(), SoftBufferError> {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(frame.size.width),
            NonZeroU32::new(frame.size.height),
        ) else {
            return Ok(());
        };

        if self.soft.is_none() {
            let context = Context::new(Arc::clone(&self.window))?;
            let surface = Surface::new(&context, Arc::clone(&self.window))?;
            info!(
                width = width.get(),
                height = height.get(),
                "no GPU device; painting fallback gradient on the CPU"
            );
            self.window.set_title("Strata (no GPU)");
            self.soft = Some(surface);
        }
        let Some(surface) = self.soft.as_mut() else {
            return Ok(());
        };

        surface.resize(width, height)?;
        let mut buffer = surface.buffer_mut()?;
        frame.fill_pixels(&mut buffer);
        buffer.present()
    }
}

impl HostCanvas for WindowHost {
    fn logical_size(&self) -> (f64, f64) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (size.width, size.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.scale_factor()
    }

    fn request_frame(&mut self) {
        self.window.request_redraw();
    }

    fn surface_target(&mut self) -> Option<wgpu::SurfaceTarget<'static>> {
        Some(Arc::clone(&self.window).into())
    }

    fn paint_fallback(&mut self, frame: &FallbackFrame) {
        if self.soft_failed {
            return;
        }
        if let Err(e) = self.present_gradient(frame) {
            self.soft_failed = true;
            self.soft = None;
            warn!("fallback gradient could not be presented: {e}");
        }
    }
}
