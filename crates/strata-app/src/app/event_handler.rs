//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowId};

use strata_common::StrataError;
use strata_renderer::TerrainRenderer;

use super::core::StrataApp;
use super::host::WindowHost;

impl ApplicationHandler for StrataApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize_window(event_loop) {
            error!("failed to start renderer: {e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                if let Some(renderer) = &mut self.renderer {
                    renderer.stop();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize();
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.drag.pressed = state == ElementState::Pressed;
                if !self.drag.pressed {
                    self.drag.last = None;
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if !self.drag.pressed {
                    return;
                }
                if let (Some(last), Some(renderer), Some(window)) =
                    (self.drag.last, &mut self.renderer, &self.window)
                {
                    let scale = window.scale_factor();
                    let dx = ((position.x - last.x) / scale) as f32;
                    let dy = ((position.y - last.y) / scale) as f32;
                    renderer.pointer_drag(dx, dy);
                }
                self.drag.last = Some(position);
            }

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.tick(Instant::now());
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.poll_reload();
    }
}

impl StrataApp {
    /// Create the window and start the renderer on it.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StrataError> {
        let attrs = WindowAttributes::default()
            .with_title("Strata")
            .with_inner_size(winit::dpi::LogicalSize::new(960.0, 720.0));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| StrataError::Other(format!("failed to create window: {e}")))?;

        let host = WindowHost::new(Arc::clone(&window));
        let mut renderer =
            TerrainRenderer::new(host, &self.selection, Arc::clone(&self.resolver))?;
        renderer.start();

        info!(
            preset = self.selection.preset_name(),
            fallback = renderer.is_fallback(),
            "window created and renderer started"
        );
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }
}
