//! Windowed renderer: winit event loop, window host and live reload.

mod core;
mod event_handler;
mod host;
mod reload;

use std::sync::Arc;

use tracing::info;
use winit::event_loop::EventLoop;

use strata_common::StrataError;
use strata_config::{toml_loader, ReloadManager};

use crate::cli::Args;
use crate::commands::{apply_preset_flag, resolver};

pub use self::core::StrataApp;

/// Open the window and render until it is closed.
pub fn run(args: &Args) -> Result<(), StrataError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => {
            let path = toml_loader::default_config_path()?;
            if !path.exists() {
                toml_loader::create_default_config(&path)?;
            }
            path
        }
    };
    info!("watching renderer config at {}", config_path.display());

    let resolver = resolver();
    let (initial, reload_rx) =
        runtime.block_on(ReloadManager::start(config_path, Arc::clone(&resolver)));
    let selection = apply_preset_flag(initial, args.preset.as_deref());

    let event_loop = EventLoop::new()
        .map_err(|e| StrataError::Other(format!("failed to create event loop: {e}")))?;
    let mut app = StrataApp::new(selection, args.preset.clone(), resolver, reload_rx);

    info!("entering event loop");
    let result = event_loop
        .run_app(&mut app)
        .map_err(|e| StrataError::Other(format!("event loop error: {e}")));

    runtime.shutdown_background();
    info!("shutdown complete");
    result?;
    app.into_result()
}
