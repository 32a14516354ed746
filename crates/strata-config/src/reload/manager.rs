//! Core reload manager implementation.

use crate::colors::ColorResolver;
use crate::presets::RendererSelection;
use crate::resolve::resolve;
use crate::toml_loader;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use std::sync::Arc;
use strata_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Shared color resolver handed to the background reload task.
pub type SharedResolver = Arc<dyn ColorResolver + Send + Sync>;

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes each selection that
/// loads, resolves and validates via a [`tokio::sync::watch`] channel.
/// Broken edits are logged and skipped; the last good selection stays current.
pub struct ReloadManager {
    config_path: PathBuf,
    resolver: SharedResolver,
}

impl ReloadManager {
    /// Load the initial selection from the given path and start watching for changes.
    ///
    /// Returns the initial selection and a receiver that observes every later
    /// good selection. A missing or invalid file yields the `default` preset.
    /// Must be called from within a tokio runtime.
    pub async fn start(
        config_path: PathBuf,
        resolver: SharedResolver,
    ) -> (RendererSelection, watch::Receiver<RendererSelection>) {
        let manager = ReloadManager {
            config_path,
            resolver,
        };

        let initial = match manager.reload_selection() {
            Ok(selection) => selection,
            Err(e) => {
                warn!("failed to load renderer config: {e}, using default preset");
                RendererSelection::default()
            }
        };

        let (selection_tx, selection_rx) = watch::channel(initial.clone());

        tokio::spawn(async move {
            manager.run_watch_loop(selection_tx).await;
        });

        (initial, selection_rx)
    }

    /// Internal watch loop that reloads the selection on file changes.
    async fn run_watch_loop(&self, selection_tx: watch::Sender<RendererSelection>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading renderer config from {}", self.config_path.display());
                    match self.reload_selection() {
                        Ok(selection) => {
                            if selection_tx.send(selection).is_err() {
                                info!("all selection receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("config reload failed: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Load the selection from disk and check that it resolves.
    fn reload_selection(&self) -> Result<RendererSelection, ConfigError> {
        let selection = toml_loader::load_from_path(&self.config_path)?;
        resolve(&selection, self.resolver.as_ref())?;
        Ok(selection)
    }
}
