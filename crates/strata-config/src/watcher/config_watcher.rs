//! Debounced file watcher.
//!
//! [`ConfigWatcher`] monitors a single renderer config file through its
//! parent directory, so editors that save by write-and-rename are seen.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use strata_common::ConfigError;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Quiet period that must elapse after the last event before a change is reported.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Watch the file, sending `()` on `tx` once per burst of changes.
    ///
    /// Runs until the underlying notify channel closes. Bursts are coalesced
    /// with a [`DEBOUNCE`] window.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let path = self.path.clone();
        let watch_path = if let Some(parent) = path.parent() {
            parent.to_path_buf()
        } else {
            path.clone()
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("watching {} for changes", path.display());

        let (notify_tx, mut notify_rx) = tokio::sync::mpsc::channel::<()>(16);

        // Dropping the watcher stops event delivery; it lives for the whole loop.
        let _watcher = {
            let mut watcher = RecommendedWatcher::new(
                move |result: Result<Event, notify::Error>| {
                    match result {
                        Ok(event) => {
                            let relevant =
                                matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_));
                            if !relevant {
                                return;
                            }

                            let is_our_file = event
                                .paths
                                .iter()
                                .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));

                            if is_our_file {
                                debug!(kind = ?event.kind, "renderer config event");
                                let _ = notify_tx.try_send(());
                            }
                        }
                        Err(e) => {
                            error!("file watcher error: {e}");
                        }
                    }
                },
                notify::Config::default(),
            )
            .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

            watcher
                .watch(&watch_path, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    ConfigError::WatchError(format!(
                        "failed to watch {}: {e}",
                        watch_path.display()
                    ))
                })?;

            watcher
        };

        while notify_rx.recv().await.is_some() {
            // Coalesce until the file has been quiet for a full window.
            loop {
                match tokio::time::timeout(DEBOUNCE, notify_rx.recv()).await {
                    Err(_) => break,
                    Ok(Some(())) => continue,
                    Ok(None) => return Ok(()),
                }
            }

            info!("renderer config changed on disk");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        Ok(())
    }
}
