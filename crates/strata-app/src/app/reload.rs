//! Applies reloaded selections to the running renderer.

use tracing::{info, warn};

use crate::commands::apply_preset_flag;

use super::core::StrataApp;

impl StrataApp {
    /// Take the latest selection from the reload channel, if it changed.
    pub(super) fn poll_reload(&mut self) {
        if !matches!(self.reload_rx.has_changed(), Ok(true)) {
            return;
        }
        let selection = self.reload_rx.borrow_and_update().clone();
        let selection = apply_preset_flag(selection, self.preset_override.as_deref());

        if let Some(renderer) = &mut self.renderer {
            match renderer.reconfigure(&selection) {
                Ok(_) => info!(preset = selection.preset_name(), "applied reloaded config"),
                Err(e) => {
                    warn!("reloaded config rejected, keeping current: {e}");
                    return;
                }
            }
        }
        self.selection = selection;
    }
}
