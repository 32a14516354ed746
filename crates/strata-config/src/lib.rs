//! Strata renderer configuration.
//!
//! Provides the renderer config schema, built-in and YAML presets, section
//! overrides, color-token resolution, validation, TOML selection files and
//! live reload. All sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strata_config::{config_to_json, resolve, PaletteResolver, RendererSelection};
//!
//! let resolver = PaletteResolver::design_system();
//! let config = resolve(&RendererSelection::from("landing"), &resolver)
//!     .expect("landing preset resolves");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod presets;
pub mod reload;
pub mod resolve;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use colors::{ColorResolver, PaletteResolver};
pub use presets::{
    RendererSelection, SelectionFile, SpecOverrides, TerrainOverrides, BUILT_IN_PRESETS,
};
pub use reload::{ReloadManager, SharedResolver};
pub use resolve::{merge_resolved, resolve, resolve_spec};
pub use schema::{RendererConfig, TerrainConfig, TerrainSpec};
pub use watcher::ConfigWatcher;

use serde::Serialize;
use strata_common::ConfigError;

/// Load the selection from the platform default path and resolve it.
///
/// Creates a commented default file if none exists.
pub fn load_config(resolver: &dyn ColorResolver) -> Result<RendererConfig, ConfigError> {
    let selection = toml_loader::load_default()?;
    resolve(&selection, resolver)
}

/// Serialize a config (either form) to a pretty-printed JSON string.
pub fn config_to_json<C: Serialize>(config: &TerrainConfig<C>) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
