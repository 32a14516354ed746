//! Preset loading and merging.
//!
//! Presets are complete token-form configs selected by name. `default` and
//! `landing` are built in; any other name is looked up as a YAML file of
//! section overrides applied over `default`.

mod apply;
mod builtin;
mod loader;
mod types;

pub use apply::{apply_overrides, merged};
pub use builtin::{built_in, default_preset, landing_preset};
pub use loader::{load_overrides_from_path, load_preset, load_preset_from_path};
pub use types::{
    RendererSelection, ResolvedOverrides, SelectionFile, SpecOverrides, TerrainOverrides,
    BUILT_IN_PRESETS, DEFAULT_PRESET,
};
