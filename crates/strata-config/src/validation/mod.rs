//! Full configuration validation.
//!
//! Validates numeric ranges, threshold ordering and color channels. Each
//! domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod effects;
mod geometry;
mod helpers;
mod palette;
mod view;


use crate::schema::RendererConfig;
use strata_common::ConfigError;

/// Run all validations on a resolved config, collecting all errors.
pub fn validate(config: &RendererConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    geometry::validate_geometry(&mut errors, config);
    geometry::validate_noise(&mut errors, config);
    palette::validate_palette(&mut errors, config);
    effects::validate_contour(&mut errors, config);
    effects::validate_grain(&mut errors, config);
    view::validate_rotation(&mut errors, config);
    view::validate_elevation(&mut errors, config);
    view::validate_mask(&mut errors, config);
    view::validate_shading(&mut errors, config);
    view::validate_camera(&mut errors, config);
    view::validate_fallback(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
