//! Sphere geometry and noise validation.

use crate::schema::RendererConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f32};

/// Upper bound on tessellation in either direction.
const MAX_TESSELLATION: u32 = 1024;

pub(crate) fn validate_geometry(errors: &mut Vec<String>, config: &RendererConfig) {
    let geometry = &config.geometry;
    validate_positive(errors, "geometry.radius", geometry.radius);
    validate_range(
        errors,
        "geometry.segments",
        geometry.segments,
        3,
        MAX_TESSELLATION,
    );
    validate_range(errors, "geometry.rings", geometry.rings, 3, MAX_TESSELLATION);
}

pub(crate) fn validate_noise(errors: &mut Vec<String>, config: &RendererConfig) {
    let noise = &config.noise;
    validate_range_f32(errors, "noise.octaves", noise.octaves, 1.0, 8.0);
    validate_positive(errors, "noise.frequency", noise.frequency);

    if !noise.persistence.is_finite() || noise.persistence <= 0.0 || noise.persistence >= 1.0 {
        errors.push(format!(
            "noise.persistence = {} must be in (0, 1)",
            noise.persistence
        ));
    }
    if !noise.seed.is_finite() {
        errors.push(format!("noise.seed = {} must be finite", noise.seed));
    }
}
