//! Contour and grain validation.

use crate::schema::RendererConfig;

use super::helpers::{validate_color, validate_finite, validate_positive, validate_range_f32};

pub(crate) fn validate_contour(errors: &mut Vec<String>, config: &RendererConfig) {
    let contour = &config.contour;
    validate_range_f32(errors, "contour.width", contour.width, 0.0, 0.5);
    validate_range_f32(errors, "contour.intensity", contour.intensity, 0.0, 1.0);
    validate_color(errors, "contour.color", &contour.color);
}

pub(crate) fn validate_grain(errors: &mut Vec<String>, config: &RendererConfig) {
    let grain = &config.grain;
    validate_range_f32(errors, "grain.intensity", grain.intensity, 0.0, 1.0);
    validate_positive(errors, "grain.scale", grain.scale);
    validate_finite(errors, "grain.speed", grain.speed);
    validate_positive(errors, "grain.contrast", grain.contrast);
    validate_color(errors, "grain.color", &grain.color);
}
