//! Shared range-validation helpers used by all domain validators.

use strata_common::Rgb;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f32(
    errors: &mut Vec<String>,
    name: &str,
    value: f32,
    min: f32,
    max: f32,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is finite and strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be positive"));
    }
}

/// Push an error unless `value` is finite and at least zero.
pub(crate) fn validate_non_negative(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("{name} = {value} must not be negative"));
    }
}

/// Push an error unless `value` is finite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() {
        errors.push(format!("{name} = {value} must be finite"));
    }
}

/// Push an error unless every channel of `color` is in `[0, 1]`.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, color: &Rgb) {
    if !color.is_normalized() {
        errors.push(format!(
            "{name} = ({}, {}, {}) has a channel outside [0, 1]",
            color.r, color.g, color.b
        ));
    }
}
