//! Elevation band validation.

use crate::schema::RendererConfig;

use super::helpers::{validate_color, validate_range_f32};

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &RendererConfig) {
    let palette = &config.palette;

    for (i, color) in palette.colors.iter().enumerate() {
        validate_color(errors, &format!("palette.colors[{i}]"), color);
    }

    for (i, t) in palette.thresholds.iter().enumerate() {
        validate_range_f32(errors, &format!("palette.thresholds[{i}]"), *t, 0.0, 1.0);
    }

    for (i, pair) in palette.thresholds.windows(2).enumerate() {
        if pair[0] >= pair[1] {
            errors.push(format!(
                "palette.thresholds must be strictly ascending: thresholds[{}] = {} >= thresholds[{}] = {}",
                i,
                pair[0],
                i + 1,
                pair[1]
            ));
        }
    }
}
