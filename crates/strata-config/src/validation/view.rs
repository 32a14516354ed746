//! Motion, mask, shading, camera and fallback validation.

use crate::schema::{RendererConfig, CAMERA_FAR, CAMERA_NEAR};

use super::helpers::{
    validate_color, validate_finite, validate_non_negative, validate_positive, validate_range_f32,
};

pub(crate) fn validate_rotation(errors: &mut Vec<String>, config: &RendererConfig) {
    let rotation = &config.rotation;
    // Negative speeds would break monotonic auto-yaw.
    validate_non_negative(
        errors,
        "rotation.auto_rotate_speed",
        rotation.auto_rotate_speed,
    );
    validate_non_negative(
        errors,
        "rotation.drag_sensitivity",
        rotation.drag_sensitivity,
    );
}

pub(crate) fn validate_elevation(errors: &mut Vec<String>, config: &RendererConfig) {
    let elevation = &config.elevation;
    validate_finite(errors, "elevation.speed", elevation.speed);
    validate_non_negative(errors, "elevation.amplitude", elevation.amplitude);
}

pub(crate) fn validate_mask(errors: &mut Vec<String>, config: &RendererConfig) {
    let mask = &config.mask;
    validate_positive(errors, "mask.viewport_radius", mask.viewport_radius);
    validate_non_negative(errors, "mask.edge_softness", mask.edge_softness);
}

pub(crate) fn validate_shading(errors: &mut Vec<String>, config: &RendererConfig) {
    let shading = &config.shading;
    validate_range_f32(errors, "shading.intensity", shading.intensity, 0.0, 1.0);

    let [x, y, z] = shading.light_direction;
    let len_sq = x * x + y * y + z * z;
    if !len_sq.is_finite() || len_sq <= f32::EPSILON {
        errors.push(format!(
            "shading.light_direction = [{x}, {y}, {z}] must be a non-zero finite vector"
        ));
    }
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &RendererConfig) {
    let camera = &config.camera;
    if !camera.fov_y.is_finite() || camera.fov_y <= 0.0 || camera.fov_y >= std::f32::consts::PI {
        errors.push(format!("camera.fov_y = {} must be in (0, pi)", camera.fov_y));
    }
    let radius = config.geometry.radius;
    if !camera.distance.is_finite() || camera.distance - radius <= CAMERA_NEAR {
        errors.push(format!(
            "camera.distance = {} must exceed geometry.radius = {radius} by more than the near plane ({CAMERA_NEAR})",
            camera.distance
        ));
    } else if camera.distance + radius >= CAMERA_FAR {
        errors.push(format!(
            "camera.distance = {} plus geometry.radius = {radius} must stay inside the far plane ({CAMERA_FAR})",
            camera.distance
        ));
    }
}

pub(crate) fn validate_fallback(errors: &mut Vec<String>, config: &RendererConfig) {
    let fallback = &config.fallback;
    for (i, color) in fallback.colors.iter().enumerate() {
        validate_color(errors, &format!("fallback.colors[{i}]"), color);
    }
    validate_positive(errors, "fallback.period", fallback.period);
}
