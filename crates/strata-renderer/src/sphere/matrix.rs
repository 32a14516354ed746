//! 4×4 matrix math for the camera and rotation transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`.

use strata_common::Vec3;

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection into wgpu clip space (depth 0..1).
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transpose. For a pure rotation this is also the inverse.
pub fn transpose(m: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[row * 4 + col] = m[col * 4 + row];
        }
    }
    out
}

/// Determinant of the upper-left 3×3 block.
pub fn determinant3(m: &Mat4) -> f32 {
    let (a, b, c) = (m[0], m[4], m[8]);
    let (d, e, f) = (m[1], m[5], m[9]);
    let (g, h, i) = (m[2], m[6], m[10]);
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// Column `index` (0..3) of the upper-left 3×3 block.
pub fn basis(m: &Mat4, index: usize) -> Vec3 {
    let o = index * 4;
    [m[o], m[o + 1], m[o + 2]]
}

/// Transform a point (w = 1), dropping the resulting w.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    [
        m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12],
        m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13],
        m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14],
    ]
}

/// Transform a direction (w = 0).
pub fn transform_vector(m: &Mat4, v: Vec3) -> Vec3 {
    [
        m[0] * v[0] + m[4] * v[1] + m[8] * v[2],
        m[1] * v[0] + m[5] * v[1] + m[9] * v[2],
        m[2] * v[0] + m[6] * v[1] + m[10] * v[2],
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_then_identity() {
        let t = translate(1.0, 2.0, 3.0);
        let result = mul(&t, &IDENTITY);
        assert!(approx_eq(&result, &t, 1e-6));
    }

    #[test]
    fn rotate_x_90_degrees() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        // Y axis maps to Z axis
        let y = transform_vector(&r, [0.0, 1.0, 0.0]);
        assert!(y[0].abs() < 1e-6);
        assert!(y[1].abs() < 1e-5);
        assert!((y[2] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_y_90_degrees() {
        let r = rotate_y(std::f32::consts::FRAC_PI_2);
        // X axis maps to -Z, Z axis maps to X
        let x = transform_vector(&r, [1.0, 0.0, 0.0]);
        assert!((x[2] - (-1.0)).abs() < 1e-5);
        let z = transform_vector(&r, [0.0, 0.0, 1.0]);
        assert!((z[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn transpose_of_rotation_is_inverse() {
        let r = mul(&rotate_y(0.7), &rotate_x(-0.3));
        let product = mul(&r, &transpose(&r));
        assert!(approx_eq(&product, &IDENTITY, 1e-5));
    }

    #[test]
    fn transpose_is_involution() {
        let m = translate(1.0, 2.0, 3.0);
        assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn rotation_determinant_is_one() {
        let r = mul(&rotate_y(2.1), &rotate_x(0.4));
        assert!((determinant3(&r) - 1.0).abs() < 1e-5);
        assert!((determinant3(&IDENTITY) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transform_point_applies_translation() {
        let t = translate(1.0, -2.0, 0.5);
        assert_eq!(transform_point(&t, [1.0, 1.0, 1.0]), [2.0, -1.0, 1.5]);
        assert_eq!(transform_vector(&t, [1.0, 1.0, 1.0]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn perspective_maps_clip_planes_to_unit_depth() {
        let p = perspective(1.0, 1.0, 0.5, 50.0);
        let depth = |z: f32| {
            let clip_z = p[10] * z + p[14];
            let clip_w = p[11] * z;
            clip_z / clip_w
        };
        assert!(depth(-0.5).abs() < 1e-5);
        assert!((depth(-50.0) - 1.0).abs() < 1e-4);
    }
}
