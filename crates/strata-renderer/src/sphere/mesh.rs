//! Sphere mesh generation.
//!
//! Generates an indexed UV sphere with position, normal, and UV per vertex.
//! Each ring of `segments + 1` vertices duplicates the seam column so UVs
//! run cleanly from 0 to 1.

use strata_config::schema::GeometryConfig;

use super::types::{SphereMesh, SphereVertex};
use crate::gpu::RendererError;

/// Fewest segments or rings a rendered sphere may use.
pub const MIN_DIVISIONS: u32 = 3;

/// Build an indexed UV sphere.
///
/// Vertices sweep `ring ∈ [0, rings]` (polar angle from the +Y pole) and
/// `segment ∈ [0, segments]` (azimuth), giving `(segments+1)*(rings+1)`
/// vertices and `6*segments*rings` indices. Any non-zero counts build;
/// rendering callers go through [`build_sphere_from_config`], which enforces
/// [`MIN_DIVISIONS`].
pub fn build_sphere(radius: f32, segments: u32, rings: u32) -> Result<SphereMesh, RendererError> {
    if segments == 0 || rings == 0 {
        return Err(RendererError::InvalidGeometry(format!(
            "segments = {segments}, rings = {rings}: both must be non-zero"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(RendererError::InvalidGeometry(format!(
            "radius = {radius} must be positive"
        )));
    }

    let stride = segments + 1;
    let mut vertices = Vec::with_capacity((stride * (rings + 1)) as usize);

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let phi = v * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let theta = u * std::f32::consts::TAU;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let normal = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(SphereVertex {
                position: normal.map(|c| c * radius),
                normal,
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity((6 * segments * rings) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let first = ring * stride + segment;
            let second = first + stride;

            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    Ok(SphereMesh {
        radius,
        segments,
        rings,
        vertices,
        indices,
    })
}

/// Build the sphere described by a geometry config section.
///
/// Below [`MIN_DIVISIONS`] the mesh degenerates into zero-area triangles, so
/// such sections are rejected rather than clamped.
pub fn build_sphere_from_config(geometry: &GeometryConfig) -> Result<SphereMesh, RendererError> {
    let (segments, rings) = (geometry.segments, geometry.rings);
    if segments < MIN_DIVISIONS || rings < MIN_DIVISIONS {
        return Err(RendererError::InvalidGeometry(format!(
            "segments = {segments}, rings = {rings}: both must be at least {MIN_DIVISIONS}"
        )));
    }
    build_sphere(geometry.radius, segments, rings)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn small_sphere_counts() {
        let mesh = build_sphere(1.0, 4, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 5 * 4);
        assert_eq!(mesh.index_count(), 6 * 4 * 3);
        assert_eq!(mesh.triangle_count(), 2 * 4 * 3);
    }

    #[test]
    fn counts_follow_formula() {
        for (segments, rings) in [(3, 3), (8, 5), (32, 16), (128, 96)] {
            let mesh = build_sphere(2.0, segments, rings).unwrap();
            assert_eq!(
                mesh.vertex_count(),
                ((segments + 1) * (rings + 1)) as usize
            );
            assert_eq!(mesh.index_count(), (6 * segments * rings) as usize);
        }
    }

    #[test]
    fn four_by_two_sphere_counts() {
        let mesh = build_sphere(1.0, 4, 2).unwrap();
        assert_eq!(mesh.vertex_count(), 15);
        assert_eq!(mesh.index_count(), 48);
        assert_eq!(mesh.triangle_count(), 16);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn empty_or_unsized_geometry_is_rejected() {
        assert!(matches!(
            build_sphere(1.0, 0, 8),
            Err(RendererError::InvalidGeometry(_))
        ));
        assert!(matches!(
            build_sphere(1.0, 8, 0),
            Err(RendererError::InvalidGeometry(_))
        ));
        assert!(matches!(
            build_sphere(0.0, 8, 8),
            Err(RendererError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn config_below_minimum_divisions_is_rejected() {
        for (segments, rings) in [(2, 8), (8, 2), (4, 2)] {
            let geometry = GeometryConfig {
                radius: 1.0,
                segments,
                rings,
            };
            assert!(matches!(
                build_sphere_from_config(&geometry),
                Err(RendererError::InvalidGeometry(_))
            ));
        }
    }

    #[test]
    fn first_vertex_is_north_pole() {
        let mesh = build_sphere(1.0, 8, 4).unwrap();
        let v = &mesh.vertices[0];
        assert!(v.position[0].abs() < 1e-6);
        assert!((v.position[1] - 1.0).abs() < 1e-6);
        assert!(v.position[2].abs() < 1e-6);
    }

    #[test]
    fn last_vertex_is_south_pole() {
        let mesh = build_sphere(1.0, 8, 4).unwrap();
        let v = mesh.vertices.last().unwrap();
        assert!(v.position[0].abs() < 1e-5);
        assert!((v.position[1] + 1.0).abs() < 1e-5);
        assert!(v.position[2].abs() < 1e-5);
    }

    #[test]
    fn positions_scale_with_radius_and_normals_are_unit() {
        let mesh = build_sphere(2.5, 12, 6).unwrap();
        for v in &mesh.vertices {
            let n = v.normal;
            assert!((dot(n, n).sqrt() - 1.0).abs() < 1e-5);
            for axis in 0..3 {
                assert!((v.position[axis] - n[axis] * 2.5).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn uvs_span_unit_square() {
        let mesh = build_sphere(1.0, 6, 4).unwrap();
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices.last().unwrap().uv, [1.0, 1.0]);
        for v in &mesh.vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn indices_are_in_bounds() {
        let mesh = build_sphere(1.0, 16, 8).unwrap();
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn equator_triangles_wind_clockwise_from_outside() {
        // The pipeline treats clockwise as front-facing.
        let mesh = build_sphere(1.0, 16, 8).unwrap();
        let ring = 4u32;
        let cell = (ring * 16) as usize * 6;
        let tri = &mesh.indices[cell..cell + 3];
        let [a, b, c] = [0, 1, 2].map(|k| mesh.vertices[tri[k] as usize].position);
        let normal = cross(sub(b, a), sub(c, a));
        let centroid = [
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
            (a[2] + b[2] + c[2]) / 3.0,
        ];
        assert!(dot(normal, centroid) < 0.0);
    }

    #[test]
    fn from_config_uses_geometry_section() {
        let geometry = GeometryConfig {
            radius: 1.5,
            segments: 10,
            rings: 5,
        };
        let mesh = build_sphere_from_config(&geometry).unwrap();
        assert_eq!(mesh.vertex_count(), 66);
        assert!((mesh.radius - 1.5).abs() < f32::EPSILON);
    }
}
