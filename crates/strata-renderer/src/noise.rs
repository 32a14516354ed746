//! Value noise, evaluated on the CPU.
//!
//! Mirrors `hash3`, `noise3` and `multi_octave_noise` in
//! `shaders/terrain.wgsl` operation for operation, so CPU samples agree with
//! what the GPU draws up to float rounding. Everything here is a pure
//! function of its inputs.

use strata_common::Vec3;

/// Hard cap on octave iterations; the shader loop is unrolled to this bound.
pub const MAX_OCTAVES: u32 = 8;

pub(crate) fn fract(x: f32) -> f32 {
    x - x.floor()
}

pub(crate) fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

pub(crate) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Spatial hash of a lattice point into `[0, 1)`.
pub fn hash3(p: Vec3) -> f32 {
    let q = p.map(|c| fract(c * 0.318_309_9 + 0.1) * 17.0);
    fract(q[0] * q[1] * q[2] * (q[0] + q[1] + q[2]))
}

/// Trilinear value noise in `[0, 1]` with smoothstep-weighted blending.
pub fn noise3(p: Vec3) -> f32 {
    let i = p.map(f32::floor);
    let f = [p[0] - i[0], p[1] - i[1], p[2] - i[2]];
    let u = f.map(|t| t * t * (3.0 - 2.0 * t));

    let corner = |dx: f32, dy: f32, dz: f32| hash3([i[0] + dx, i[1] + dy, i[2] + dz]);

    let x00 = mix(corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), u[0]);
    let x10 = mix(corner(0.0, 1.0, 0.0), corner(1.0, 1.0, 0.0), u[0]);
    let x01 = mix(corner(0.0, 0.0, 1.0), corner(1.0, 0.0, 1.0), u[0]);
    let x11 = mix(corner(0.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), u[0]);

    let y0 = mix(x00, x10, u[1]);
    let y1 = mix(x01, x11, u[1]);
    mix(y0, y1, u[2])
}

/// Fractal sum of [`noise3`] in `[-1, 1]`.
///
/// Starts at `frequency` and doubles it each octave while the amplitude is
/// multiplied by `persistence`. The sum is normalized by the total
/// amplitude, contrast-shaped with a smoothstep and remapped from `[0, 1]`.
/// Fractional octave counts round up; at most [`MAX_OCTAVES`] are summed.
pub fn multi_octave_noise(p: Vec3, octaves: f32, frequency: f32, persistence: f32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut max_amplitude = 0.0;
    let mut freq = frequency;

    for i in 0..MAX_OCTAVES {
        if i as f32 >= octaves {
            break;
        }
        value += noise3(p.map(|c| c * freq)) * amplitude;
        max_amplitude += amplitude;
        amplitude *= persistence;
        freq *= 2.0;
    }

    let normalized = if max_amplitude > 0.0 {
        value / max_amplitude
    } else {
        0.0
    };
    smoothstep(0.0, 1.0, normalized) * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_in_unit_interval() {
        for x in -20..20 {
            for y in -5..5 {
                let h = hash3([x as f32, y as f32 * 1.5, (x * y) as f32 * 0.25]);
                assert!((0.0..=1.0).contains(&h), "hash {h} out of range");
            }
        }
    }

    #[test]
    fn noise_matches_hash_at_lattice_points() {
        for p in [[0.0, 0.0, 0.0], [3.0, -2.0, 7.0], [-4.0, 5.0, 1.0]] {
            assert!((noise3(p) - hash3(p)).abs() < 1e-6);
        }
    }

    #[test]
    fn noise_is_in_unit_interval() {
        for i in 0..500 {
            let t = i as f32 * 0.137;
            let n = noise3([t, t * 0.7 - 3.0, 5.0 - t * 1.3]);
            assert!((0.0..=1.0).contains(&n), "noise {n} out of range");
        }
    }

    #[test]
    fn noise_is_continuous() {
        let p = [1.234, -0.5, 2.75];
        let q = [1.234 + 1e-4, -0.5, 2.75];
        assert!((noise3(p) - noise3(q)).abs() < 1e-2);
    }

    #[test]
    fn multi_octave_is_deterministic() {
        let p = [0.3, -1.7, 2.2];
        let a = multi_octave_noise(p, 5.0, 1.2, 0.5);
        let b = multi_octave_noise(p, 5.0, 1.2, 0.5);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn multi_octave_is_in_signed_unit_interval() {
        for i in 0..300 {
            let t = i as f32 * 0.071;
            let n = multi_octave_noise([t.sin(), t.cos(), t * 0.1], 6.0, 1.5, 0.55);
            assert!((-1.0..=1.0).contains(&n), "fbm {n} out of range");
        }
    }

    #[test]
    fn single_octave_is_shaped_noise() {
        let p = [0.4, 0.9, -0.2];
        let expected = smoothstep(0.0, 1.0, noise3(p.map(|c| c * 2.0))) * 2.0 - 1.0;
        assert!((multi_octave_noise(p, 1.0, 2.0, 0.5) - expected).abs() < 1e-6);
    }

    #[test]
    fn octaves_above_cap_are_clamped() {
        let p = [0.11, 0.22, 0.33];
        assert_eq!(
            multi_octave_noise(p, 8.0, 1.0, 0.5).to_bits(),
            multi_octave_noise(p, 12.0, 1.0, 0.5).to_bits()
        );
    }

    #[test]
    fn zero_octaves_bottoms_out() {
        assert_eq!(multi_octave_noise([1.0, 2.0, 3.0], 0.0, 1.0, 0.5), -1.0);
    }

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }
}
