//! Fallback visual for hosts where the terrain pass cannot run.
//!
//! The gradient is described by a [`FallbackFrame`]. A device that failed
//! only the terrain pipeline paints it with [`GradientPipeline`]; without
//! any device the frame is handed to the host to paint.

mod frame;
mod pipeline;

pub use frame::*;
pub use pipeline::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::PhysicalSize;
    use std::f32::consts::{FRAC_PI_2, PI};
    use strata_common::Rgb;
    use strata_config::schema::FallbackConfig;

    fn config() -> FallbackConfig<Rgb> {
        FallbackConfig {
            colors: [Rgb::BLACK, Rgb::WHITE],
            period: 8.0,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn angle_starts_at_zero() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(100, 100));
        assert!(close(frame.angle, 0.0));
    }

    #[test]
    fn angle_advances_with_period() {
        let size = PhysicalSize::new(100, 100);
        assert!(close(FallbackFrame::at(&config(), 2.0, size).angle, FRAC_PI_2));
        assert!(close(FallbackFrame::at(&config(), 4.0, size).angle, PI));
    }

    #[test]
    fn angle_wraps_each_period() {
        let size = PhysicalSize::new(100, 100);
        let a = FallbackFrame::at(&config(), 2.0, size).angle;
        let b = FallbackFrame::at(&config(), 2.0 + 8.0 * 3.0, size).angle;
        assert!(close(a, b));
    }

    #[test]
    fn non_positive_period_holds_still() {
        let mut cfg = config();
        cfg.period = 0.0;
        let frame = FallbackFrame::at(&cfg, 123.0, PhysicalSize::new(10, 10));
        assert_eq!(frame.angle, 0.0);
    }

    #[test]
    fn color_at_clamps_and_interpolates() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(10, 10));
        assert_eq!(frame.color_at(-1.0), Rgb::BLACK);
        assert_eq!(frame.color_at(2.0), Rgb::WHITE);
        let mid = frame.color_at(0.5);
        assert!(close(mid.r, 0.5) && close(mid.g, 0.5) && close(mid.b, 0.5));
    }

    #[test]
    fn horizontal_gradient_at_zero_angle() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(200, 100));
        assert!(close(frame.color_at_point(0.0, 50.0).r, 0.0));
        assert!(close(frame.color_at_point(100.0, 50.0).r, 0.5));
        assert!(close(frame.color_at_point(200.0, 50.0).r, 1.0));
    }

    #[test]
    fn vertical_gradient_at_quarter_turn() {
        let frame = FallbackFrame::at(&config(), 2.0, PhysicalSize::new(200, 100));
        assert!(close(frame.color_at_point(100.0, 0.0).r, 0.0));
        assert!(close(frame.color_at_point(100.0, 100.0).r, 1.0));
    }

    #[test]
    fn pack_xrgb_orders_channels() {
        assert_eq!(pack_xrgb(Rgb::BLACK), 0x0000_0000);
        assert_eq!(pack_xrgb(Rgb::WHITE), 0x00ff_ffff);
        assert_eq!(pack_xrgb(Rgb::from_bytes(0x12, 0x34, 0x56)), 0x0012_3456);
    }

    #[test]
    fn fill_pixels_paints_horizontal_gradient() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(4, 2));
        let mut pixels = vec![0xdead_beef; 8];
        frame.fill_pixels(&mut pixels);

        let red = |p: u32| (p >> 16) & 0xff;
        for row in pixels.chunks_exact(4) {
            assert_eq!(row, &pixels[..4]);
            assert!(red(row[0]) < red(row[1]));
            assert!(red(row[1]) < red(row[2]));
            assert!(red(row[2]) < red(row[3]));
            // Grey ramp: every channel matches.
            assert!(row.iter().all(|&p| red(p) == p & 0xff));
        }
        // Centers of the outer columns sit at t = 0.125 and t = 0.875.
        assert_eq!(red(pixels[0]), 32);
        assert_eq!(red(pixels[3]), 223);
    }

    #[test]
    fn fill_pixels_leaves_mismatched_buffer_alone() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(4, 2));
        let mut pixels = vec![7u32; 5];
        frame.fill_pixels(&mut pixels);
        assert!(pixels.iter().all(|&p| p == 7));
    }

    #[test]
    fn uniforms_carry_direction_and_viewport() {
        let frame = FallbackFrame::at(&config(), 0.0, PhysicalSize::new(640, 480));
        let u = frame.uniforms();
        assert_eq!(u.color_a, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(u.color_b, [1.0, 1.0, 1.0, 1.0]);
        assert!(close(u.params[0], 1.0));
        assert!(close(u.params[1], 0.0));
        assert_eq!(u.params[2], 640.0);
        assert_eq!(u.params[3], 480.0);
    }

    #[test]
    fn gradient_uniforms_size() {
        assert_eq!(std::mem::size_of::<GradientUniforms>(), 48);
    }
}
