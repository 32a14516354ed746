//! Frame clock: per-tick delta, monotonic elapsed time, and a rolling
//! frame-rate window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest delta a single tick may report, in seconds.
pub const MAX_DELTA: f32 = 0.25;

const MAX_SAMPLES: usize = 120;

/// Tracks the render loop's timeline.
///
/// `elapsed` is measured from construction and never reset.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    frame_times: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last_frame: now,
            frame_times: VecDeque::with_capacity(MAX_SAMPLES),
        }
    }

    /// Record a frame at `now` and return its delta in seconds, capped at
    /// [`MAX_DELTA`]. A timestamp earlier than the previous one yields 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = self.last_frame.max(now);
        self.frame_times.push_back(dt);
        if self.frame_times.len() > MAX_SAMPLES {
            self.frame_times.pop_front();
        }
        dt.as_secs_f32().min(MAX_DELTA)
    }

    /// Seconds from construction to the latest tick.
    pub fn elapsed(&self) -> f64 {
        self.last_frame
            .saturating_duration_since(self.start)
            .as_secs_f64()
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.window_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.window_secs() / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    fn window_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn initial_state_is_zero() {
        let clock = FrameClock::new(Instant::now());
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.frame_time_ms(), 0.0);
        assert_eq!(clock.sample_count(), 0);
    }

    #[test]
    fn tick_reports_delta_and_accumulates_elapsed() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let dt = clock.tick(t0 + ms(100));
        assert!((dt - 0.1).abs() < 1e-6);
        let dt = clock.tick(t0 + ms(150));
        assert!((dt - 0.05).abs() < 1e-6);
        assert!((clock.elapsed() - 0.15).abs() < 1e-9);
    }

    #[test]
    fn delta_is_capped_but_elapsed_is_not() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        let dt = clock.tick(t0 + Duration::from_secs(5));
        assert_eq!(dt, MAX_DELTA);
        assert!((clock.elapsed() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn earlier_timestamp_is_zero_delta() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0 + ms(100));
        assert_eq!(clock.tick(t0), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn fps_over_window() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        for i in 1..=10 {
            clock.tick(t0 + ms(20 * i));
        }
        assert_eq!(clock.sample_count(), 10);
        assert!((clock.fps() - 50.0).abs() < 1e-6);
        assert!((clock.frame_time_ms() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn max_samples_respected() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        for i in 1..=200 {
            clock.tick(t0 + ms(i));
        }
        assert_eq!(clock.sample_count(), MAX_SAMPLES);
    }
}
