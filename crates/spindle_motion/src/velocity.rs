//! Release-velocity estimation from pointer samples
//!
//! Velocity must be estimated from a bounded recent window, not the whole
//! gesture: a slow-then-fast drag would otherwise report a wrong fling
//! speed. Samples older than the window are pruned on every push.

use smallvec::SmallVec;

/// Default sample window in milliseconds
pub const DEFAULT_WINDOW_MS: f64 = 200.0;

/// One pointer observation along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Position along the scroll axis, in axis units
    pub position: f32,
    /// Host-provided timestamp in milliseconds
    pub timestamp_ms: f64,
}

/// Rolling pointer-sample history for velocity estimation
///
/// Transient per gesture: cleared on pointer-down, consumed on pointer-up.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: SmallVec<[PointerSample; 16]>,
    window_ms: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW_MS)
    }

    pub fn with_window(window_ms: f64) -> Self {
        Self {
            samples: SmallVec::new(),
            window_ms,
        }
    }

    /// Record a sample and drop any older than the window
    pub fn push(&mut self, position: f32, timestamp_ms: f64) {
        let cutoff = timestamp_ms - self.window_ms;
        self.samples.retain(|s| s.timestamp_ms >= cutoff);
        self.samples.push(PointerSample {
            position,
            timestamp_ms,
        });
    }

    /// Discard the gesture's history
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Estimate velocity in axis units per second
    ///
    /// Least-squares linear fit of position against time over the window;
    /// stable against jittery inter-sample spacing. Fewer than two distinct
    /// timestamps yields zero.
    pub fn velocity(&self) -> f32 {
        let n = self.samples.len();
        if n < 2 {
            return 0.0;
        }

        let t0 = self.samples[0].timestamp_ms;
        let mut mean_t = 0.0f64;
        let mut mean_x = 0.0f64;
        for s in &self.samples {
            mean_t += s.timestamp_ms - t0;
            mean_x += s.position as f64;
        }
        mean_t /= n as f64;
        mean_x /= n as f64;

        let mut num = 0.0f64;
        let mut den = 0.0f64;
        for s in &self.samples {
            let dt = (s.timestamp_ms - t0) - mean_t;
            num += dt * (s.position as f64 - mean_x);
            den += dt * dt;
        }
        if den == 0.0 {
            return 0.0;
        }

        // Slope is axis-units per millisecond
        let velocity = (num / den * 1000.0) as f32;
        tracing::trace!(samples = n, velocity, "velocity estimate");
        velocity
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_velocity() {
        let mut tracker = VelocityTracker::new();
        // 1 px per ms = 1000 px/s
        for i in 0..10 {
            tracker.push(i as f32, i as f64);
        }
        let v = tracker.velocity();
        assert!((v - 1000.0).abs() < 1.0, "got {v}");
    }

    #[test]
    fn test_negative_velocity() {
        let mut tracker = VelocityTracker::new();
        for i in 0..10 {
            tracker.push(-(i as f32) * 2.0, i as f64 * 10.0);
        }
        // -2 px per 10 ms = -200 px/s
        let v = tracker.velocity();
        assert!((v + 200.0).abs() < 1.0, "got {v}");
    }

    #[test]
    fn test_single_sample_is_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.push(42.0, 0.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_stationary_pointer_is_zero() {
        let mut tracker = VelocityTracker::new();
        for i in 0..5 {
            tracker.push(100.0, i as f64 * 16.0);
        }
        assert!(tracker.velocity().abs() < f32::EPSILON);
    }

    #[test]
    fn test_window_prunes_slow_start() {
        let mut tracker = VelocityTracker::new();
        // Slow drag for 500 ms
        for i in 0..50 {
            tracker.push(i as f32 * 0.1, i as f64 * 10.0);
        }
        // Then fast for the last 100 ms: 5 px per 10 ms = 500 px/s
        for i in 0..10 {
            tracker.push(5.0 + i as f32 * 5.0, 500.0 + i as f64 * 10.0);
        }
        let v = tracker.velocity();
        // The slow prefix is outside the 200 ms window; estimate reflects
        // the recent fast motion, not the whole-gesture average (~9 px/s).
        assert!(v > 150.0, "got {v}");
    }

    #[test]
    fn test_clear_discards_history() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0.0, 0.0);
        tracker.push(10.0, 10.0);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.velocity(), 0.0);
    }
}
