//! Settle glide: the deterministic snap of offset to zero
//!
//! Once motion is judged finished, the residual scrolling offset is
//! animated to zero over a short fixed duration rather than jumping, so
//! the centered item lands smoothly. Like [`FlingDecay`](crate::FlingDecay)
//! this is a pure function of elapsed time.

use crate::easing::Easing;

/// Default glide duration in milliseconds
pub const DEFAULT_GLIDE_MS: f64 = 150.0;

/// Fixed-duration eased interpolation of an offset toward zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide {
    from: f32,
    duration_ms: f64,
    easing: Easing,
}

impl Glide {
    pub fn new(from: f32, duration_ms: f64) -> Self {
        Self {
            from,
            duration_ms: duration_ms.max(0.0),
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn from_offset(&self) -> f32 {
        self.from
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Offset value at `t` milliseconds into the glide; exactly zero once
    /// the duration has elapsed
    pub fn value_at(&self, t_ms: f64) -> f32 {
        if self.duration_ms == 0.0 || t_ms >= self.duration_ms {
            return 0.0;
        }
        let progress = (t_ms.max(0.0) / self.duration_ms) as f32;
        self.from * (1.0 - self.easing.apply(progress))
    }

    pub fn is_finished(&self, t_ms: f64) -> bool {
        t_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_from_and_ends_at_zero() {
        let glide = Glide::new(60.0, 150.0);
        assert_eq!(glide.value_at(0.0), 60.0);
        assert_eq!(glide.value_at(150.0), 0.0);
        assert_eq!(glide.value_at(1000.0), 0.0);
    }

    #[test]
    fn test_magnitude_monotonically_decreases() {
        let glide = Glide::new(-80.0, 150.0);
        let mut last = 80.0f32;
        for i in 0..=30 {
            let v = glide.value_at(i as f64 * 5.0).abs();
            assert!(v <= last + 1e-4, "|offset| grew at step {i}");
            last = v;
        }
        assert_eq!(glide.value_at(150.0), 0.0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let glide = Glide::new(42.0, 0.0);
        assert_eq!(glide.value_at(0.0), 0.0);
        assert!(glide.is_finished(0.0));
    }

    #[test]
    fn test_linear_easing_midpoint() {
        let glide = Glide::new(100.0, 100.0).with_easing(Easing::Linear);
        assert!((glide.value_at(50.0) - 50.0).abs() < 1e-4);
    }
}
