//! Constant-deceleration fling simulation
//!
//! The decay is a pure, restartable function of elapsed time since release:
//!
//! ```text
//! v(t) = v0 - sign(v0) * a * t      (clamped at the zero crossing)
//! s(t) = v0 * t - sign(v0) * a * t^2 / 2
//! ```
//!
//! Deceleration is a fixed constant rather than time-variable, so fling
//! duration is deterministic given the release velocity.

/// A fling derived once per gesture and consumed over successive ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingDecay {
    /// Release velocity in axis units per second (signed)
    initial_velocity: f32,
    /// Deceleration magnitude in axis units per second squared
    deceleration: f32,
}

impl FlingDecay {
    /// Create a decay; `deceleration` must be positive
    pub fn new(initial_velocity: f32, deceleration: f32) -> Self {
        debug_assert!(deceleration > 0.0);
        Self {
            initial_velocity,
            deceleration,
        }
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }

    /// Time until the velocity decays to zero, in milliseconds
    pub fn duration_ms(&self) -> f64 {
        (self.initial_velocity.abs() / self.deceleration) as f64 * 1000.0
    }

    /// Velocity at `t` milliseconds after release, in axis units per second
    pub fn velocity_at(&self, t_ms: f64) -> f32 {
        let t = (t_ms.max(0.0) / 1000.0) as f32;
        let sign = self.initial_velocity.signum();
        let v = self.initial_velocity - sign * self.deceleration * t;
        // Clamp at the zero crossing instead of reversing direction
        if v * sign <= 0.0 {
            0.0
        } else {
            v
        }
    }

    /// Offset travelled since release at `t` milliseconds, in axis units
    pub fn position_at(&self, t_ms: f64) -> f32 {
        let t_end = self.duration_ms();
        let t = (t_ms.max(0.0).min(t_end) / 1000.0) as f32;
        let sign = self.initial_velocity.signum();
        self.initial_velocity * t - sign * self.deceleration * t * t / 2.0
    }

    /// Total distance the fling covers before stopping
    pub fn total_distance(&self) -> f32 {
        self.position_at(self.duration_ms())
    }

    /// Check if the fling has fully decayed at `t` milliseconds
    pub fn is_finished(&self, t_ms: f64) -> bool {
        t_ms >= self.duration_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_velocity_finishes_immediately() {
        let fling = FlingDecay::new(0.0, 1500.0);
        assert_eq!(fling.duration_ms(), 0.0);
        assert!(fling.is_finished(0.0));
        assert_eq!(fling.position_at(0.0), 0.0);
        assert_eq!(fling.position_at(100.0), 0.0);
    }

    #[test]
    fn test_duration_deterministic() {
        // 3000 px/s at 1500 px/s^2 stops after exactly 2 s
        let fling = FlingDecay::new(3000.0, 1500.0);
        assert!((fling.duration_ms() - 2000.0).abs() < 1e-6);
        assert!(!fling.is_finished(1999.0));
        assert!(fling.is_finished(2000.0));
    }

    #[test]
    fn test_velocity_decays_linearly_and_clamps() {
        let fling = FlingDecay::new(1000.0, 1000.0);
        assert_eq!(fling.velocity_at(0.0), 1000.0);
        assert!((fling.velocity_at(500.0) - 500.0).abs() < 1e-3);
        assert_eq!(fling.velocity_at(1000.0), 0.0);
        // Never reverses past the zero crossing
        assert_eq!(fling.velocity_at(5000.0), 0.0);
    }

    #[test]
    fn test_total_distance_closed_form() {
        // s = v^2 / (2a) = 1000^2 / 3000 / ... -> 1000/2 * 1 = 500 px
        let fling = FlingDecay::new(1000.0, 1000.0);
        assert!((fling.total_distance() - 500.0).abs() < 1e-2);

        let backwards = FlingDecay::new(-1000.0, 1000.0);
        assert!((backwards.total_distance() + 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_position_frozen_after_decay() {
        let fling = FlingDecay::new(600.0, 1200.0);
        let end = fling.total_distance();
        assert_eq!(fling.position_at(fling.duration_ms() + 250.0), end);
    }

    #[test]
    fn test_restartable_sampling() {
        // Sampling out of order gives identical results: pure function of t
        let fling = FlingDecay::new(-800.0, 1600.0);
        let a = fling.position_at(300.0);
        let _ = fling.position_at(450.0);
        let b = fling.position_at(300.0);
        assert_eq!(a, b);
    }
}
