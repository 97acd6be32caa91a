//! Easing functions for the settle glide

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in [Easing::Linear, Easing::EaseOutQuad, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(Easing::EaseOutCubic.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(1.5), 1.0);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = Easing::EaseOutCubic.apply(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }
}
