//! Visual coefficient and the selector dimming gradient
//!
//! The coefficient measures how close the nearest item is to dead-center:
//! 1.0 exactly centered, 0.0 a half extent away. The gradient maps it to
//! platform-independent alpha stops along the scroll axis, which the
//! drawing collaborator uses to fade non-centered items while the centered
//! band stays fully opaque.

/// Dimming coefficient in `[0, 1]`, derived purely from the residual
/// scrolling offset. Monotonic in `|offset|` and even around zero.
///
/// An unmeasured extent reports 1.0 so the control stays visually stable
/// before layout.
pub fn visual_coefficient(scrolling_offset: f32, item_extent: f32) -> f32 {
    if item_extent <= 0.0 {
        return 1.0;
    }
    1.0 - (scrolling_offset.abs() / (item_extent / 2.0)).min(1.0)
}

/// One alpha stop of the selector gradient; `position` runs 0..=1 along
/// the scroll axis, `alpha` is opacity in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub alpha: f32,
}

impl GradientStop {
    fn new(position: f32, alpha: f32) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Alpha stops for the selector dimming shader
///
/// The centered band `[p1, p2]` (one item extent around the middle of the
/// viewport) is fully opaque; alpha steps down at the item boundaries and
/// blends with `coeff` so the fade tracks the scroll in motion. With fewer
/// than three visible items only the near band exists; otherwise a second
/// falloff is placed three extents out.
///
/// A `dimmed_alpha_floor` of 100 disables dimming entirely.
pub fn selector_gradient(
    coeff: f32,
    item_extent: f32,
    viewport_extent: f32,
    visible_items: u32,
    dimmed_alpha_floor: u32,
) -> Vec<GradientStop> {
    if dimmed_alpha_floor >= 100 || item_extent <= 0.0 || viewport_extent <= 0.0 {
        return vec![GradientStop::new(0.0, 1.0), GradientStop::new(1.0, 1.0)];
    }

    let coeff = coeff.clamp(0.0, 1.0);
    let e = item_extent / viewport_extent;
    let p1 = (1.0 - e) / 2.0;
    let p2 = (1.0 + e) / 2.0;

    let floor = dimmed_alpha_floor as f32 / 100.0;
    let z = floor * (1.0 - coeff);
    let c1 = z + coeff;

    if visible_items < 3 {
        return vec![
            GradientStop::new(0.0, z),
            GradientStop::new(p1, c1),
            GradientStop::new(p1, 1.0),
            GradientStop::new(p2, 1.0),
            GradientStop::new(p2, c1),
            GradientStop::new(1.0, z),
        ];
    }

    let p3 = ((1.0 - e * 3.0) / 2.0).max(0.0);
    let p4 = ((1.0 + e * 3.0) / 2.0).min(1.0);

    let c3 = if p1 > 0.0 { (p3 / p1) * coeff } else { coeff };
    let c2 = z + c3;

    vec![
        GradientStop::new(0.0, 0.0),
        GradientStop::new(p3, c3),
        GradientStop::new(p3, c2),
        GradientStop::new(p1, c1),
        GradientStop::new(p1, 1.0),
        GradientStop::new(p2, 1.0),
        GradientStop::new(p2, c1),
        GradientStop::new(p4, c2),
        GradientStop::new(p4, c3),
        GradientStop::new(1.0, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_endpoints() {
        for extent in [10.0, 100.0, 333.0] {
            assert_eq!(visual_coefficient(0.0, extent), 1.0);
            assert_eq!(visual_coefficient(extent / 2.0, extent), 0.0);
        }
    }

    #[test]
    fn test_coefficient_is_even() {
        for offset in [1.0, 17.5, 49.9, 80.0] {
            assert_eq!(
                visual_coefficient(offset, 100.0),
                visual_coefficient(-offset, 100.0)
            );
        }
    }

    #[test]
    fn test_coefficient_monotonic_in_magnitude() {
        let mut last = 1.0;
        for i in 0..=60 {
            let c = visual_coefficient(i as f32, 100.0);
            assert!(c <= last);
            last = c;
        }
    }

    #[test]
    fn test_coefficient_saturates_past_half_extent() {
        assert_eq!(visual_coefficient(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_coefficient_unmeasured_extent() {
        assert_eq!(visual_coefficient(40.0, 0.0), 1.0);
    }

    #[test]
    fn test_gradient_center_band_positions() {
        // extent 100 in a 500 viewport: band at [0.4, 0.6]
        let stops = selector_gradient(1.0, 100.0, 500.0, 5, 50);
        assert!(stops
            .iter()
            .any(|s| (s.position - 0.4).abs() < 1e-6 && s.alpha == 1.0));
        assert!(stops
            .iter()
            .any(|s| (s.position - 0.6).abs() < 1e-6 && s.alpha == 1.0));
        // positions never decrease
        for pair in stops.windows(2) {
            assert!(pair[0].position <= pair[1].position);
        }
    }

    #[test]
    fn test_gradient_neighbor_alpha_blends_with_coeff() {
        // Centered: neighbor edge fully opaque. Mid-scroll: dimmed toward
        // the floor.
        let centered = selector_gradient(1.0, 100.0, 500.0, 5, 50);
        let moving = selector_gradient(0.0, 100.0, 500.0, 5, 50);
        // The first stop at p1 carries the blended neighbor alpha c1
        let edge_alpha = |stops: &[GradientStop]| {
            stops
                .iter()
                .find(|s| (s.position - 0.4).abs() < 1e-6)
                .map(|s| s.alpha)
                .unwrap()
        };
        assert_eq!(edge_alpha(&centered), 1.0);
        assert_eq!(edge_alpha(&moving), 0.5);
    }

    #[test]
    fn test_gradient_disabled_at_full_floor() {
        let stops = selector_gradient(0.3, 100.0, 500.0, 5, 100);
        assert_eq!(stops.len(), 2);
        assert!(stops.iter().all(|s| s.alpha == 1.0));
    }

    #[test]
    fn test_gradient_short_table_below_three_visible() {
        let stops = selector_gradient(0.5, 100.0, 150.0, 1, 50);
        assert_eq!(stops.len(), 6);
    }

    #[test]
    fn test_gradient_far_band_clamped_in_small_viewport() {
        // 3 extents do not fit: p3/p4 clamp to the viewport ends
        let stops = selector_gradient(0.5, 100.0, 250.0, 3, 50);
        for s in &stops {
            assert!((0.0..=1.0).contains(&s.position));
            assert!((0.0..=1.0).contains(&s.alpha));
        }
    }
}
