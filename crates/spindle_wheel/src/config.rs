//! Wheel configuration

use spindle_core::ConfigError;
use spindle_motion::glide::DEFAULT_GLIDE_MS;

/// Configuration for wheel behavior and the dimming gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    /// Number of items visible in the selector window; odd, at least 1.
    /// Governs the gradient extent and the fallback item extent.
    pub visible_items: u32,
    /// Fine-tune of the visible-window sizing, 0..=100. The desired
    /// viewport extent is `item_extent * (visible_items - percent/100)`.
    pub item_offset_percent: u32,
    /// Release speed above which a drag becomes a fling, axis units/second
    pub minimum_fling_velocity: f32,
    /// Fling deceleration in axis units/second^2 (fixed, so fling duration
    /// is deterministic given release velocity)
    pub deceleration: f32,
    /// Minimum opacity of fully dimmed items, 0..=100 percent
    pub dimmed_alpha_floor: u32,
    /// Duration of the snap glide in milliseconds
    pub glide_duration_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            visible_items: 5,
            item_offset_percent: 10,
            minimum_fling_velocity: 300.0,
            deceleration: 1500.0,
            dimmed_alpha_floor: 50,
            glide_duration_ms: DEFAULT_GLIDE_MS,
        }
    }
}

impl WheelConfig {
    /// Create config with the dimming gradient disabled (full opacity
    /// everywhere)
    pub fn no_dimming() -> Self {
        Self {
            dimmed_alpha_floor: 100,
            ..Default::default()
        }
    }

    /// Create config that snaps instantly instead of gliding
    pub fn instant_snap() -> Self {
        Self {
            glide_duration_ms: 0.0,
            ..Default::default()
        }
    }

    /// Validate option ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_items == 0 || self.visible_items % 2 == 0 {
            return Err(ConfigError::VisibleItemsNotOdd(self.visible_items));
        }
        if self.item_offset_percent > 100 {
            return Err(ConfigError::ItemOffsetOutOfRange(self.item_offset_percent));
        }
        if self.dimmed_alpha_floor > 100 {
            return Err(ConfigError::DimmedAlphaOutOfRange(self.dimmed_alpha_floor));
        }
        if self.deceleration <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "deceleration",
                value: self.deceleration,
            });
        }
        if self.minimum_fling_velocity < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "minimum_fling_velocity",
                value: self.minimum_fling_velocity,
            });
        }
        Ok(())
    }
}
