//! Orientation adapters: axis extraction and item geometry
//!
//! The horizontal and vertical pickers share one engine; each orientation
//! only maps the physics axis and item extent onto concrete draw
//! rectangles. The two variants share no mutable state and are selected at
//! construction time.

/// A pointer event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    /// Host-provided timestamp in milliseconds
    pub timestamp_ms: f64,
}

/// Viewport dimensions in axis units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Item placement rectangle relative to the viewport origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Maps the scalar physics axis onto concrete geometry
pub trait Orientation {
    /// Extract the scroll-axis coordinate from a pointer event
    fn axis_of(&self, event: &PointerEvent) -> f32;

    /// Viewport size along the scroll axis
    fn viewport_extent(&self, viewport: Size) -> f32;

    /// Geometry for the item `slot` positions away from the centered item,
    /// displaced by the residual scrolling offset
    fn layout_rect(&self, slot: i32, item_extent: f32, viewport: Size, scrolling_offset: f32)
        -> Rect;
}

/// Horizontal wheel: items run left to right
#[derive(Debug, Clone, Copy, Default)]
pub struct Horizontal;

impl Orientation for Horizontal {
    fn axis_of(&self, event: &PointerEvent) -> f32 {
        event.x
    }

    fn viewport_extent(&self, viewport: Size) -> f32 {
        viewport.width
    }

    fn layout_rect(
        &self,
        slot: i32,
        item_extent: f32,
        viewport: Size,
        scrolling_offset: f32,
    ) -> Rect {
        let center = viewport.width / 2.0;
        Rect {
            x: center - item_extent / 2.0 + slot as f32 * item_extent - scrolling_offset,
            y: 0.0,
            width: item_extent,
            height: viewport.height,
        }
    }
}

/// Vertical wheel: items run top to bottom
#[derive(Debug, Clone, Copy, Default)]
pub struct Vertical;

impl Orientation for Vertical {
    fn axis_of(&self, event: &PointerEvent) -> f32 {
        event.y
    }

    fn viewport_extent(&self, viewport: Size) -> f32 {
        viewport.height
    }

    fn layout_rect(
        &self,
        slot: i32,
        item_extent: f32,
        viewport: Size,
        scrolling_offset: f32,
    ) -> Rect {
        let center = viewport.height / 2.0;
        Rect {
            x: 0.0,
            y: center - item_extent / 2.0 + slot as f32 * item_extent - scrolling_offset,
            width: viewport.width,
            height: item_extent,
        }
    }
}

/// Measured item extent with explicit invalidation
///
/// Cached after the first measurement and cleared only by an explicit
/// items-rebuilt signal, never inferred from field state. While no
/// measurement exists the extent falls back to an even split of the
/// viewport across the visible items.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemExtentCache {
    measured: Option<f32>,
}

impl ItemExtentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured extent; non-positive measurements are ignored
    pub fn set_measured(&mut self, extent: f32) {
        if extent > 0.0 {
            self.measured = Some(extent);
        } else {
            tracing::warn!(extent, "ignoring non-positive item extent");
        }
    }

    /// Clear the cache; called when the item views are rebuilt
    pub fn invalidate(&mut self) {
        self.measured = None;
    }

    pub fn is_measured(&self) -> bool {
        self.measured.is_some()
    }

    /// Cached measurement, or the viewport split fallback
    pub fn resolve(&self, viewport_extent: f32, visible_items: u32) -> f32 {
        match self.measured {
            Some(extent) => extent,
            None if viewport_extent > 0.0 && visible_items > 0 => {
                viewport_extent / visible_items as f32
            }
            None => 0.0,
        }
    }
}

/// Desired viewport size along the scroll axis for a given item extent,
/// trimmed by the item-offset percentage
pub fn desired_viewport_extent(item_extent: f32, visible_items: u32, item_offset_percent: u32) -> f32 {
    item_extent * (visible_items as f32 - item_offset_percent as f32 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_extraction() {
        let event = PointerEvent {
            x: 12.0,
            y: 34.0,
            timestamp_ms: 0.0,
        };
        assert_eq!(Horizontal.axis_of(&event), 12.0);
        assert_eq!(Vertical.axis_of(&event), 34.0);
    }

    #[test]
    fn test_centered_slot_rect_horizontal() {
        let rect = Horizontal.layout_rect(0, 100.0, Size::new(500.0, 80.0), 0.0);
        assert_eq!(rect.x, 200.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 80.0);
    }

    #[test]
    fn test_offset_displaces_against_scroll() {
        // Positive offset means the wheel is partway toward the next item,
        // so the current item sits before center.
        let rect = Vertical.layout_rect(0, 100.0, Size::new(80.0, 500.0), 30.0);
        assert_eq!(rect.y, 170.0);
        let next = Vertical.layout_rect(1, 100.0, Size::new(80.0, 500.0), 30.0);
        assert_eq!(next.y, 270.0);
    }

    #[test]
    fn test_extent_cache_fallback_splits_viewport() {
        let cache = ItemExtentCache::new();
        assert_eq!(cache.resolve(500.0, 5), 100.0);
        assert_eq!(cache.resolve(0.0, 5), 0.0);
    }

    #[test]
    fn test_extent_cache_measure_and_invalidate() {
        let mut cache = ItemExtentCache::new();
        cache.set_measured(64.0);
        assert!(cache.is_measured());
        assert_eq!(cache.resolve(500.0, 5), 64.0);

        cache.invalidate();
        assert!(!cache.is_measured());
        assert_eq!(cache.resolve(500.0, 5), 100.0);
    }

    #[test]
    fn test_extent_cache_rejects_non_positive() {
        let mut cache = ItemExtentCache::new();
        cache.set_measured(0.0);
        assert!(!cache.is_measured());
        cache.set_measured(-3.0);
        assert!(!cache.is_measured());
    }

    #[test]
    fn test_desired_viewport_extent() {
        // extent 100, 5 visible, 10 percent trim: 100 * 4.9
        assert_eq!(desired_viewport_extent(100.0, 5, 10), 490.0);
    }
}
