//! The picker control: one engine behind an orientation adapter
//!
//! Wraps the shared [`WheelEngine`] with an axis mapping chosen at
//! construction time and the measured-extent cache, translating host
//! pointer events and viewport geometry into engine calls.

use std::sync::{Mutex, Weak};

use spindle_core::events::{EventType, ListenerId, WheelEvent};
use spindle_core::ConfigError;

use crate::adapter::WheelAdapter;
use crate::config::WheelConfig;
use crate::gradient::{selector_gradient, GradientStop};
use crate::orientation::{
    desired_viewport_extent, Horizontal, ItemExtentCache, Orientation, PointerEvent, Rect, Size,
    Vertical,
};
use crate::scroller::TickResult;
use crate::wheel::WheelEngine;

/// A wheel picker for one axis orientation
pub struct WheelPicker {
    engine: WheelEngine,
    orientation: Box<dyn Orientation>,
    extent_cache: ItemExtentCache,
    viewport: Size,
}

impl WheelPicker {
    /// Create a horizontally scrolling picker
    pub fn horizontal(config: WheelConfig) -> Result<Self, ConfigError> {
        Self::with_orientation(config, Box::new(Horizontal))
    }

    /// Create a vertically scrolling picker
    pub fn vertical(config: WheelConfig) -> Result<Self, ConfigError> {
        Self::with_orientation(config, Box::new(Vertical))
    }

    pub fn with_orientation(
        config: WheelConfig,
        orientation: Box<dyn Orientation>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: WheelEngine::new(config)?,
            orientation,
            extent_cache: ItemExtentCache::new(),
            viewport: Size::default(),
        })
    }

    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut WheelEngine {
        &mut self.engine
    }

    pub fn set_adapter(&mut self, adapter: Weak<Mutex<dyn WheelAdapter>>) {
        self.engine.set_adapter(adapter);
    }

    /// Update the viewport and re-resolve the item extent
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.refresh_extent();
    }

    /// Record the measured extent of one item view
    pub fn set_measured_item_extent(&mut self, extent: f32) {
        self.extent_cache.set_measured(extent);
        self.refresh_extent();
    }

    /// The item views were rebuilt: drop the cached measurement and fall
    /// back to the viewport split until a new one arrives
    pub fn on_items_rebuilt(&mut self) {
        self.extent_cache.invalidate();
        self.refresh_extent();
    }

    fn refresh_extent(&mut self) {
        let viewport_extent = self.orientation.viewport_extent(self.viewport);
        let visible = self.engine.config().visible_items;
        let extent = self.extent_cache.resolve(viewport_extent, visible);
        if extent > 0.0 {
            self.engine.set_item_extent(extent);
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        let position = self.orientation.axis_of(event);
        self.engine.on_pointer_down(position, event.timestamp_ms);
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> f32 {
        let position = self.orientation.axis_of(event);
        self.engine.on_pointer_move(position, event.timestamp_ms)
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        let position = self.orientation.axis_of(event);
        self.engine.on_pointer_up(position, event.timestamp_ms);
    }

    pub fn tick(&mut self, elapsed_ms: f64) -> TickResult {
        self.engine.tick(elapsed_ms)
    }

    pub fn on_data_set_changed(&mut self) {
        self.engine.on_data_set_changed();
    }

    pub fn subscribe<F>(&mut self, event_type: EventType, handler: F) -> ListenerId
    where
        F: FnMut(&WheelEvent) + 'static,
    {
        self.engine.subscribe(event_type, handler)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.engine.unsubscribe(id);
    }

    /// Geometry for placing the item at `index`, relative to the centered
    /// item and the residual offset; `None` while unmeasured or empty
    pub fn layout_rect(&self, index: usize) -> Option<Rect> {
        let current = self.engine.current_item()?;
        let extent = self.engine.item_extent();
        if extent <= 0.0 {
            return None;
        }
        let slot = index as i64 - current as i64;
        Some(self.orientation.layout_rect(
            slot as i32,
            extent,
            self.viewport,
            self.engine.scrolling_offset(),
        ))
    }

    /// Alpha stops of the dimming gradient for the current offset
    pub fn gradient_stops(&self) -> Vec<GradientStop> {
        let config = self.engine.config();
        selector_gradient(
            self.engine.visual_coefficient(),
            self.engine.item_extent(),
            self.orientation.viewport_extent(self.viewport),
            config.visible_items,
            config.dimmed_alpha_floor,
        )
    }

    /// Viewport size this picker wants along its scroll axis
    pub fn desired_extent(&self) -> f32 {
        let config = self.engine.config();
        desired_viewport_extent(
            self.engine.item_extent(),
            config.visible_items,
            config.item_offset_percent,
        )
    }
}
