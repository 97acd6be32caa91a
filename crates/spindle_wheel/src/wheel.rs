//! The wheel engine: index, offset, lifecycle, and notifications
//!
//! Owns the wheel state (`current_index`, `scrolling_offset`, lifecycle,
//! `item_extent`) and mutates it only through its transition operations.
//! Pointer callbacks and frame ticks all run on one thread; a pointer-down
//! while Flinging or Settling cancels the in-flight motion synchronously.
//!
//! Sign convention: positive `scrolling_offset` means the wheel is partway
//! toward the next (higher) index. The content follows the finger, so a
//! positive pointer delta is applied as a negative offset delta.

use std::sync::{Mutex, Weak};

use spindle_core::events::{event_types, EventType, ListenerId, WheelEvent, WheelEventDispatcher};
use spindle_core::{ConfigError, Lifecycle, StateTransitions};

use crate::adapter::WheelAdapter;
use crate::config::WheelConfig;
use crate::gradient::visual_coefficient;
use crate::scroller::{Scroller, TickResult};

/// Scrolling/snapping state machine for one wheel control
pub struct WheelEngine {
    config: WheelConfig,
    /// Owned elsewhere; re-read live on each query so external data-set
    /// changes are observed promptly
    adapter: Weak<Mutex<dyn WheelAdapter>>,
    dispatcher: WheelEventDispatcher,
    scroller: Scroller,
    lifecycle: Lifecycle,
    current_index: usize,
    scrolling_offset: f32,
    /// Zero until first measured
    item_extent: f32,
    /// ScrollingStarted / ScrollingFinished fire at most once per gesture
    started_fired: bool,
}

impl WheelEngine {
    pub fn new(config: WheelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            adapter: Weak::<Mutex<crate::adapter::TextWheelAdapter>>::new(),
            dispatcher: WheelEventDispatcher::new(),
            scroller: Scroller::new(),
            lifecycle: Lifecycle::Idle,
            current_index: 0,
            scrolling_offset: 0.0,
            item_extent: 0.0,
            started_fired: false,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Attach the adapter (non-owning) and re-validate against it
    pub fn set_adapter(&mut self, adapter: Weak<Mutex<dyn WheelAdapter>>) {
        self.adapter = adapter;
        self.on_data_set_changed();
    }

    /// Live item count; a dropped or absent adapter reads as empty
    pub fn item_count(&self) -> usize {
        self.adapter
            .upgrade()
            .map(|a| a.lock().unwrap().item_count())
            .unwrap_or(0)
    }

    /// The centered item index, or `None` while the adapter is empty
    pub fn current_item(&self) -> Option<usize> {
        let count = self.item_count();
        (count > 0).then(|| self.current_index.min(count - 1))
    }

    pub fn scrolling_offset(&self) -> f32 {
        self.scrolling_offset
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }

    /// Dimming coefficient for the drawing collaborator, recomputed from
    /// the current offset
    pub fn visual_coefficient(&self) -> f32 {
        visual_coefficient(self.scrolling_offset, self.item_extent)
    }

    /// Record the measured item extent; non-positive values are ignored
    pub fn set_item_extent(&mut self, extent: f32) {
        if extent > 0.0 {
            self.item_extent = extent;
        } else {
            tracing::warn!(extent, "ignoring non-positive item extent");
        }
    }

    pub fn subscribe<F>(&mut self, event_type: EventType, handler: F) -> ListenerId
    where
        F: FnMut(&WheelEvent) + 'static,
    {
        self.dispatcher.subscribe(event_type, handler)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.dispatcher.unsubscribe(id)
    }

    /// Jump to an item without animation; offset resets to centered
    pub fn set_current_item(&mut self, index: usize) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let clamped = index.min(count - 1);
        self.cancel_motion();
        self.scrolling_offset = 0.0;
        if clamped != self.current_index {
            let from = Some(self.current_index);
            self.current_index = clamped;
            self.dispatcher
                .emit(&WheelEvent::ItemChanged { from, to: clamped });
        }
    }

    fn accepts_input(&self) -> bool {
        self.item_count() > 0 && self.item_extent > 0.0
    }

    fn transition(&mut self, event: EventType) -> bool {
        match self.lifecycle.on_event(event) {
            Some(next) => {
                tracing::debug!(from = ?self.lifecycle, to = ?next, event, "lifecycle");
                self.lifecycle = next;
                true
            }
            None => false,
        }
    }

    /// Gesture start: cancel in-flight motion and begin tracking.
    /// `ScrollingStarted` is emitted exactly once per gesture; a touch that
    /// interrupts a fling continues the same gesture.
    pub fn on_pointer_down(&mut self, axis_position: f32, timestamp_ms: f64) {
        if !self.accepts_input() {
            return;
        }
        if !self.transition(event_types::POINTER_DOWN) {
            // Already dragging: idempotent
            return;
        }
        self.scroller.begin(axis_position, timestamp_ms);
        if !self.started_fired {
            self.started_fired = true;
            self.dispatcher.emit(&WheelEvent::ScrollingStarted);
        }
    }

    /// Drag sample: returns the pointer delta that was integrated
    pub fn on_pointer_move(&mut self, axis_position: f32, timestamp_ms: f64) -> f32 {
        if self.lifecycle != Lifecycle::Dragging || !self.accepts_input() {
            return 0.0;
        }
        let delta = self.scroller.drag(axis_position, timestamp_ms);
        // Content follows the finger; the index runs opposite the drag
        self.apply_offset_delta(-delta);
        delta
    }

    /// Gesture end: fling if the release velocity clears the threshold,
    /// otherwise settle directly
    pub fn on_pointer_up(&mut self, axis_position: f32, timestamp_ms: f64) {
        if self.lifecycle != Lifecycle::Dragging {
            return;
        }
        let velocity = self.scroller.release_velocity(axis_position, timestamp_ms);
        if velocity.abs() > self.config.minimum_fling_velocity {
            self.transition(event_types::FLING_START);
            self.scroller.start_fling(velocity, self.config.deceleration);
        } else {
            self.on_motion_finished();
        }
    }

    /// One display frame while Flinging or Settling; the frame driver stops
    /// calling once `finished` is observed
    pub fn tick(&mut self, elapsed_ms: f64) -> TickResult {
        match self.lifecycle {
            Lifecycle::Flinging => {
                let result = self.scroller.tick(elapsed_ms);
                self.apply_offset_delta(-result.delta);
                if result.finished {
                    self.on_motion_finished();
                }
                TickResult {
                    delta: -result.delta,
                    finished: self.lifecycle == Lifecycle::Idle,
                }
            }
            Lifecycle::Settling => {
                let result = self.scroller.tick(elapsed_ms);
                // Glide deltas are already in wheel-offset space and stay
                // within half an extent, so no rollover can occur
                self.apply_offset_delta(result.delta);
                if result.finished {
                    self.finish_settle();
                }
                TickResult {
                    delta: result.delta,
                    finished: self.lifecycle == Lifecycle::Idle,
                }
            }
            _ => TickResult {
                delta: 0.0,
                finished: !self.lifecycle.needs_ticks(),
            },
        }
    }

    /// Motion judged finished: roll to the nearer item if past the half
    /// extent, then glide the residual offset to zero
    pub fn on_motion_finished(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let count = self.item_count();
        let half = self.item_extent / 2.0;

        if self.scrolling_offset > half && self.current_index + 1 < count {
            let from = Some(self.current_index);
            self.current_index += 1;
            self.scrolling_offset -= self.item_extent;
            self.dispatcher.emit(&WheelEvent::ItemChanged {
                from,
                to: self.current_index,
            });
        } else if self.scrolling_offset < -half && self.current_index > 0 {
            let from = Some(self.current_index);
            self.current_index -= 1;
            self.scrolling_offset += self.item_extent;
            self.dispatcher.emit(&WheelEvent::ItemChanged {
                from,
                to: self.current_index,
            });
        }

        self.transition(event_types::SETTLE_START);
        if self.scrolling_offset == 0.0 {
            // Nothing to glide
            self.scroller.cancel();
            self.finish_settle();
        } else {
            self.scroller
                .start_glide(self.scrolling_offset, self.config.glide_duration_ms);
        }
    }

    fn finish_settle(&mut self) {
        self.scrolling_offset = 0.0;
        self.transition(event_types::SETTLED);
        let selected = self.current_index;
        self.started_fired = false;
        self.dispatcher
            .emit(&WheelEvent::ScrollingFinished { selected });
    }

    /// Integrate an offset delta, rolling the index while a full extent has
    /// accumulated. The index clamps at the first and last item; delta that
    /// would scroll beyond the boundary is absorbed, never wrapped.
    pub fn apply_offset_delta(&mut self, delta: f32) {
        let count = self.item_count();
        if count == 0 || self.item_extent <= 0.0 || delta == 0.0 {
            return;
        }

        self.scrolling_offset += delta;
        let old_index = self.current_index;

        while self.scrolling_offset >= self.item_extent && self.current_index + 1 < count {
            self.current_index += 1;
            self.scrolling_offset -= self.item_extent;
        }
        while self.scrolling_offset <= -self.item_extent && self.current_index > 0 {
            self.current_index -= 1;
            self.scrolling_offset += self.item_extent;
        }

        // Absorb anything beyond the boundary items: the wheel does not
        // move past center at either end.
        if self.current_index == 0 && self.scrolling_offset < 0.0 {
            self.scrolling_offset = 0.0;
        }
        if self.current_index + 1 >= count && self.scrolling_offset > 0.0 {
            self.scrolling_offset = 0.0;
        }

        tracing::trace!(
            delta,
            offset = self.scrolling_offset,
            index = self.current_index,
            "scroll"
        );
        self.dispatcher.emit(&WheelEvent::Scrolled { delta });
        if self.current_index != old_index {
            self.dispatcher.emit(&WheelEvent::ItemChanged {
                from: Some(old_index),
                to: self.current_index,
            });
        }
    }

    /// Re-validate against the adapter after a data-set change: the index
    /// clamps, the offset zeroes, and any in-flight motion is cancelled
    pub fn on_data_set_changed(&mut self) {
        self.cancel_motion();
        self.scrolling_offset = 0.0;

        let count = self.item_count();
        if count == 0 {
            // Index retained internally; reported unset via current_item()
            return;
        }
        if self.current_index >= count {
            let from = Some(self.current_index);
            self.current_index = count - 1;
            self.dispatcher.emit(&WheelEvent::ItemChanged {
                from,
                to: self.current_index,
            });
        }
    }

    fn cancel_motion(&mut self) {
        self.scroller.cancel();
        self.lifecycle = Lifecycle::Idle;
        self.started_fired = false;
    }
}
