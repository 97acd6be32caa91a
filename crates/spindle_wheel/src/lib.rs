//! Spindle Wheel Engine
//!
//! A snapping "wheel picker": a scrollable list of items along one axis
//! that the user drags or flings, which settles on a single centered item
//! and reports selection changes. The crate is the scrolling logic only;
//! the host platform owns views, touch delivery, and drawing, and consumes
//! the engine through read accessors and notifications.
//!
//! - **Adapter bridge**: [`WheelAdapter`] supplies the item count and
//!   renderable items; the engine re-reads it live
//! - **Scroll physics**: pointer samples to offset deltas, bounded-window
//!   velocity estimation, deterministic fling decay
//! - **Wheel state machine**: index rollover, boundary clamping, and the
//!   snap-to-center glide
//! - **Dimming gradient**: a visual coefficient and alpha stops that fade
//!   non-centered items
//! - **Orientation adapters**: [`Horizontal`] and [`Vertical`] map the
//!   physics axis to concrete geometry
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use spindle_wheel::{
//!     PointerEvent, Size, TextWheelAdapter, WheelAdapter, WheelConfig, WheelPicker,
//! };
//!
//! let adapter: Arc<Mutex<dyn WheelAdapter>> =
//!     Arc::new(Mutex::new(TextWheelAdapter::new(["Mon", "Tue", "Wed"])));
//!
//! let mut picker = WheelPicker::vertical(WheelConfig::default()).unwrap();
//! picker.set_adapter(Arc::downgrade(&adapter));
//! picker.set_viewport(Size::new(120.0, 300.0));
//!
//! picker.on_pointer_down(&PointerEvent { x: 0.0, y: 150.0, timestamp_ms: 0.0 });
//! picker.on_pointer_move(&PointerEvent { x: 0.0, y: 100.0, timestamp_ms: 32.0 });
//! picker.on_pointer_up(&PointerEvent { x: 0.0, y: 100.0, timestamp_ms: 48.0 });
//!
//! // The host's frame driver ticks until the wheel settles
//! while picker.engine().lifecycle().needs_ticks() {
//!     picker.tick(16.0);
//! }
//! assert_eq!(picker.engine().scrolling_offset(), 0.0);
//! ```

pub mod adapter;
pub mod config;
pub mod gradient;
pub mod orientation;
pub mod picker;
pub mod scroller;
pub mod wheel;

pub use adapter::{RenderableItem, TextWheelAdapter, WheelAdapter};
pub use config::WheelConfig;
pub use gradient::{selector_gradient, visual_coefficient, GradientStop};
pub use orientation::{Horizontal, Orientation, PointerEvent, Rect, Size, Vertical};
pub use picker::WheelPicker;
pub use scroller::{Scroller, TickResult};
pub use wheel::WheelEngine;

// Re-export the pieces hosts wire against
pub use spindle_core::events::{event_types, ListenerId, WheelEvent};
pub use spindle_core::{ConfigError, Lifecycle, StateTransitions};
