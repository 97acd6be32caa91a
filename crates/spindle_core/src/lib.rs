//! Spindle Core Runtime
//!
//! Foundational primitives for the Spindle wheel-picker engine:
//!
//! - **Events**: wheel notification payloads and a listener registry
//! - **Lifecycle**: the Idle/Dragging/Flinging/Settling interaction states
//! - **Errors**: configuration validation
//!
//! # Example
//!
//! ```rust
//! use spindle_core::events::{event_types, WheelEvent, WheelEventDispatcher};
//!
//! let mut dispatcher = WheelEventDispatcher::new();
//!
//! let id = dispatcher.subscribe(event_types::ITEM_CHANGED, |event| {
//!     if let WheelEvent::ItemChanged { from, to } = event {
//!         println!("item {from:?} -> {to}");
//!     }
//! });
//!
//! dispatcher.emit(&WheelEvent::ItemChanged { from: Some(2), to: 3 });
//! dispatcher.unsubscribe(id);
//! ```

pub mod error;
pub mod events;
pub mod lifecycle;

pub use error::ConfigError;
pub use events::{EventType, ListenerId, WheelEvent, WheelEventDispatcher};
pub use lifecycle::{Lifecycle, StateTransitions};
