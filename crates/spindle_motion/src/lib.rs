//! Spindle Motion Primitives
//!
//! Pure, frame-driver-free physics for the wheel engine:
//!
//! - **Velocity tracking**: release-velocity estimation over a bounded
//!   recent window of pointer samples
//! - **Fling decay**: constant-deceleration simulation expressed as a
//!   restartable `position(t)` function
//! - **Settle glide**: fixed-duration eased return of the offset to zero
//!
//! All time is host-provided milliseconds; nothing here reads a clock, so
//! every simulation is deterministic and unit-testable without a frame
//! driver.

pub mod easing;
pub mod fling;
pub mod glide;
pub mod velocity;

pub use easing::Easing;
pub use fling::FlingDecay;
pub use glide::Glide;
pub use velocity::{PointerSample, VelocityTracker};
