//! Wheel interaction lifecycle
//!
//! A flat state machine describing what currently drives offset changes:
//!
//! ```text
//! Idle -> Dragging -> (Flinging | Settling) -> Idle
//! ```
//!
//! `Idle` is both the initial state and the terminal state of each gesture.
//! A pointer-down while Flinging or Settling cancels the in-flight motion
//! and re-enters Dragging; cancellation is instantaneous, there is nothing
//! to await.

use crate::events::{event_types, EventType};

/// Trait for state types driven by event-type constants
///
/// Returns the new state when the event triggers a transition, `None` when
/// the event is ignored in the current state.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// What is currently driving offset changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    /// No motion in flight
    #[default]
    Idle,
    /// Finger down, offset follows the pointer
    Dragging,
    /// Finger lifted with velocity, deceleration simulation running
    Flinging,
    /// Snap glide animating the offset back to zero
    Settling,
}

impl StateTransitions for Lifecycle {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (Lifecycle::Idle, POINTER_DOWN) => Some(Lifecycle::Dragging),
            // Re-entrant pointer-down cancels in-flight motion
            (Lifecycle::Flinging, POINTER_DOWN) => Some(Lifecycle::Dragging),
            (Lifecycle::Settling, POINTER_DOWN) => Some(Lifecycle::Dragging),
            (Lifecycle::Dragging, FLING_START) => Some(Lifecycle::Flinging),
            (Lifecycle::Dragging, SETTLE_START) => Some(Lifecycle::Settling),
            (Lifecycle::Flinging, SETTLE_START) => Some(Lifecycle::Settling),
            // A host-initiated justify may start from rest
            (Lifecycle::Idle, SETTLE_START) => Some(Lifecycle::Settling),
            (Lifecycle::Settling, SETTLED) => Some(Lifecycle::Idle),
            _ => None,
        }
    }
}

impl Lifecycle {
    /// Check if any motion is in flight
    pub fn is_active(&self) -> bool {
        !matches!(self, Lifecycle::Idle)
    }

    /// Check if the frame driver should keep calling `tick`
    pub fn needs_ticks(&self) -> bool {
        matches!(self, Lifecycle::Flinging | Lifecycle::Settling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    fn send(state: Lifecycle, event: EventType) -> Lifecycle {
        state.on_event(event).unwrap_or(state)
    }

    #[test]
    fn test_full_fling_gesture() {
        let mut state = Lifecycle::Idle;
        state = send(state, POINTER_DOWN);
        assert_eq!(state, Lifecycle::Dragging);
        state = send(state, FLING_START);
        assert_eq!(state, Lifecycle::Flinging);
        state = send(state, SETTLE_START);
        assert_eq!(state, Lifecycle::Settling);
        state = send(state, SETTLED);
        assert_eq!(state, Lifecycle::Idle);
    }

    #[test]
    fn test_slow_release_skips_fling() {
        let mut state = Lifecycle::Dragging;
        state = send(state, SETTLE_START);
        assert_eq!(state, Lifecycle::Settling);
    }

    #[test]
    fn test_pointer_down_cancels_in_flight_motion() {
        assert_eq!(
            Lifecycle::Flinging.on_event(POINTER_DOWN),
            Some(Lifecycle::Dragging)
        );
        assert_eq!(
            Lifecycle::Settling.on_event(POINTER_DOWN),
            Some(Lifecycle::Dragging)
        );
    }

    #[test]
    fn test_pointer_down_idempotent_while_dragging() {
        assert_eq!(Lifecycle::Dragging.on_event(POINTER_DOWN), None);
    }

    #[test]
    fn test_justify_from_rest() {
        assert_eq!(
            Lifecycle::Idle.on_event(SETTLE_START),
            Some(Lifecycle::Settling)
        );
    }

    #[test]
    fn test_invalid_events_ignored() {
        assert_eq!(Lifecycle::Idle.on_event(SETTLED), None);
        assert_eq!(Lifecycle::Idle.on_event(FLING_START), None);
        assert_eq!(Lifecycle::Flinging.on_event(SETTLED), None);
    }

    #[test]
    fn test_activity_flags() {
        assert!(!Lifecycle::Idle.is_active());
        assert!(Lifecycle::Dragging.is_active());
        assert!(!Lifecycle::Dragging.needs_ticks());
        assert!(Lifecycle::Flinging.needs_ticks());
        assert!(Lifecycle::Settling.needs_ticks());
    }
}
