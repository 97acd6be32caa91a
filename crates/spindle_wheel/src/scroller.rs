//! Scroll physics: pointer samples in, offset deltas out
//!
//! The scroller converts raw pointer motion into scalar axis deltas,
//! estimates release velocity over a bounded window, and runs at most one
//! in-flight motion simulation (fling decay or settle glide). It is
//! orientation-agnostic; the wheel engine owns the lifecycle state and
//! drives the scroller through it.

use spindle_motion::{FlingDecay, Glide, VelocityTracker};

/// The simulation currently producing deltas, if any
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    None,
    Fling {
        decay: FlingDecay,
        elapsed_ms: f64,
        travelled: f32,
    },
    Glide {
        glide: Glide,
        elapsed_ms: f64,
        last_value: f32,
    },
}

/// Incremental output of one animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    /// Offset delta to apply this tick, axis units
    pub delta: f32,
    /// True once the in-flight motion has fully decayed
    pub finished: bool,
}

/// Converts pointer samples into offset deltas and runs fling/glide
/// simulations over host-provided tick intervals
#[derive(Debug, Clone)]
pub struct Scroller {
    tracker: VelocityTracker,
    last_position: f32,
    motion: Motion,
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            tracker: VelocityTracker::new(),
            last_position: 0.0,
            motion: Motion::None,
        }
    }

    /// Start a gesture; cancels any in-flight motion immediately
    pub fn begin(&mut self, position: f32, timestamp_ms: f64) {
        self.motion = Motion::None;
        self.tracker.clear();
        self.tracker.push(position, timestamp_ms);
        self.last_position = position;
    }

    /// Record a drag sample and return the pointer delta since the last one
    pub fn drag(&mut self, position: f32, timestamp_ms: f64) -> f32 {
        let delta = position - self.last_position;
        self.tracker.push(position, timestamp_ms);
        self.last_position = position;
        delta
    }

    /// End the gesture and estimate release velocity in axis units/second
    pub fn release_velocity(&mut self, position: f32, timestamp_ms: f64) -> f32 {
        self.tracker.push(position, timestamp_ms);
        let velocity = self.tracker.velocity();
        self.tracker.clear();
        velocity
    }

    /// Begin a fling with the given release velocity
    pub fn start_fling(&mut self, velocity: f32, deceleration: f32) {
        tracing::debug!(velocity, deceleration, "fling start");
        self.motion = Motion::Fling {
            decay: FlingDecay::new(velocity, deceleration),
            elapsed_ms: 0.0,
            travelled: 0.0,
        };
    }

    /// Begin the settle glide from the given residual offset toward zero
    pub fn start_glide(&mut self, from_offset: f32, duration_ms: f64) {
        tracing::debug!(from_offset, duration_ms, "glide start");
        self.motion = Motion::Glide {
            glide: Glide::new(from_offset, duration_ms),
            elapsed_ms: 0.0,
            last_value: from_offset,
        };
    }

    /// Drop any in-flight motion; there is nothing to await
    pub fn cancel(&mut self) {
        self.motion = Motion::None;
        self.tracker.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.motion == Motion::None
    }

    /// Advance the in-flight simulation by `elapsed_ms` since the last tick
    ///
    /// Fling deltas are pointer-space increments of the decay curve; glide
    /// deltas walk the residual offset to zero. With no motion in flight
    /// the tick is a no-op reporting `finished`.
    pub fn tick(&mut self, elapsed_ms: f64) -> TickResult {
        let result = match &mut self.motion {
            Motion::None => TickResult {
                delta: 0.0,
                finished: true,
            },
            Motion::Fling {
                decay,
                elapsed_ms: total,
                travelled,
            } => {
                *total += elapsed_ms.max(0.0);
                let position = decay.position_at(*total);
                let delta = position - *travelled;
                *travelled = position;
                TickResult {
                    delta,
                    finished: decay.is_finished(*total),
                }
            }
            Motion::Glide {
                glide,
                elapsed_ms: total,
                last_value,
            } => {
                *total += elapsed_ms.max(0.0);
                let value = glide.value_at(*total);
                let delta = value - *last_value;
                *last_value = value;
                TickResult {
                    delta,
                    finished: glide.is_finished(*total),
                }
            }
        };
        if result.finished {
            self.motion = Motion::None;
        }
        result
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}
