//! Configuration validation errors
//!
//! Runtime edge conditions (out-of-range item requests, unmeasured item
//! extent, an empty adapter) are resolved locally by clamping or no-op per
//! the engine contract; only misconfiguration is surfaced as an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("visible_items must be an odd integer >= 1, got {0}")]
    VisibleItemsNotOdd(u32),

    #[error("dimmed_alpha_floor must be in 0..=100, got {0}")]
    DimmedAlphaOutOfRange(u32),

    #[error("item_offset_percent must be in 0..=100, got {0}")]
    ItemOffsetOutOfRange(u32),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
