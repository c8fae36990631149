//! Gradient Lab Gradient Model
//!
//! Validated, immutable gradient descriptions plus stop interpolation and
//! fixed-resolution sampling. A `GradientSpec` is built fresh per request and
//! never mutated; every operation on it is a pure function.

mod interpolate;
mod model;

pub use interpolate::{color_at, sample};
pub use model::{
    ColorSpace, ColorStop, GradientShape, GradientSpec, RawGradientRequest, RawStop,
};

use gradlab_color::ColorError;

/// Allowed stop count range.
pub const MIN_STOPS: usize = 2;
pub const MAX_STOPS: usize = 12;

/// Allowed preview sampling resolution range.
pub const MIN_STEPS: u32 = 2;
pub const MAX_STEPS: u32 = 1024;

/// Gradient validation error
///
/// Every variant is an input-validation failure detected before any
/// interpolation work begins. Retrying an identical request reproduces the
/// same error.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GradientError {
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
    #[error("stop count {count} outside {MIN_STOPS}..={MAX_STOPS}")]
    InvalidStopCount { count: usize },
    #[error("stop position {position} outside 0..=100")]
    InvalidPosition { position: f32 },
    #[error("step count {steps} outside {MIN_STEPS}..={MAX_STEPS}")]
    InvalidStepCount { steps: u32 },
}

impl From<ColorError> for GradientError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::InvalidColor(value) => GradientError::InvalidColor(value),
        }
    }
}
