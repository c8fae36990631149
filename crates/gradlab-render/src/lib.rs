//! Gradient Lab Render
//!
//! Turns a validated `GradientSpec` into the two request outputs: a CSS-style
//! textual descriptor and a row-major RGB8 pixel buffer. Export pixels are
//! resolved through the stop interpolator at full float precision, never
//! through the coarse preview table, so large exports show no banding.
//!
//! The buffer is raw pixels only; container encoding (PNG etc.) belongs to
//! the caller.

mod buffer;
mod css;
mod renderer;
mod shape;

pub use buffer::PixelBuffer;
pub use css::descriptor;
pub use renderer::{RenderOutput, render, render_request, render_with_cancel};
pub use shape::parameter_at;

use gradlab_gradient::GradientError;

/// Export dimension bounds, in pixels per side.
pub const MIN_DIM: u32 = 32;
pub const MAX_DIM: u32 = 8192;

/// Rendering error
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RenderError {
    #[error("export dimensions {width}x{height} outside {MIN_DIM}..={MAX_DIM}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("render cancelled")]
    Cancelled,
    #[error(transparent)]
    Gradient(#[from] GradientError),
}
