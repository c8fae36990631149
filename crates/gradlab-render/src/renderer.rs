//! Gradient rasterization.
//!
//! Every pixel goes through the shape parametrization and the stop
//! interpolator at full float precision. The preview sampling table is never
//! consulted here; reusing it would quantize a large export to `resolution`
//! colors and band visibly.

use crate::{MAX_DIM, MIN_DIM, PixelBuffer, RenderError, css, shape};
use gradlab_gradient::{GradientSpec, RawGradientRequest};

/// Rows rasterized between two cancellation checks.
const CANCEL_CHECK_ROWS: u32 = 64;

/// Descriptor and pixel buffer for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    pub descriptor: String,
    pub buffer: PixelBuffer,
}

/// Rasterize the gradient into a `width` x `height` RGB8 buffer.
pub fn render(spec: &GradientSpec, width: u32, height: u32) -> Result<PixelBuffer, RenderError> {
    render_with_cancel(spec, width, height, || false)
}

/// Rasterize with a cooperative cancellation check between row batches.
///
/// The callback runs every [`CANCEL_CHECK_ROWS`] rows; returning `true`
/// aborts with [`RenderError::Cancelled`] and no partial buffer escapes.
pub fn render_with_cancel(
    spec: &GradientSpec,
    width: u32,
    height: u32,
    mut cancel: impl FnMut() -> bool,
) -> Result<PixelBuffer, RenderError> {
    if !(MIN_DIM..=MAX_DIM).contains(&width) || !(MIN_DIM..=MAX_DIM).contains(&height) {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    tracing::debug!("Rendering {:?} gradient at {}x{}", spec.shape(), width, height);

    let mut buffer = PixelBuffer::new(width, height)?;
    for y in 0..height {
        if y % CANCEL_CHECK_ROWS == 0 && cancel() {
            return Err(RenderError::Cancelled);
        }
        for x in 0..width {
            let t = shape::parameter_at(
                spec.shape(),
                spec.angle(),
                width,
                height,
                x as f32,
                y as f32,
            );
            buffer.set_pixel(x, y, spec.color_at(t));
        }
    }

    tracing::debug!("Rendered {} pixels", width as u64 * height as u64);
    Ok(buffer)
}

/// Validate a wire request and produce both outputs. This is the single
/// entry point the transport layer calls.
pub fn render_request(
    raw: RawGradientRequest,
    width: u32,
    height: u32,
) -> Result<RenderOutput, RenderError> {
    let spec = GradientSpec::try_from(raw)?;
    let descriptor = css::descriptor(&spec);
    let buffer = render(&spec, width, height)?;
    Ok(RenderOutput { descriptor, buffer })
}
