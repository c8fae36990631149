//! Shape parametrization - pixel coordinate to gradient parameter.
//!
//! CSS angle convention throughout: 0° points up, 90° points right, measured
//! clockwise. Screen coordinates grow downward, so the unit axis for angle
//! `a` is `(sin a, -cos a)`.

use gradlab_gradient::GradientShape;

/// Map a pixel coordinate to a gradient parameter in `[0, 100]`.
///
/// Linear and radial clamp; conic is cyclic and wraps at the seam angle.
pub fn parameter_at(
    shape: GradientShape,
    angle_deg: f32,
    width: u32,
    height: u32,
    x: f32,
    y: f32,
) -> f32 {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let dx = x - cx;
    let dy = y - cy;

    match shape {
        GradientShape::Linear => {
            let a = angle_deg.to_radians();
            let (sin_a, cos_a) = a.sin_cos();
            let proj = dx * sin_a - dy * cos_a;
            // Half-span to the bounding-box corners along the axis, so the
            // first and last stop land exactly on the extreme corners.
            let half_span = cx * sin_a.abs() + cy * cos_a.abs();
            if half_span == 0.0 {
                return 0.0;
            }
            ((proj / (2.0 * half_span) + 0.5) * 100.0).clamp(0.0, 100.0)
        }
        GradientShape::Radial => {
            let max_radius = (cx * cx + cy * cy).sqrt();
            if max_radius == 0.0 {
                return 0.0;
            }
            let dist = (dx * dx + dy * dy).sqrt();
            (dist / max_radius * 100.0).clamp(0.0, 100.0)
        }
        GradientShape::Conic => {
            // Clockwise sweep from the start angle; atan2(0, 0) is 0, so the
            // exact center resolves as pointing at the start angle.
            let theta = dx.atan2(-dy).to_degrees();
            (theta - angle_deg).rem_euclid(360.0) / 360.0 * 100.0
        }
    }
}
