//! Stop interpolation and fixed-resolution sampling.

use crate::{ColorSpace, ColorStop, GradientSpec};
use gradlab_color::{Color, Hsl, Hsv, lerp_hue};

/// Resolve the color at `t` in `[0, 100]` against a position-sorted stop
/// list.
///
/// Positions at or beyond the outermost stops return the endpoint colors
/// unchanged (no extrapolation). When several stops share a position, the
/// last of them wins at that exact coordinate.
pub fn color_at(stops: &[ColorStop], space: ColorSpace, t: f32) -> Color {
    debug_assert!(stops.len() >= 2, "stop list validated upstream");
    let first = &stops[0];
    let last = &stops[stops.len() - 1];
    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    // Linear scan: at most 12 stops, and taking the last matching bracket
    // makes the later stop win where positions coincide.
    let mut bracket = 0;
    for (i, pair) in stops.windows(2).enumerate() {
        if pair[0].position <= t && t <= pair[1].position {
            bracket = i;
        }
    }
    let left = &stops[bracket];
    let right = &stops[bracket + 1];

    if left.position == right.position {
        return right.color;
    }
    let frac = (t - left.position) / (right.position - left.position);
    blend(space, left.color, right.color, frac)
}

/// Blend two colors in the given space at `frac` in `[0, 1]`.
fn blend(space: ColorSpace, from: Color, to: Color, frac: f32) -> Color {
    match space {
        ColorSpace::Rgb => Color::rgb(
            lerp_channel(from.r, to.r, frac),
            lerp_channel(from.g, to.g, frac),
            lerp_channel(from.b, to.b, frac),
        ),
        ColorSpace::Hsl => {
            let a = Hsl::from_rgb(from);
            let b = Hsl::from_rgb(to);
            Hsl::new(
                lerp_hue(a.h, b.h, frac),
                a.s + (b.s - a.s) * frac,
                a.l + (b.l - a.l) * frac,
            )
            .to_rgb()
        }
        ColorSpace::Hsv => {
            let a = Hsv::from_rgb(from);
            let b = Hsv::from_rgb(to);
            Hsv::new(
                lerp_hue(a.h, b.h, frac),
                a.s + (b.s - a.s) * frac,
                a.v + (b.v - a.v) * frac,
            )
            .to_rgb()
        }
    }
}

// Truncates toward zero, like every other float-to-channel conversion.
fn lerp_channel(a: u8, b: u8, frac: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * frac) as u8
}

/// Sample exactly `resolution` colors across the gradient domain, both
/// endpoints inclusive.
///
/// Feeds the textual descriptor and cheap previews. Nothing is cached;
/// requests are independent.
pub fn sample(spec: &GradientSpec) -> Vec<Color> {
    let resolution = spec.resolution();
    let last = (resolution - 1) as f32;
    (0..resolution)
        .map(|i| color_at(spec.stops(), spec.space(), i as f32 / last * 100.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GradientShape;

    fn stop(hex: &str, position: f32) -> ColorStop {
        ColorStop::parse(hex, position).unwrap()
    }

    fn two_stop_spec(space: ColorSpace, resolution: u32) -> GradientSpec {
        GradientSpec::new(
            vec![stop("#FF0000", 0.0), stop("#0000FF", 100.0)],
            space,
            GradientShape::Linear,
            90.0,
            resolution,
        )
        .unwrap()
    }

    #[test]
    fn test_endpoints_exact_in_all_spaces() {
        let stops = vec![stop("#FF6B6B", 10.0), stop("#6BCB77", 90.0)];
        for space in [ColorSpace::Rgb, ColorSpace::Hsl, ColorSpace::Hsv] {
            assert_eq!(color_at(&stops, space, 0.0), stops[0].color);
            assert_eq!(color_at(&stops, space, 10.0), stops[0].color);
            assert_eq!(color_at(&stops, space, 90.0), stops[1].color);
            assert_eq!(color_at(&stops, space, 100.0), stops[1].color);
        }
    }

    #[test]
    fn test_rgb_midpoint() {
        let spec = two_stop_spec(ColorSpace::Rgb, 3);
        assert_eq!(spec.color_at(50.0), Color::rgb(127, 0, 127));
    }

    #[test]
    fn test_sample_three_colors() {
        let spec = two_stop_spec(ColorSpace::Rgb, 3);
        let colors = sample(&spec);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].to_hex(), "#FF0000");
        assert_eq!(colors[1].to_hex(), "#7F007F");
        assert_eq!(colors[2].to_hex(), "#0000FF");
    }

    #[test]
    fn test_sample_length_matches_resolution() {
        for resolution in [2, 5, 32, 1024] {
            let spec = two_stop_spec(ColorSpace::Rgb, resolution);
            assert_eq!(sample(&spec).len(), resolution as usize);
        }
    }

    #[test]
    fn test_duplicate_position_later_stop_wins() {
        let stops = vec![
            stop("#000000", 0.0),
            stop("#FF0000", 50.0),
            stop("#00FF00", 50.0),
            stop("#FFFFFF", 100.0),
        ];
        assert_eq!(color_at(&stops, ColorSpace::Rgb, 50.0), Color::GREEN);
        // Just past the coincidence the second segment takes over smoothly.
        let just_after = color_at(&stops, ColorSpace::Rgb, 50.1);
        assert!(just_after.g > 250);
    }

    #[test]
    fn test_hsl_shortest_arc_crosses_seam() {
        // Hue 350° and hue 10°, full saturation, half lightness. The midpoint
        // must land at hue 0 (red), not at hue 180 (cyan).
        let a = Hsl::new(350.0, 100.0, 50.0).to_rgb();
        let b = Hsl::new(10.0, 100.0, 50.0).to_rgb();
        let stops = vec![ColorStop::new(a, 0.0), ColorStop::new(b, 100.0)];

        let mid = color_at(&stops, ColorSpace::Hsl, 50.0);
        let mid_hsl = Hsl::from_rgb(mid);
        let seam_distance = mid_hsl.h.min(360.0 - mid_hsl.h);
        assert!(seam_distance < 1.5, "midpoint hue drifted to {}", mid_hsl.h);
        assert!(mid.r > 250 && mid.g < 30 && mid.b < 30);
    }

    #[test]
    fn test_hsv_blend_stays_in_space() {
        let stops = vec![stop("#FF0000", 0.0), stop("#00FF00", 100.0)];
        let mid = color_at(&stops, ColorSpace::Hsv, 50.0);
        // Halfway between red and green in HSV is yellow-ish, not the muddy
        // RGB average.
        let mid_hsv = Hsv::from_rgb(mid);
        assert!((mid_hsv.h - 60.0).abs() < 1.5);
    }

    #[test]
    fn test_interior_stop_hit_exactly() {
        let stops = vec![stop("#FF0000", 0.0), stop("#FFD93D", 50.0), stop("#0000FF", 100.0)];
        assert_eq!(color_at(&stops, ColorSpace::Rgb, 50.0).to_hex(), "#FFD93D");
    }
}
