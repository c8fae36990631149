//! CSS-style textual gradient descriptor.

use gradlab_gradient::{GradientShape, GradientSpec, sample};

/// Format the spec as a CSS gradient string.
///
/// The stop list holds one `#RRGGBB P%` entry per sampled color (uppercase
/// hex, position with one decimal place), so the string is a faithful preview
/// of the sampled ramp at the spec's resolution.
pub fn descriptor(spec: &GradientSpec) -> String {
    let colors = sample(spec);
    let last = (spec.resolution() - 1) as f32;
    let stop_list = colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{} {:.1}%", color.to_hex(), i as f32 / last * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    match spec.shape() {
        GradientShape::Linear => {
            format!("linear-gradient({}deg, {})", spec.angle(), stop_list)
        }
        GradientShape::Radial => format!("radial-gradient(circle, {})", stop_list),
        GradientShape::Conic => {
            format!("conic-gradient(from {}deg, {})", spec.angle(), stop_list)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradlab_gradient::{ColorSpace, ColorStop};

    fn spec(shape: GradientShape, angle: f32, resolution: u32) -> GradientSpec {
        GradientSpec::new(
            vec![
                ColorStop::parse("#FF6B6B", 0.0).unwrap(),
                ColorStop::parse("#FFD93D", 50.0).unwrap(),
                ColorStop::parse("#6BCB77", 100.0).unwrap(),
            ],
            ColorSpace::Rgb,
            shape,
            angle,
            resolution,
        )
        .unwrap()
    }

    #[test]
    fn test_linear_descriptor_exact() {
        assert_eq!(
            descriptor(&spec(GradientShape::Linear, 90.0, 3)),
            "linear-gradient(90deg, #FF6B6B 0.0%, #FFD93D 50.0%, #6BCB77 100.0%)"
        );
    }

    #[test]
    fn test_radial_descriptor_omits_angle() {
        let css = descriptor(&spec(GradientShape::Radial, 90.0, 3));
        assert!(css.starts_with("radial-gradient(circle, #FF6B6B 0.0%"));
        assert!(!css.contains("deg"));
    }

    #[test]
    fn test_conic_descriptor_from_angle() {
        let css = descriptor(&spec(GradientShape::Conic, 45.0, 3));
        assert!(css.starts_with("conic-gradient(from 45deg, "));
    }

    #[test]
    fn test_descriptor_entry_count_matches_resolution() {
        let css = descriptor(&spec(GradientShape::Linear, 90.0, 5));
        assert_eq!(css.matches('#').count(), 5);
        assert!(css.contains("25.0%"));
        assert!(css.contains("75.0%"));
    }
}
