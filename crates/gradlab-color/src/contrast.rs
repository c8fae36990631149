//! WCAG relative luminance and contrast ratio.

use crate::Color;

/// WCAG AA contrast threshold for normal text.
pub const AA_CONTRAST: f32 = 4.5;

fn linearize(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]` per WCAG 2.x.
pub fn relative_luminance(color: Color) -> f32 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, in `[1, 21]`. Order-independent.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Whether the pair clears the WCAG AA 4.5:1 threshold.
pub fn meets_aa(a: Color, b: Color) -> bool {
    contrast_ratio(a, b) >= AA_CONTRAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_black_white_ratio() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert_eq!(ratio, contrast_ratio(Color::WHITE, Color::BLACK));
    }

    #[test]
    fn test_meets_aa() {
        assert!(meets_aa(Color::BLACK, Color::WHITE));
        // Mid-gray on white fails AA.
        assert!(!meets_aa(Color::rgb(160, 160, 160), Color::WHITE));
    }

    #[test]
    fn test_identical_colors_ratio_one() {
        assert!((contrast_ratio(Color::RED, Color::RED) - 1.0).abs() < 1e-6);
    }
}
