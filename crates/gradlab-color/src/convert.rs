//! RGB ↔ HSL / HSV conversions
//!
//! Standard six-sector hue math. When max == min the hue and saturation are
//! defined as 0. Channel values going back to RGB8 truncate toward zero.

use crate::Color;

/// Color in HSL space: hue `[0, 360)`, saturation and lightness `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Color in HSV space: hue `[0, 360)`, saturation and value `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Wrap a hue angle into `[0, 360)`.
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0 in f32.
    if h >= 360.0 { 0.0 } else { h }
}

/// Blend two hue angles along the shortest arc.
///
/// `delta` lands in `(-180, 180]`, so 350° → 10° passes through 0° (20° of
/// arc) instead of going the long way around.
pub fn lerp_hue(h1: f32, h2: f32, frac: f32) -> f32 {
    let delta = (h2 - h1 + 540.0).rem_euclid(360.0) - 180.0;
    normalize_hue(h1 + delta * frac)
}

/// Hue in degrees from normalized channels and their max/min, six-sector.
fn hue_from_channels(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(h * 60.0)
}

fn clamp_pct(v: f32) -> f32 {
    v.clamp(0.0, 100.0)
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h: normalize_hue(h), s: clamp_pct(s), l: clamp_pct(l) }
    }

    pub fn from_rgb(color: Color) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let delta = max - min;
        let s = if l > 0.5 { delta / (2.0 - max - min) } else { delta / (max + min) };
        let h = hue_from_channels(r, g, b, max, delta);
        Self::new(h, s * 100.0, l * 100.0)
    }

    pub fn to_rgb(&self) -> Color {
        let h = normalize_hue(self.h);
        let s = clamp_pct(self.s) / 100.0;
        let l = clamp_pct(self.l) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;
        sector_to_rgb(h, c, x, m)
    }
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h: normalize_hue(h), s: clamp_pct(s), v: clamp_pct(v) }
    }

    pub fn from_rgb(color: Color) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == min {
            return Self::new(0.0, 0.0, max * 100.0);
        }

        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = hue_from_channels(r, g, b, max, delta);
        Self::new(h, s * 100.0, max * 100.0)
    }

    pub fn to_rgb(&self) -> Color {
        let h = normalize_hue(self.h);
        let s = clamp_pct(self.s) / 100.0;
        let v = clamp_pct(self.v) / 100.0;

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = v - c;
        sector_to_rgb(h, c, x, m)
    }
}

fn sector_to_rgb(h: f32, c: f32, x: f32, m: f32) -> Color {
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    // Truncate toward zero, matching the rest of the channel math.
    Color::rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
