//! Gradient data model and boundary validation.
//!
//! All range checks live here, at the edge: once a `GradientSpec` exists its
//! invariants hold, and the interpolation code never re-validates.

use serde::{Deserialize, Serialize};

use crate::{GradientError, MAX_STEPS, MAX_STOPS, MIN_STEPS, MIN_STOPS};
use gradlab_color::{Color, normalize_hue};

/// A color anchored at a position along the gradient domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Color,
    /// Position percentage in `[0, 100]`.
    pub position: f32,
}

impl ColorStop {
    pub fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }

    /// Build a stop from the transport's hex-string form.
    pub fn parse(hex: &str, position: f32) -> Result<Self, GradientError> {
        Ok(Self::new(Color::from_hex(hex)?, position))
    }
}

/// Color space in which stop-to-stop blending is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsl,
    Hsv,
}

/// Gradient shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientShape {
    #[default]
    Linear,
    Radial,
    Conic,
}

/// A fully validated gradient description.
///
/// Constructed only through [`GradientSpec::new`]; stops are stable-sorted
/// ascending by position (ties keep input order) and the angle is normalized
/// into `[0, 360)`. Immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<ColorStop>,
    space: ColorSpace,
    shape: GradientShape,
    angle: f32,
    resolution: u32,
}

impl GradientSpec {
    pub fn new(
        stops: Vec<ColorStop>,
        space: ColorSpace,
        shape: GradientShape,
        angle: f32,
        resolution: u32,
    ) -> Result<Self, GradientError> {
        if stops.len() < MIN_STOPS || stops.len() > MAX_STOPS {
            return Err(GradientError::InvalidStopCount { count: stops.len() });
        }
        for stop in &stops {
            if !stop.position.is_finite() || stop.position < 0.0 || stop.position > 100.0 {
                return Err(GradientError::InvalidPosition { position: stop.position });
            }
        }
        if !(MIN_STEPS..=MAX_STEPS).contains(&resolution) {
            return Err(GradientError::InvalidStepCount { steps: resolution });
        }

        let mut stops = stops;
        // sort_by is stable, so stops sharing a position keep input order.
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));

        tracing::debug!(
            "Built gradient spec: {} stops, {:?}/{:?}, {} samples",
            stops.len(),
            space,
            shape,
            resolution
        );

        Ok(Self { stops, space, shape, angle: normalize_hue(angle), resolution })
    }

    /// Stops in ascending position order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn shape(&self) -> GradientShape {
        self.shape
    }

    /// Angle in degrees, `[0, 360)`. Meaningful for linear and conic shapes.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Preview sample count in `[2, 1024]`.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Resolve the color at position `t` in `[0, 100]`.
    pub fn color_at(&self, t: f32) -> Color {
        crate::interpolate::color_at(&self.stops, self.space, t)
    }
}

/// One stop of an unvalidated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStop {
    pub color: String,
    pub position: f32,
}

/// Wire-shaped gradient request, field names and defaults matching the
/// public API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGradientRequest {
    pub stops: Vec<RawStop>,
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default)]
    pub space: ColorSpace,
    #[serde(rename = "type", default)]
    pub shape: GradientShape,
    #[serde(default = "default_angle")]
    pub angle: f32,
}

fn default_steps() -> u32 {
    32
}

fn default_angle() -> f32 {
    90.0
}

impl TryFrom<RawGradientRequest> for GradientSpec {
    type Error = GradientError;

    fn try_from(raw: RawGradientRequest) -> Result<Self, GradientError> {
        // Count first: a wrong-sized list fails before any color parsing.
        if raw.stops.len() < MIN_STOPS || raw.stops.len() > MAX_STOPS {
            return Err(GradientError::InvalidStopCount { count: raw.stops.len() });
        }
        let stops = raw
            .stops
            .iter()
            .map(|s| ColorStop::parse(&s.color, s.position))
            .collect::<Result<Vec<_>, _>>()?;
        GradientSpec::new(stops, raw.space, raw.shape, raw.angle, raw.steps)
    }
}
