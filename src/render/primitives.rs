use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> RadarResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || RadarError::InvalidData(format!("invalid hex color `{hex}`"));

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };

        match digits.len() {
            6 => Ok(Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let base = Self::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                Ok(Self {
                    alpha: f64::from(channel(6..8)?) / 255.0,
                    ..base
                })
            }
            _ => Err(invalid()),
        }
    }

    /// Same color with a replacement alpha channel.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one stroked circle in pixel space.
///
/// `fill` is `None` for the transparent gridline rings and `Some` for label
/// backing circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke: Color,
    pub fill: Option<Color>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(
        center: Point,
        radius: f64,
        stroke_width: f64,
        stroke: Color,
        fill: Option<Color>,
    ) -> Self {
        Self {
            center,
            radius,
            stroke_width,
            stroke,
            fill,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0 {
            return Err(RadarError::InvalidData(
                "circle center and radius must be finite, radius >= 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "circle stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one closed filled polygon in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<Point>,
    pub fill: Color,
    pub fill_opacity: f64,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(vertices: Vec<Point>, fill: Color, fill_opacity: f64) -> Self {
        Self {
            vertices,
            fill,
            fill_opacity,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.vertices.is_empty() {
            return Err(RadarError::InvalidData(
                "polygon must have at least one vertex".to_owned(),
            ));
        }
        if self.vertices.iter().any(|v| !v.is_finite()) {
            return Err(RadarError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(RadarError::InvalidData(
                "polygon fill opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, stroke_width: f64, color: Color) -> Self {
        Self {
            from,
            to,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(RadarError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Font settings resolved from label configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn validate(&self) -> RadarResult<()> {
        if self.family.is_empty() {
            return Err(RadarError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(RadarError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub font: FontSpec,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: Point,
        font: FontSpec,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(RadarError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.font.validate()?;
        self.color.validate()
    }
}
