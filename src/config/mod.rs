//! Chart configuration: documented defaults plus an explicit patch merge.
//!
//! Callers describe overrides with [`ChartOptionsPatch`], where every field is
//! optional; [`ChartOptionsPatch::resolve`] applies them onto the defaults
//! field by field. Nested groups (margin, label, animation) merge per field as
//! well, never by whole-object replacement.

use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};
use crate::render::Color;

const DEFAULT_SIZE: f64 = 600.0;
const DEFAULT_MARGIN: f64 = 20.0;
const DEFAULT_RADIUS: f64 = 300.0;
const DEFAULT_MAX_VALUE: f64 = 150.0;
const DEFAULT_RING_COUNT: u32 = 3;
const DEFAULT_FILL: Color = Color::rgb8(0x29, 0x80, 0xB9);
const DEFAULT_STROKE: Color = Color::rgb8(0x29, 0x80, 0xB9);
const DEFAULT_LABEL_COLOR: Color = Color::rgb8(0x34, 0x49, 0x5E);
const DEFAULT_CIRCLE_BORDER: Color = Color::rgb8(0x80, 0x80, 0x80);
const DEFAULT_CIRCLE_FILL: Color = Color::rgb8(0xFF, 0xFF, 0xFF);

/// Outer padding around the chart area, per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: DEFAULT_MARGIN,
            left: DEFAULT_MARGIN,
            right: DEFAULT_MARGIN,
            bottom: DEFAULT_MARGIN,
        }
    }
}

/// Series fill selection.
///
/// `PerSeries` indexes the palette by series position; a palette shorter than
/// the dataset clamps to its last color rather than wrapping or failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillSpec {
    Uniform(Color),
    PerSeries(Vec<Color>),
}

impl FillSpec {
    /// Fill color for the series at `index`.
    ///
    /// Returns `None` only for an empty `PerSeries` palette, which
    /// [`ChartOptions::validate`] rejects up front.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Option<Color> {
        match self {
            Self::Uniform(color) => Some(*color),
            Self::PerSeries(palette) => palette.get(index).or_else(|| palette.last()).copied(),
        }
    }
}

/// Axis label typography and optional backing-circle styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub font_family: String,
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    /// Draw a backing circle behind each label.
    pub circle: bool,
    pub circle_border_color: Color,
    pub circle_fill_color: Color,
    pub circle_stroke_width: f64,
    /// Axis name highlighted with the active circle variants.
    pub active_label: Option<String>,
    pub active_circle_border_color: Color,
    pub active_circle_fill_color: Color,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_owned(),
            font_size: 14.0,
            bold: true,
            italic: false,
            color: DEFAULT_LABEL_COLOR,
            circle: false,
            circle_border_color: DEFAULT_CIRCLE_BORDER,
            circle_fill_color: DEFAULT_CIRCLE_FILL,
            circle_stroke_width: 1.0,
            active_label: None,
            active_circle_border_color: DEFAULT_CIRCLE_BORDER,
            active_circle_fill_color: DEFAULT_CIRCLE_FILL,
        }
    }
}

/// Animation pacing hints, carried through for renderer consumers.
/// Layout and scene assembly ignore them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    OneByOne,
    Delayed,
    Async,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationHints {
    pub kind: AnimationKind,
    pub duration_ms: u32,
    pub fill_transition: u32,
}

impl Default for AnimationHints {
    fn default() -> Self {
        Self {
            kind: AnimationKind::OneByOne,
            duration_ms: 200,
            fill_transition: 3,
        }
    }
}

/// Fully resolved chart configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_size")]
    pub width: f64,
    #[serde(default = "default_size")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default = "default_ring_count")]
    pub rings: u32,
    #[serde(default = "default_fill")]
    pub fill: FillSpec,
    #[serde(default = "default_stroke")]
    pub stroke: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub label: LabelOptions,
    #[serde(default)]
    pub animation: AnimationHints,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            margin: Margin::default(),
            radius: DEFAULT_RADIUS,
            max_value: DEFAULT_MAX_VALUE,
            rings: DEFAULT_RING_COUNT,
            fill: default_fill(),
            stroke: DEFAULT_STROKE,
            stroke_width: 1.0,
            label: LabelOptions::default(),
            animation: AnimationHints::default(),
        }
    }
}

impl ChartOptions {
    /// Chart area width after horizontal margins.
    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Chart area height after vertical margins.
    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> RadarResult<()> {
        for (field, v) in [
            ("width", self.width),
            ("height", self.height),
            ("margin.top", self.margin.top),
            ("margin.left", self.margin.left),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("radius", self.radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(RadarError::Configuration(format!(
                    "`{field}` must be finite and >= 0, got {v}"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "chart size must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "`max_value` must be finite and > 0, got {}",
                self.max_value
            )));
        }
        if self.rings == 0 {
            return Err(RadarError::Configuration("`rings` must be >= 1".to_owned()));
        }
        if let FillSpec::PerSeries(palette) = &self.fill {
            if palette.is_empty() {
                return Err(RadarError::Configuration(
                    "per-series fill palette must not be empty".to_owned(),
                ));
            }
            for color in palette {
                color.validate().map_err(config_from_data)?;
            }
        } else if let FillSpec::Uniform(color) = &self.fill {
            color.validate().map_err(config_from_data)?;
        }
        self.stroke.validate().map_err(config_from_data)?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "`stroke_width` must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        if self.label.font_family.is_empty() {
            return Err(RadarError::Configuration(
                "label font family must not be empty".to_owned(),
            ));
        }
        if !self.label.font_size.is_finite() || self.label.font_size <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "label font size must be finite and > 0, got {}",
                self.label.font_size
            )));
        }
        if !self.label.circle_stroke_width.is_finite() || self.label.circle_stroke_width <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "label circle stroke width must be finite and > 0, got {}",
                self.label.circle_stroke_width
            )));
        }
        Ok(())
    }

    /// Serializes options to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON; absent fields fall back to defaults.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidData(format!("failed to parse options: {e}")))
    }
}

fn config_from_data(err: RadarError) -> RadarError {
    match err {
        RadarError::InvalidData(msg) => RadarError::Configuration(msg),
        other => other,
    }
}

/// Per-field margin overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginPatch {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
}

impl MarginPatch {
    fn apply_to(&self, mut base: Margin) -> Margin {
        if let Some(v) = self.top {
            base.top = v;
        }
        if let Some(v) = self.left {
            base.left = v;
        }
        if let Some(v) = self.right {
            base.right = v;
        }
        if let Some(v) = self.bottom {
            base.bottom = v;
        }
        base
    }
}

/// Per-field label overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelOptionsPatch {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub bold: Option<bool>,
    #[serde(default)]
    pub italic: Option<bool>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub circle: Option<bool>,
    #[serde(default)]
    pub circle_border_color: Option<Color>,
    #[serde(default)]
    pub circle_fill_color: Option<Color>,
    #[serde(default)]
    pub circle_stroke_width: Option<f64>,
    #[serde(default)]
    pub active_label: Option<String>,
    #[serde(default)]
    pub active_circle_border_color: Option<Color>,
    #[serde(default)]
    pub active_circle_fill_color: Option<Color>,
}

impl LabelOptionsPatch {
    fn apply_to(&self, mut base: LabelOptions) -> LabelOptions {
        if let Some(v) = &self.font_family {
            base.font_family = v.clone();
        }
        if let Some(v) = self.font_size {
            base.font_size = v;
        }
        if let Some(v) = self.bold {
            base.bold = v;
        }
        if let Some(v) = self.italic {
            base.italic = v;
        }
        if let Some(v) = self.color {
            base.color = v;
        }
        if let Some(v) = self.circle {
            base.circle = v;
        }
        if let Some(v) = self.circle_border_color {
            base.circle_border_color = v;
        }
        if let Some(v) = self.circle_fill_color {
            base.circle_fill_color = v;
        }
        if let Some(v) = self.circle_stroke_width {
            base.circle_stroke_width = v;
        }
        if let Some(v) = &self.active_label {
            base.active_label = Some(v.clone());
        }
        if let Some(v) = self.active_circle_border_color {
            base.active_circle_border_color = v;
        }
        if let Some(v) = self.active_circle_fill_color {
            base.active_circle_fill_color = v;
        }
        base
    }
}

/// Per-field animation hint overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationHintsPatch {
    #[serde(default)]
    pub kind: Option<AnimationKind>,
    #[serde(default)]
    pub duration_ms: Option<u32>,
    #[serde(default)]
    pub fill_transition: Option<u32>,
}

impl AnimationHintsPatch {
    fn apply_to(&self, mut base: AnimationHints) -> AnimationHints {
        if let Some(v) = self.kind {
            base.kind = v;
        }
        if let Some(v) = self.duration_ms {
            base.duration_ms = v;
        }
        if let Some(v) = self.fill_transition {
            base.fill_transition = v;
        }
        base
    }
}

/// Caller-supplied overrides; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsPatch {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub margin: Option<MarginPatch>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub rings: Option<u32>,
    #[serde(default)]
    pub fill: Option<FillSpec>,
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub label: Option<LabelOptionsPatch>,
    #[serde(default)]
    pub animation: Option<AnimationHintsPatch>,
}

impl ChartOptionsPatch {
    /// Applies this patch onto the documented defaults.
    #[must_use]
    pub fn resolve(&self) -> ChartOptions {
        self.apply_to(ChartOptions::default())
    }

    /// Applies this patch onto an arbitrary base, field by field.
    #[must_use]
    pub fn apply_to(&self, mut base: ChartOptions) -> ChartOptions {
        if let Some(v) = self.width {
            base.width = v;
        }
        if let Some(v) = self.height {
            base.height = v;
        }
        if let Some(patch) = &self.margin {
            base.margin = patch.apply_to(base.margin);
        }
        if let Some(v) = self.radius {
            base.radius = v;
        }
        if let Some(v) = self.max_value {
            base.max_value = v;
        }
        if let Some(v) = self.rings {
            base.rings = v;
        }
        if let Some(v) = &self.fill {
            base.fill = v.clone();
        }
        if let Some(v) = self.stroke {
            base.stroke = v;
        }
        if let Some(v) = self.stroke_width {
            base.stroke_width = v;
        }
        if let Some(patch) = &self.label {
            base.label = patch.apply_to(base.label);
        }
        if let Some(patch) = &self.animation {
            base.animation = patch.apply_to(base.animation);
        }
        base
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    #[must_use]
    pub fn with_rings(mut self, rings: u32) -> Self {
        self.rings = Some(rings);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillSpec) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelOptionsPatch) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationHintsPatch) -> Self {
        self.animation = Some(animation);
        self
    }
}

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_max_value() -> f64 {
    DEFAULT_MAX_VALUE
}

fn default_ring_count() -> u32 {
    DEFAULT_RING_COUNT
}

fn default_fill() -> FillSpec {
    FillSpec::Uniform(DEFAULT_FILL)
}

fn default_stroke() -> Color {
    DEFAULT_STROKE
}

fn default_stroke_width() -> f64 {
    1.0
}
