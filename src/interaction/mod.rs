//! Label interactivity: invisible hit-test regions over each axis label.
//!
//! The host toolkit owns event capture and dispatch ordering; this module only
//! defines where the regions sit and which axis payload an activation carries.

use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::error::{RadarError, RadarResult};

/// Hit box side length and offsets are expressed in multiples of the label
/// font size, so regions grow with the label they cover.
const REGION_SIDE_FACTOR: f64 = 3.0;
const REGION_TOP_OFFSET_FACTOR: f64 = 2.0;

/// Payload delivered to the host when a label region is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEvent {
    pub axis: String,
    pub value: f64,
}

/// Invisible rectangular hit target over one axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchRegion {
    pub axis: String,
    /// Axis value from the dataset's first record, reported on activation.
    pub value: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TouchRegion {
    /// Places the hit box for a label drawn at `label_position`.
    ///
    /// Contract: a square of side `3 * font_size`, its top edge `2 * font_size`
    /// above the label baseline and its left edge half the box width left of
    /// it, so the box is horizontally centered on the label and extends just
    /// below it.
    #[must_use]
    pub fn for_label(
        axis: impl Into<String>,
        value: f64,
        label_position: Point,
        font_size: f64,
    ) -> Self {
        let side = font_size * REGION_SIDE_FACTOR;
        Self {
            axis: axis.into(),
            value,
            left: label_position.x - side / 2.0,
            top: label_position.y - font_size * REGION_TOP_OFFSET_FACTOR,
            width: side,
            height: side,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    #[must_use]
    pub fn event(&self) -> LabelEvent {
        LabelEvent {
            axis: self.axis.clone(),
            value: self.value,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.axis.is_empty() {
            return Err(RadarError::InvalidData(
                "touch region axis name must not be empty".to_owned(),
            ));
        }
        for (field, v) in [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !v.is_finite() {
                return Err(RadarError::InvalidData(format!(
                    "touch region `{field}` must be finite"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(RadarError::InvalidData(
                "touch region size must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Finds the first region containing `(x, y)` and invokes `handler` with its
/// payload. At most one region fires per activation; returns the delivered
/// event, if any.
pub fn dispatch_touch<F>(regions: &[TouchRegion], x: f64, y: f64, mut handler: F) -> Option<LabelEvent>
where
    F: FnMut(&str, f64),
{
    let region = regions.iter().find(|r| r.contains(x, y))?;
    handler(&region.axis, region.value);
    Some(region.event())
}
