use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{RadarError, RadarResult};
use crate::interaction::TouchRegion;
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one radar chart draw pass.
///
/// Draw order matches field order: ring gridlines under the series polygons,
/// then axis lines, label backing circles, and labels on top. Touch regions
/// are not drawn; they parallel `labels` one-to-one for hit testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarScene {
    pub viewport: Viewport,
    pub rings: Vec<CirclePrimitive>,
    pub series: Vec<PolygonPrimitive>,
    pub axis_lines: Vec<LinePrimitive>,
    pub label_circles: Vec<CirclePrimitive>,
    pub labels: Vec<TextPrimitive>,
    pub touch_regions: Vec<TouchRegion>,
}

impl RadarScene {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rings: Vec::new(),
            series: Vec::new(),
            axis_lines: Vec::new(),
            label_circles: Vec::new(),
            labels: Vec::new(),
            touch_regions: Vec::new(),
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if !self.viewport.is_valid() {
            return Err(RadarError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for ring in &self.rings {
            ring.validate()?;
        }
        for polygon in &self.series {
            polygon.validate()?;
        }
        for line in &self.axis_lines {
            line.validate()?;
        }
        for circle in &self.label_circles {
            circle.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for region in &self.touch_regions {
            region.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
            && self.series.is_empty()
            && self.axis_lines.is_empty()
            && self.label_circles.is_empty()
            && self.labels.is_empty()
    }

    /// Total drawable primitive count, excluding touch regions.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rings.len()
            + self.series.len()
            + self.axis_lines.len()
            + self.label_circles.len()
            + self.labels.len()
    }
}
