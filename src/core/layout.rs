use smallvec::SmallVec;
use tracing::debug;

use crate::core::dataset::{DataSet, ValueAccessor};
use crate::core::polar::{RadialScale, axis_angle, polar_to_point};
use crate::core::types::Point;
use crate::error::{RadarError, RadarResult};

/// Most radar charts stay under eight spokes; keep vertex buffers inline.
pub type VertexBuf = SmallVec<[Point; 8]>;

/// One concentric gridline circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f64,
}

/// Closed polygon for one data record, one vertex per axis in axis order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPolygon {
    pub vertices: VertexBuf,
}

/// Outer anchor of one axis spoke.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPoint {
    pub name: String,
    pub angle: f64,
    pub position: Point,
}

/// Output of one layout pass: everything downstream scene assembly needs,
/// in one consistent angular order.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    pub center: Point,
    pub rings: Vec<RingGeometry>,
    pub series: Vec<SeriesPolygon>,
    pub axis_points: Vec<AxisPoint>,
}

impl RadarLayout {
    /// Computes ring, polygon, and axis geometry for one render pass.
    ///
    /// `ring_step` follows the interior-gridline convention: `ring_count`
    /// subdivides half the chart width, and only rings `1..ring_count` are
    /// produced since the outer boundary is implied by the data polygons
    /// themselves. A one-axis dataset yields degenerate zero-area polygons
    /// rather than an error.
    pub fn compute(
        center: Point,
        outer_radius: f64,
        chart_width: f64,
        ring_count: u32,
        max_value: f64,
        dataset: &DataSet,
        accessor: &dyn ValueAccessor,
    ) -> RadarResult<Self> {
        if !center.is_finite() {
            return Err(RadarError::Configuration(format!(
                "chart center must be finite, got ({}, {})",
                center.x, center.y
            )));
        }
        if ring_count == 0 {
            return Err(RadarError::Configuration(
                "ring count must be >= 1".to_owned(),
            ));
        }
        if !chart_width.is_finite() || chart_width < 0.0 {
            return Err(RadarError::Configuration(format!(
                "chart width must be finite and >= 0, got {chart_width}"
            )));
        }

        let scale = RadialScale::new(outer_radius, max_value)?;
        let axis_names = dataset.axis_names();
        let axis_count = axis_names.len();

        let ring_step = chart_width / 2.0 / f64::from(ring_count);
        let rings = (1..ring_count)
            .map(|i| RingGeometry {
                center,
                radius: ring_step * f64::from(i),
            })
            .collect();

        let series = dataset
            .records()
            .iter()
            .map(|record| {
                let vertices = axis_names
                    .iter()
                    .enumerate()
                    .map(|(i, axis)| {
                        let radius = scale.value_to_radius(accessor.value(record, axis));
                        polar_to_point(center, radius, axis_angle(i, axis_count))
                    })
                    .collect();
                SeriesPolygon { vertices }
            })
            .collect();

        let axis_points = axis_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let angle = axis_angle(i, axis_count);
                AxisPoint {
                    position: polar_to_point(center, scale.outer_radius(), angle),
                    angle,
                    name,
                }
            })
            .collect();

        let layout = Self {
            center,
            rings,
            series,
            axis_points,
        };
        debug!(
            rings = layout.rings.len(),
            series = layout.series.len(),
            axes = layout.axis_points.len(),
            "computed radar layout"
        );
        Ok(layout)
    }
}
