use std::f64::consts::TAU;

use crate::core::types::Point;
use crate::error::{RadarError, RadarResult};

/// Angle of axis `index` out of `axis_count` evenly spaced spokes.
///
/// Axis 0 sits on the positive x-axis; angles increase counter-clockwise.
/// Every layer of the chart (rings, polygons, axis lines, labels, touch
/// regions) must route through this single mapping so visuals stay aligned.
#[must_use]
pub fn axis_angle(index: usize, axis_count: usize) -> f64 {
    debug_assert!(axis_count > 0);
    index as f64 * TAU / axis_count as f64
}

/// Projects a polar coordinate around `center` into pixel space.
#[must_use]
pub fn polar_to_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Maps axis values into radial pixel distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    outer_radius: f64,
    max_value: f64,
}

impl RadialScale {
    pub fn new(outer_radius: f64, max_value: f64) -> RadarResult<Self> {
        if !outer_radius.is_finite() || outer_radius < 0.0 {
            return Err(RadarError::Configuration(format!(
                "outer radius must be finite and >= 0, got {outer_radius}"
            )));
        }
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(RadarError::Configuration(format!(
                "max value must be finite and > 0, got {max_value}"
            )));
        }

        Ok(Self {
            outer_radius,
            max_value,
        })
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.outer_radius
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    /// Radial distance for one axis value.
    ///
    /// Values are clamped into `[0, max_value]` before scaling, so the result
    /// never leaves `[0, outer_radius]`; out-of-range data compresses to the
    /// boundary instead of overflowing the chart.
    #[must_use]
    pub fn value_to_radius(self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, self.max_value);
        self.outer_radius * clamped / self.max_value
    }
}
