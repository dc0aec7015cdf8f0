use std::fmt;

use tracing::{debug, instrument};

use crate::api::scene_builder::build_scene;
use crate::config::ChartOptionsPatch;
use crate::core::dataset::{DataSet, KeyAccessor, ValueAccessor};
use crate::core::layout::RadarLayout;
use crate::core::types::Point;
use crate::error::RadarResult;
use crate::interaction::{self, LabelEvent};
use crate::render::{RadarScene, Renderer};

const DEFAULT_NO_DATA_MESSAGE: &str = "No data available";

/// Result of one render pass.
///
/// A missing dataset is not an error; it renders as an informational message
/// the host displays in place of the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutput {
    Scene(RadarScene),
    NoData(String),
}

/// Radar chart facade: holds data and configuration, runs the
/// resolve → layout → assemble pipeline on demand.
///
/// Every render pass recomputes from scratch; the chart keeps no geometry
/// between passes and is freely re-renderable after any mutation.
pub struct RadarChart {
    data: Option<DataSet>,
    options: ChartOptionsPatch,
    accessor: Box<dyn ValueAccessor>,
    center: Option<Point>,
    no_data_message: Option<String>,
}

impl fmt::Debug for RadarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarChart")
            .field("data", &self.data)
            .field("options", &self.options)
            .field("center", &self.center)
            .field("no_data_message", &self.no_data_message)
            .finish_non_exhaustive()
    }
}

impl Default for RadarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl RadarChart {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: None,
            options: ChartOptionsPatch::default(),
            accessor: Box::new(KeyAccessor),
            center: None,
            no_data_message: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: DataSet) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptionsPatch) -> Self {
        self.options = options;
        self
    }

    /// Replaces the default key-lookup accessor.
    #[must_use]
    pub fn with_accessor(mut self, accessor: impl ValueAccessor + 'static) -> Self {
        self.accessor = Box::new(accessor);
        self
    }

    /// Overrides the computed chart center.
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = Some(center);
        self
    }

    #[must_use]
    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = Some(message.into());
        self
    }

    pub fn set_data(&mut self, data: Option<DataSet>) {
        self.data = data;
    }

    pub fn set_options(&mut self, options: ChartOptionsPatch) {
        self.options = options;
    }

    /// Runs one full render pass.
    ///
    /// Configuration failures (non-positive max value, zero rings, bad
    /// colors) surface as `Err`; an absent dataset short-circuits into
    /// `RenderOutput::NoData` before any geometry is computed.
    #[instrument(skip_all)]
    pub fn render(&self) -> RadarResult<RenderOutput> {
        let Some(dataset) = &self.data else {
            let message = self
                .no_data_message
                .clone()
                .unwrap_or_else(|| DEFAULT_NO_DATA_MESSAGE.to_owned());
            debug!("no dataset, rendering fallback message");
            return Ok(RenderOutput::NoData(message));
        };

        let options = self.options.resolve();
        options.validate()?;

        let chart_width = options.chart_width();
        let chart_height = options.chart_height();
        let center = self
            .center
            .unwrap_or_else(|| Point::new(chart_width / 2.0, chart_height / 2.0));

        // An explicit radius override wins; otherwise the chart fills the
        // smaller chart-area dimension instead of using the fixed default.
        let outer_radius = match self.options.radius {
            Some(_) => options.radius,
            None => chart_width.min(chart_height) / 2.0,
        };

        let layout = RadarLayout::compute(
            center,
            outer_radius,
            chart_width,
            options.rings,
            options.max_value,
            dataset,
            self.accessor.as_ref(),
        )?;
        let scene = build_scene(&layout, &options, dataset, self.accessor.as_ref())?;
        Ok(RenderOutput::Scene(scene))
    }

    /// Renders and forwards the scene to a backend in one step.
    ///
    /// The no-data fallback is returned without touching the backend.
    pub fn render_into<R: Renderer>(&self, renderer: &mut R) -> RadarResult<RenderOutput> {
        let output = self.render()?;
        if let RenderOutput::Scene(scene) = &output {
            renderer.render(scene)?;
        }
        Ok(output)
    }

    /// Hit-tests a touch activation against a rendered scene and invokes
    /// `handler` with `(axis_name, value)` for the first region containing
    /// the point. Returns the delivered event, if any.
    pub fn dispatch_touch<F>(scene: &RadarScene, x: f64, y: f64, handler: F) -> Option<LabelEvent>
    where
        F: FnMut(&str, f64),
    {
        interaction::dispatch_touch(&scene.touch_regions, x, y, handler)
    }
}
