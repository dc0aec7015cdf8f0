use crate::config::{ChartOptions, LabelOptions};
use crate::core::dataset::{DataSet, ValueAccessor};
use crate::core::layout::{AxisPoint, RadarLayout};
use crate::core::types::{Point, Viewport};
use crate::error::{RadarError, RadarResult};
use crate::interaction::TouchRegion;
use crate::render::{
    CirclePrimitive, Color, FontSpec, LinePrimitive, PolygonPrimitive, RadarScene, TextHAlign,
    TextPrimitive,
};

/// Series polygons render at this fill opacity regardless of palette; it is
/// a design default, not a configuration field. Callers needing a different
/// weight encode alpha in the fill color itself.
pub const SERIES_FILL_OPACITY: f64 = 0.6;

/// Backing circle sits slightly above the text baseline.
const CIRCLE_BASELINE_LIFT_DIVISOR: f64 = 3.0;

/// Materializes one layout pass into a backend-agnostic scene.
///
/// Axis order is taken from the layout untouched, so rings, polygons, lines,
/// labels, and touch regions all share the same angle-to-axis mapping.
pub fn build_scene(
    layout: &RadarLayout,
    options: &ChartOptions,
    dataset: &DataSet,
    accessor: &dyn ValueAccessor,
) -> RadarResult<RadarScene> {
    let viewport = Viewport::new(options.width.round() as u32, options.height.round() as u32);
    let mut scene = RadarScene::new(viewport);

    scene.rings = layout
        .rings
        .iter()
        .map(|ring| {
            CirclePrimitive::new(
                ring.center,
                ring.radius,
                options.label.circle_stroke_width,
                options.stroke,
                None,
            )
        })
        .collect();

    scene.series = layout
        .series
        .iter()
        .enumerate()
        .map(|(i, polygon)| {
            let fill = options.fill.color_for(i).ok_or_else(|| {
                RadarError::Configuration("per-series fill palette must not be empty".to_owned())
            })?;
            Ok(PolygonPrimitive::new(
                polygon.vertices.to_vec(),
                fill,
                SERIES_FILL_OPACITY,
            ))
        })
        .collect::<RadarResult<Vec<_>>>()?;

    scene.axis_lines = layout
        .axis_points
        .iter()
        .map(|axis| {
            LinePrimitive::new(axis.position, layout.center, options.stroke_width, options.stroke)
        })
        .collect();

    if options.label.circle {
        scene.label_circles = layout
            .axis_points
            .iter()
            .map(|axis| label_circle(axis, &options.label))
            .collect();
    }

    let font = FontSpec {
        family: options.label.font_family.clone(),
        size_px: options.label.font_size,
        bold: options.label.bold,
        italic: options.label.italic,
    };
    scene.labels = layout
        .axis_points
        .iter()
        .map(|axis| {
            TextPrimitive::new(
                axis.name.clone(),
                axis.position,
                font.clone(),
                options.label.color,
                TextHAlign::Center,
            )
        })
        .collect();

    let first = dataset.first();
    scene.touch_regions = layout
        .axis_points
        .iter()
        .map(|axis| {
            TouchRegion::for_label(
                axis.name.clone(),
                accessor.value(first, &axis.name),
                axis.position,
                options.label.font_size,
            )
        })
        .collect();

    scene.validate()?;
    Ok(scene)
}

/// Backing circle behind one label; the active axis gets the highlight
/// variants and a doubled border.
fn label_circle(axis: &AxisPoint, label: &LabelOptions) -> CirclePrimitive {
    let active = label.active_label.as_deref() == Some(axis.name.as_str());
    let (border, fill, stroke_width): (Color, Color, f64) = if active {
        (
            label.active_circle_border_color,
            label.active_circle_fill_color,
            label.circle_stroke_width * 2.0,
        )
    } else {
        (
            label.circle_border_color,
            label.circle_fill_color,
            label.circle_stroke_width,
        )
    };

    let center = Point::new(
        axis.position.x,
        axis.position.y - label.font_size / CIRCLE_BASELINE_LIFT_DIVISOR,
    );
    CirclePrimitive::new(center, label.font_size, stroke_width, border, Some(fill))
}
