//! Minimal SVG backend.
//!
//! Serializes a [`RadarScene`] into a standalone SVG document. Touch regions
//! are emitted as invisible `<rect>` nodes tagged with their axis name so a
//! host embedding the markup can wire its own event handling to them.

use std::fmt::Write;

use crate::error::{RadarError, RadarResult};
use crate::render::{Color, RadarScene, Renderer, TextHAlign};

/// Serializes one validated scene to an SVG document string.
pub fn scene_to_svg(scene: &RadarScene) -> RadarResult<String> {
    scene.validate()?;

    let mut out = String::new();
    let mut push = |args: std::fmt::Arguments<'_>| -> RadarResult<()> {
        out.write_fmt(args)
            .map_err(|e| RadarError::InvalidData(format!("svg serialization failed: {e}")))
    };

    push(format_args!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        scene.viewport.width, scene.viewport.height
    ))?;

    for ring in &scene.rings {
        push(format_args!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(ring.center.x),
            fmt_num(ring.center.y),
            fmt_num(ring.radius),
            rgb(ring.stroke),
            fmt_num(ring.stroke_width),
        ))?;
    }

    for polygon in &scene.series {
        let mut points = String::new();
        for (i, v) in polygon.vertices.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&fmt_num(v.x));
            points.push(',');
            points.push_str(&fmt_num(v.y));
        }
        push(format_args!(
            "  <polygon points=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            points,
            rgb(polygon.fill),
            fmt_num(polygon.fill_opacity * polygon.fill.alpha),
        ))?;
    }

    for line in &scene.axis_lines {
        push(format_args!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(line.from.x),
            fmt_num(line.from.y),
            fmt_num(line.to.x),
            fmt_num(line.to.y),
            rgb(line.color),
            fmt_num(line.stroke_width),
        ))?;
    }

    for circle in &scene.label_circles {
        let fill = circle
            .fill
            .map_or_else(|| "none".to_owned(), rgb);
        push(format_args!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(circle.center.x),
            fmt_num(circle.center.y),
            fmt_num(circle.radius),
            fill,
            rgb(circle.stroke),
            fmt_num(circle.stroke_width),
        ))?;
    }

    for label in &scene.labels {
        let anchor = match label.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let weight = if label.font.bold { "bold" } else { "normal" };
        let style = if label.font.italic { "italic" } else { "normal" };
        push(format_args!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" font-style=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>\n",
            fmt_num(label.position.x),
            fmt_num(label.position.y),
            escape_xml(&label.font.family),
            fmt_num(label.font.size_px),
            weight,
            style,
            rgb(label.color),
            anchor,
            escape_xml(&label.text),
        ))?;
    }

    for region in &scene.touch_regions {
        push(format_args!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" pointer-events=\"all\" data-axis=\"{}\"/>\n",
            fmt_num(region.left),
            fmt_num(region.top),
            fmt_num(region.width),
            fmt_num(region.height),
            escape_xml(&region.axis),
        ))?;
    }

    push(format_args!("</svg>\n"))?;
    Ok(out)
}

/// Renderer backend producing SVG markup; the latest document is kept for the
/// host to collect.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup from the most recent `render` call, empty before the first.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &RadarScene) -> RadarResult<()> {
        self.document = scene_to_svg(scene)?;
        Ok(())
    }
}

fn rgb(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        channel_u8(color.red),
        channel_u8(color.green),
        channel_u8(color.blue)
    )
}

fn channel_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Trims trailing zeros so coordinates stay compact and stable.
fn fmt_num(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value.trunc() as i64)
    } else {
        let s = format!("{value:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
