mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use frame::RadarScene;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, FontSpec, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};
pub use svg::{SvgRenderer, scene_to_svg};

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RadarScene` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, scene: &RadarScene) -> RadarResult<()>;
}
