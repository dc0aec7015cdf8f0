mod chart;
mod scene_builder;

pub use chart::{RadarChart, RenderOutput};
pub use scene_builder::{SERIES_FILL_OPACITY, build_scene};
