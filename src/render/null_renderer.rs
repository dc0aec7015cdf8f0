use crate::error::RadarResult;
use crate::render::{RadarScene, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_primitive_count: usize,
    pub last_ring_count: usize,
    pub last_series_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &RadarScene) -> RadarResult<()> {
        scene.validate()?;
        self.last_primitive_count = scene.primitive_count();
        self.last_ring_count = scene.rings.len();
        self.last_series_count = scene.series.len();
        self.last_label_count = scene.labels.len();
        Ok(())
    }
}
