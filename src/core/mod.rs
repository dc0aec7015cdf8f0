pub mod dataset;
pub mod layout;
pub mod polar;
pub mod types;

pub use dataset::{DataSet, KeyAccessor, Record, ValueAccessor};
pub use layout::{AxisPoint, RadarLayout, RingGeometry, SeriesPolygon, VertexBuf};
pub use polar::{RadialScale, axis_angle, polar_to_point};
pub use types::{Point, Viewport};
