//! radar-chart-rs: radar (spider) chart layout and scene engine.
//!
//! This crate turns a small keyed dataset into a backend-agnostic scene of
//! drawable primitives: concentric ring gridlines, one filled polygon per
//! record, radiating axis lines, per-axis labels, and invisible touch regions
//! over each label. Rendering backends plug in behind the `Renderer` trait.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RenderOutput};
pub use error::{RadarError, RadarResult};
