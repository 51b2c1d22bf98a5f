//! bar-chart-rs: grouped bar chart geometry and layout engine.
//!
//! The crate turns a dataset of named series over shared categories into
//! chart geometry: value range, ticks, grid segments, bar rectangles and
//! label placements, plus a time-driven reveal animation. Drawing is left to
//! a host-provided [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig, LayoutResult};
pub use error::{ChartError, ChartResult};
