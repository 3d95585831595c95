//! # CineGraph Render
//!
//! Plotters-backed implementation of the CineGraph draw surface: multi-line
//! genre charts, legends, per-genre leaderboards and genre heatmaps, all
//! written as PNG files.

pub mod color;
pub mod config;
pub mod heatmap;
pub mod line_chart;

pub use color::{parse_color, ramp};
pub use config::{ChartConfig, FontConfig, MarginConfig, StyleConfig};
pub use heatmap::HeatmapRenderer;
pub use line_chart::{padded_range, LineChartSurface};
