//! Chart Adapters
//!
//! Reshape the current selection into per-chart series. Every adapter reads
//! normalized values from `utils::normalization` and band colors from
//! `utils::color_bands`; none of them scale or classify on their own.
//!
//! A record missing a value a chart needs is dropped from that chart only.

pub mod radar;
pub mod bar;
pub mod scatter;
pub mod habitability;

pub use radar::{radar_chart, RadarAxis, RadarChart, RadarRow, RadarSeries, RADAR_AXES};
pub use bar::{bar_chart, BarChart, BarPoint};
pub use scatter::{scatter_chart, ScatterChart, ScatterConfig, ScatterPoint};
pub use habitability::{habitability_chart, HabitabilityChart, HabitabilityGroup, ScoreSeries};

/// Series colors, assigned by selection order (blue, emerald, amber, violet, pink)
pub const SERIES_PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899"];

/// Palette color for the `index`-th selected record
pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
