//! Charts module - Plotters adapter for themes and scales

mod coord;
mod figure;

pub use coord::AxisCoord;
pub use figure::{ChartSeries, Figure, RenderError, SeriesKind, PALETTE};
