//! Chartify Scales - axis, label and theme helpers for statistical charts
//!
//! Small, stateless helpers that prepare chart configuration: break
//! positions for interval, log10 and date axes, label formatters for
//! percentages, comma-grouped and abbreviated large numbers, figure themes,
//! and ordered categorical columns. The `charts` module applies the
//! configuration to a Plotters chart.

pub mod charts;
pub mod data;
pub mod scales;
pub mod telemetry;
pub mod theme;

pub use charts::{Figure, RenderError};
pub use data::{to_categorical, CategoricalError, OrderedCategorical};
pub use scales::{
    axis_comma_fmt, interval_breaks, large_num_labels, log10_breaks, log10_minor_breaks,
    x_comma_fmt, x_date_fmt, x_log10_fmt, x_pct_fmt_full, y_comma_fmt, y_log10_fmt,
    y_pct_fmt_full, Axis, AxisScale, ScaleError,
};
pub use theme::{bottom_legend, figsize, Theme, ThemeError};
