//! Scales module - Axis breaks, labels and scale presets

mod axis;
mod breaks;
mod continuous;
mod date;
mod labels;

pub use axis::{Axis, AxisScale, ResolvedAxis, ScaleError, Transform};
pub use breaks::{
    extended_breaks, interval_breaks, log10_breaks, log10_minor_breaks, midpoint_minor_breaks,
    Breaks, IntervalBreaks, Limits,
};
pub use continuous::{
    axis_comma_fmt, x_comma_fmt, x_log10_fmt, x_pct_fmt, x_pct_fmt_full, y_comma_fmt,
    y_log10_fmt, y_pct_fmt, y_pct_fmt_full, ContinuousScale,
};
pub use date::{
    date_to_num, num_to_date, x_date_fmt, x_date_fmt_default, DateBreaks, DateScale, DateUnit,
    DEFAULT_DATE_BREAKS, DEFAULT_DATE_LABELS,
};
pub use labels::{
    comma_format, comma_format_digits, group_thousands, large_num_labels, percent_format,
    plain_labels, CommaFormat, Labeller, LargeNumLabels, PercentFormat, PlainLabels,
};
