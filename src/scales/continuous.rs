//! Continuous Scale Module
//! Numeric axis scales and the preset helpers built on them.

use super::axis::{approx_same, within, Axis, AxisScale, ResolvedAxis, ScaleError, Transform};
use super::breaks::{
    extended_breaks, interval_breaks, log10_breaks, log10_minor_breaks, midpoint_minor_breaks,
    ordered, Breaks, Limits,
};
use super::labels::{comma_format, percent_format, plain_labels, Labeller};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Configuration for a numeric axis.
///
/// Every preset helper returns one of these; the `with_*` methods replace
/// any of the preset's defaults.
#[derive(Clone)]
pub struct ContinuousScale {
    axis: Axis,
    transform: Transform,
    limits: Option<Limits>,
    breaks: Option<Arc<dyn Breaks>>,
    minor_breaks: Option<Arc<dyn Breaks>>,
    labels: Option<Arc<dyn Labeller>>,
    title: Option<String>,
}

impl fmt::Debug for ContinuousScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContinuousScale")
            .field("axis", &self.axis)
            .field("transform", &self.transform)
            .field("limits", &self.limits)
            .field("breaks", &self.breaks.is_some())
            .field("minor_breaks", &self.minor_breaks.is_some())
            .field("labels", &self.labels.is_some())
            .field("title", &self.title)
            .finish()
    }
}

impl ContinuousScale {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            transform: Transform::Identity,
            limits: None,
            breaks: None,
            minor_breaks: None,
            labels: None,
            title: None,
        }
    }

    /// A log10-transformed axis.
    pub fn log10(axis: Axis) -> Self {
        Self {
            transform: Transform::Log10,
            ..Self::new(axis)
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(ordered(limits));
        self
    }

    pub fn with_breaks(mut self, breaks: impl Breaks + 'static) -> Self {
        self.breaks = Some(Arc::new(breaks));
        self
    }

    pub fn with_minor_breaks(mut self, breaks: impl Breaks + 'static) -> Self {
        self.minor_breaks = Some(Arc::new(breaks));
        self
    }

    pub fn with_labels(mut self, labels: impl Labeller + 'static) -> Self {
        self.labels = Some(Arc::new(labels));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn limits(&self) -> Option<Limits> {
        self.limits
    }

    fn major_breaks(&self, limits: Limits) -> Vec<f64> {
        match (&self.breaks, self.transform) {
            (Some(breaks), _) => breaks.breaks(limits),
            (None, Transform::Log10) => log10_breaks(limits),
            (None, Transform::Identity) => extended_breaks(limits),
        }
    }

    fn minor_breaks(&self, limits: Limits, major: &[f64]) -> Vec<f64> {
        match (&self.minor_breaks, self.transform) {
            (Some(breaks), _) => breaks.breaks(limits),
            (None, Transform::Log10) => log10_minor_breaks(limits),
            (None, Transform::Identity) => midpoint_minor_breaks(major),
        }
    }
}

impl AxisScale for ContinuousScale {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn resolve(&self, data_limits: Limits) -> ResolvedAxis {
        let limits = self.limits.unwrap_or_else(|| ordered(data_limits));

        let major = within(self.major_breaks(limits), limits);
        let minor: Vec<f64> = within(self.minor_breaks(limits, &major), limits)
            .into_iter()
            .filter(|m| !major.iter().any(|b| approx_same(*b, *m)))
            .collect();
        let labels = match &self.labels {
            Some(labeller) => labeller.labels(&major),
            None => plain_labels().labels(&major),
        };
        trace!(axis = %self.axis, ?limits, ?major, "resolved continuous scale");

        ResolvedAxis {
            axis: self.axis,
            transform: self.transform,
            limits,
            major,
            minor,
            labels,
            title: self.title.clone(),
        }
    }
}

/// Comma-grouped numeric labels on the axis named by `axis` (`"x"` or `"y"`).
pub fn axis_comma_fmt(axis: &str) -> Result<ContinuousScale, ScaleError> {
    let axis: Axis = axis.parse()?;
    Ok(ContinuousScale::new(axis).with_labels(comma_format()))
}

pub fn x_comma_fmt() -> ContinuousScale {
    ContinuousScale::new(Axis::X).with_labels(comma_format())
}

pub fn y_comma_fmt() -> ContinuousScale {
    ContinuousScale::new(Axis::Y).with_labels(comma_format())
}

/// Percentage labels on the x axis.
pub fn x_pct_fmt() -> ContinuousScale {
    ContinuousScale::new(Axis::X).with_labels(percent_format())
}

/// Percentage labels on the y axis.
pub fn y_pct_fmt() -> ContinuousScale {
    ContinuousScale::new(Axis::Y).with_labels(percent_format())
}

/// Percentage x axis fixed to `[0, 1]` with a break every 20%.
pub fn x_pct_fmt_full() -> ContinuousScale {
    x_pct_fmt()
        .with_breaks(interval_breaks(0.2))
        .with_limits((0.0, 1.0))
}

/// Percentage y axis fixed to `[0, 1]` with a break every 20%.
pub fn y_pct_fmt_full() -> ContinuousScale {
    y_pct_fmt()
        .with_breaks(interval_breaks(0.2))
        .with_limits((0.0, 1.0))
}

/// Log10 x axis with a break at each power of ten and comma labels.
pub fn x_log10_fmt() -> ContinuousScale {
    log10_fmt(Axis::X)
}

/// Log10 y axis with a break at each power of ten and comma labels.
pub fn y_log10_fmt() -> ContinuousScale {
    log10_fmt(Axis::Y)
}

fn log10_fmt(axis: Axis) -> ContinuousScale {
    ContinuousScale::log10(axis)
        .with_breaks(log10_breaks)
        .with_minor_breaks(log10_minor_breaks)
        .with_labels(comma_format())
}
