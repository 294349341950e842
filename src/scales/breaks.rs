//! Break Generators Module
//! Computes axis tick positions from an axis interval.

use tracing::{debug, warn};

/// An axis interval. Generators use the min and max of the pair, so the
/// order of the two values does not matter.
pub type Limits = (f64, f64);

/// Something that produces break positions for an axis interval.
pub trait Breaks: Send + Sync {
    fn breaks(&self, limits: Limits) -> Vec<f64>;
}

impl<F> Breaks for F
where
    F: Fn(Limits) -> Vec<f64> + Send + Sync,
{
    fn breaks(&self, limits: Limits) -> Vec<f64> {
        self(limits)
    }
}

/// Returns `(min, max)` of the pair.
pub fn ordered(limits: Limits) -> Limits {
    let (a, b) = limits;
    (a.min(b), a.max(b))
}

/// Breaks at every multiple of a fixed interval inside the limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalBreaks {
    interval: f64,
}

impl IntervalBreaks {
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl Breaks for IntervalBreaks {
    fn breaks(&self, limits: Limits) -> Vec<f64> {
        let interval = self.interval;
        let (min, max) = ordered(limits);
        if !(interval.is_finite() && interval > 0.0) {
            warn!(interval, "interval breaks need a positive finite interval");
            return Vec::new();
        }
        if !(min.is_finite() && max.is_finite()) {
            warn!(min, max, "interval breaks need finite limits");
            return Vec::new();
        }

        let start = (min / interval).ceil() * interval;
        let end = (max / interval).floor() * interval;

        // Stop half a step past `end` so the last multiple survives rounding.
        let stop = end + interval / 2.0;
        let count = ((stop - start) / interval).ceil();
        if count <= 0.0 {
            return Vec::new();
        }

        (0..count as usize)
            .map(|i| start + i as f64 * interval)
            .collect()
    }
}

/// Supply breaks for a continuous scale at set intervals.
///
/// This overrides automatic break selection with regularly spaced breaks
/// at every multiple of `interval` covered by the limits.
pub fn interval_breaks(interval: f64) -> IntervalBreaks {
    IntervalBreaks { interval }
}

/// Breaks at every integer power of 10 covered by the limits.
///
/// A non-positive lower bound starts the sequence at `10^0`. A non-positive
/// upper bound has no logarithm, so no breaks are produced.
pub fn log10_breaks(limits: Limits) -> Vec<f64> {
    let (min, max) = ordered(limits);
    if !(max > 0.0 && max.is_finite()) {
        warn!(max, "log10 breaks need a positive finite upper limit");
        return Vec::new();
    }

    let start = if min > 0.0 {
        min.log10().ceil() as i32
    } else {
        debug!(min, "non-positive lower limit, log10 breaks start at 1");
        0
    };
    let end = max.log10().floor() as i32;

    (start..=end).map(|p| 10f64.powi(p)).collect()
}

/// Minor breaks for a log10 scale, at half of each major break after the
/// first. The minor break between 1 and 10 is 5.
pub fn log10_minor_breaks(limits: Limits) -> Vec<f64> {
    log10_breaks(limits)
        .into_iter()
        .skip(1)
        .map(|b| b / 2.0)
        .collect()
}

const NICE_STEPS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
const TARGET_INTERVALS: f64 = 5.0;

/// Automatic breaks used when a scale has none configured: the step is
/// the `{1, 2, 5} x 10^k` value closest to five intervals across the limits.
pub fn extended_breaks(limits: Limits) -> Vec<f64> {
    let (min, max) = ordered(limits);
    if !(min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    let span = max - min;
    if span == 0.0 {
        return vec![min];
    }

    let raw = span / TARGET_INTERVALS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = NICE_STEPS
        .iter()
        .map(|m| m * magnitude)
        .min_by(|a, b| {
            let da = (span / a - TARGET_INTERVALS).abs();
            let db = (span / b - TARGET_INTERVALS).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(magnitude);

    interval_breaks(step).breaks((min, max))
}

/// Default minor breaks for a linear axis, halfway between consecutive majors.
pub fn midpoint_minor_breaks(major: &[f64]) -> Vec<f64> {
    major.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}
