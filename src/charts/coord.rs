//! Axis Coordinate Module
//! Adapts a resolved axis to a Plotters coordinate so the configured breaks
//! become the drawn ticks and gridlines.

use crate::scales::{Limits, ResolvedAxis, Transform};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, KeyPointWeight, Ranged};
use std::ops::Range;

/// A Plotters coordinate whose bold key points are the major breaks and
/// whose light key points add the minor breaks.
#[derive(Debug, Clone)]
pub struct AxisCoord {
    axis: ResolvedAxis,
    screen_limits: Limits,
}

impl AxisCoord {
    pub fn new(axis: ResolvedAxis) -> Self {
        let (min, max) = axis.limits;
        let screen_limits = (axis.transform.apply(min), axis.transform.apply(max));
        Self {
            axis,
            screen_limits,
        }
    }

    pub fn resolved(&self) -> &ResolvedAxis {
        &self.axis
    }

    pub fn transform(&self) -> Transform {
        self.axis.transform
    }
}

impl Ranged for AxisCoord {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let (lo, hi) = self.screen_limits;
        let span = hi - lo;
        if span == 0.0 || !span.is_finite() {
            return limit.0;
        }
        let fraction = (self.axis.transform.apply(*value) - lo) / span;
        limit.0 + (fraction * (limit.1 - limit.0) as f64).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        match hint.weight() {
            KeyPointWeight::Bold => self.axis.major.clone(),
            KeyPointWeight::Any => self.axis.all_breaks(),
        }
    }

    fn range(&self) -> Range<f64> {
        self.axis.limits.0..self.axis.limits.1
    }
}
