//! Axis Module
//! Shared axis types and the resolved form every scale produces.

use super::breaks::Limits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("Unknown axis `{0}`, expected \"x\" or \"y\"")]
    UnknownAxis(String),
    #[error("Invalid date breaks `{0}`, expected e.g. \"1 week\" or \"3 months\"")]
    InvalidDateBreaks(String),
    #[error("Invalid date label pattern `{0}`")]
    InvalidDateLabels(String),
}

/// Which axis a scale applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(ScaleError::UnknownAxis(s.to_string())),
        }
    }
}

/// Position transform applied between data space and screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    #[default]
    Identity,
    Log10,
}

impl Transform {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Transform::Identity => value,
            Transform::Log10 => value.log10(),
        }
    }

    /// Whether a data value can be placed on this axis.
    pub fn in_domain(&self, value: f64) -> bool {
        match self {
            Transform::Identity => value.is_finite(),
            Transform::Log10 => value.is_finite() && value > 0.0,
        }
    }
}

/// A scale evaluated against concrete limits: everything the drawing layer
/// needs to place ticks, gridlines and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAxis {
    pub axis: Axis,
    pub transform: Transform,
    pub limits: Limits,
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
    pub labels: Vec<String>,
    pub title: Option<String>,
}

impl ResolvedAxis {
    /// Label for a major break, or an empty string for any other position.
    pub fn label_for(&self, value: f64) -> String {
        self.major
            .iter()
            .position(|&b| approx_same(b, value))
            .and_then(|i| self.labels.get(i).cloned())
            .unwrap_or_default()
    }

    /// Majors and minors merged in ascending order.
    pub fn all_breaks(&self) -> Vec<f64> {
        let mut all: Vec<f64> = self.major.iter().chain(self.minor.iter()).copied().collect();
        all.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        all.dedup_by(|a, b| approx_same(*a, *b));
        all
    }
}

/// Anything that can be resolved into a drawable axis.
pub trait AxisScale: Send + Sync {
    fn axis(&self) -> Axis;

    fn transform(&self) -> Transform {
        Transform::Identity
    }

    /// Resolve against the limits of the plotted data.
    fn resolve(&self, data_limits: Limits) -> ResolvedAxis;
}

pub(crate) fn approx_same(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Keeps values inside the limits, allowing for floating-point slop at the ends.
pub(crate) fn within(values: Vec<f64>, limits: Limits) -> Vec<f64> {
    let (min, max) = limits;
    values
        .into_iter()
        .filter(|&v| (v >= min || approx_same(v, min)) && (v <= max || approx_same(v, max)))
        .collect()
}
