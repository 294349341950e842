//! Theme Module
//! Figure-level settings: size, resolution and legend placement.

use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Add;
use std::path::Path;
use thiserror::Error;

/// Figure size in inches when no theme sets one.
pub const DEFAULT_FIGURE_SIZE: (f64, f64) = (6.4, 4.8);
pub const DEFAULT_DPI: u32 = 100;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid theme config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Right,
    Left,
    Top,
    Bottom,
    None,
}

/// A partial set of figure settings. Unset fields fall back to defaults or
/// to whatever theme this one is added onto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// `(width, height)` in inches.
    pub figure_size: Option<(f64, f64)>,
    pub dpi: Option<u32>,
    pub legend_position: Option<LegendPosition>,
    /// Space between the plot panel and the legend box, in inches.
    pub legend_box_spacing: Option<f64>,
    /// Margin around the legend box, in inches.
    pub legend_box_margin: Option<f64>,
}

impl Theme {
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Settings of `other` take precedence over ours.
    pub fn merge(self, other: Theme) -> Theme {
        Theme {
            figure_size: other.figure_size.or(self.figure_size),
            dpi: other.dpi.or(self.dpi),
            legend_position: other.legend_position.or(self.legend_position),
            legend_box_spacing: other.legend_box_spacing.or(self.legend_box_spacing),
            legend_box_margin: other.legend_box_margin.or(self.legend_box_margin),
        }
    }

    pub fn resolved_dpi(&self) -> u32 {
        self.dpi.unwrap_or(DEFAULT_DPI)
    }

    /// Figure size in pixels at the theme's dpi.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (width, height) = self.figure_size.unwrap_or(DEFAULT_FIGURE_SIZE);
        let dpi = self.resolved_dpi() as f64;
        (
            (width * dpi).round().max(1.0) as u32,
            (height * dpi).round().max(1.0) as u32,
        )
    }

    pub fn resolved_legend_position(&self) -> LegendPosition {
        self.legend_position.unwrap_or(LegendPosition::Right)
    }

    /// Converts an inch setting to pixels at the theme's dpi.
    pub fn inches_to_px(&self, inches: Option<f64>) -> u32 {
        let dpi = self.resolved_dpi() as f64;
        (inches.unwrap_or(0.0) * dpi).round().max(0.0) as u32
    }
}

impl Add for Theme {
    type Output = Theme;

    fn add(self, rhs: Theme) -> Theme {
        self.merge(rhs)
    }
}

/// Set the figure size in inches.
pub fn figsize(width: f64, height: f64) -> Theme {
    Theme {
        figure_size: Some((width, height)),
        ..Theme::default()
    }
}

/// Position the legend underneath the plot.
pub fn bottom_legend() -> Theme {
    Theme {
        legend_position: Some(LegendPosition::Bottom),
        legend_box_spacing: Some(0.6),
        legend_box_margin: Some(0.0),
        ..Theme::default()
    }
}
