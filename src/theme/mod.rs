//! Theme module - Figure size and legend settings

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{
    bottom_legend, figsize, LegendPosition, Theme, ThemeError, DEFAULT_DPI, DEFAULT_FIGURE_SIZE,
};
