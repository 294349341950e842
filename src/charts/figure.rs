//! Figure Module
//! Applies themes and axis scales to a Plotters chart and renders it.

use super::coord::AxisCoord;
use crate::scales::{Axis, AxisScale, ContinuousScale, Limits, ResolvedAxis, Transform};
use crate::theme::{LegendPosition, Theme};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("The {slot} axis was given a scale for the {scale} axis")]
    AxisMismatch { slot: Axis, scale: Axis },
}

fn drawing_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Drawing(err.to_string())
}

/// Series colors, cycled in insertion order.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(121, 85, 72),   // Brown
    RGBColor(96, 125, 139),  // Blue Grey
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Points,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
}

/// A single-panel chart: a theme, one scale per axis and the series to draw.
pub struct Figure {
    theme: Theme,
    x_scale: Box<dyn AxisScale>,
    y_scale: Box<dyn AxisScale>,
    title: Option<String>,
    series: Vec<ChartSeries>,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            x_scale: Box::new(ContinuousScale::new(Axis::X)),
            y_scale: Box::new(ContinuousScale::new(Axis::Y)),
            title: None,
            series: Vec::new(),
        }
    }

    /// Adds a theme on top of the current one.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = self.theme + theme;
        self
    }

    pub fn x_scale(mut self, scale: impl AxisScale + 'static) -> Self {
        self.x_scale = Box::new(scale);
        self
    }

    pub fn y_scale(mut self, scale: impl AxisScale + 'static) -> Self {
        self.y_scale = Box::new(scale);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn line(mut self, name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        self.series.push(ChartSeries {
            name: name.into(),
            kind: SeriesKind::Line,
            points,
        });
        self
    }

    pub fn points(mut self, name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        self.series.push(ChartSeries {
            name: name.into(),
            kind: SeriesKind::Points,
            points,
        });
        self
    }

    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }

    /// Resolve both scales against the plotted data.
    pub fn resolve_axes(&self) -> Result<(ResolvedAxis, ResolvedAxis), RenderError> {
        for (slot, scale) in [(Axis::X, &self.x_scale), (Axis::Y, &self.y_scale)] {
            if scale.axis() != slot {
                return Err(RenderError::AxisMismatch {
                    slot,
                    scale: scale.axis(),
                });
            }
        }

        let x_limits = self.data_limits(|p| p.0, self.x_scale.transform());
        let y_limits = self.data_limits(|p| p.1, self.y_scale.transform());

        Ok((self.x_scale.resolve(x_limits), self.y_scale.resolve(y_limits)))
    }

    fn data_limits(&self, coord: impl Fn(&(f64, f64)) -> f64, transform: Transform) -> Limits {
        let (min, max) = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(&coord)
            .filter(|&v| transform.in_domain(v))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            match transform {
                Transform::Identity => (0.0, 1.0),
                Transform::Log10 => (1.0, 10.0),
            }
        } else {
            (min, max)
        }
    }

    /// Render to an SVG document.
    pub fn render_svg(&self) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, self.theme.pixel_size()).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(drawing_error)?;
        }
        Ok(svg)
    }

    /// Render to a bitmap file; the format follows the file extension.
    pub fn render_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path.as_ref(), self.theme.pixel_size()).into_drawing_area();
        self.draw(&root)?;
        root.present().map_err(drawing_error)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        let (x_axis, y_axis) = self.resolve_axes()?;
        debug!(
            series = self.series.len(),
            size = ?self.theme.pixel_size(),
            "rendering figure"
        );

        root.fill(&WHITE).map_err(drawing_error)?;

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(AxisCoord::new(x_axis.clone()), AxisCoord::new(y_axis.clone()))
            .map_err(drawing_error)?;

        let x_labels = |v: &f64| x_axis.label_for(*v);
        let y_labels = |v: &f64| y_axis.label_for(*v);
        {
            let mut mesh = chart.configure_mesh();
            mesh.x_label_formatter(&x_labels)
                .y_label_formatter(&y_labels)
                .light_line_style(BLACK.mix(0.05))
                .bold_line_style(BLACK.mix(0.15));
            if let Some(title) = &x_axis.title {
                mesh.x_desc(title.as_str());
            }
            if let Some(title) = &y_axis.title {
                mesh.y_desc(title.as_str());
            }
            mesh.draw().map_err(drawing_error)?;
        }

        for (i, series) in self.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .copied()
                .filter(|&(x, y)| x_axis.transform.in_domain(x) && y_axis.transform.in_domain(y))
                .collect();

            let anno = match series.kind {
                SeriesKind::Line => chart
                    .draw_series(LineSeries::new(points, color.stroke_width(2)))
                    .map_err(drawing_error)?,
                SeriesKind::Points => chart
                    .draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))
                    .map_err(drawing_error)?,
            };
            anno.label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        if self.series.is_empty() {
            return Ok(());
        }
        let position = match self.theme.resolved_legend_position() {
            LegendPosition::None => return Ok(()),
            LegendPosition::Right => SeriesLabelPosition::UpperRight,
            LegendPosition::Left => SeriesLabelPosition::UpperLeft,
            LegendPosition::Top => SeriesLabelPosition::UpperMiddle,
            LegendPosition::Bottom => SeriesLabelPosition::LowerMiddle,
        };

        let spacing = self.theme.inches_to_px(self.theme.legend_box_spacing);
        let margin = self.theme.inches_to_px(self.theme.legend_box_margin);
        chart
            .configure_series_labels()
            .position(position)
            .margin(spacing.max(margin))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing_error)?;

        Ok(())
    }
}
