use chartify_scales::charts::{AxisCoord, Figure, RenderError};
use chartify_scales::scales::{
    x_comma_fmt, y_comma_fmt, y_log10_fmt, y_pct_fmt_full, Axis, AxisScale, ContinuousScale,
    Transform,
};
use chartify_scales::theme::{bottom_legend, figsize};
use plotters::coord::ranged1d::{BoldPoints, Ranged};

#[test]
fn axes_resolve_against_plotted_data() {
    let figure = Figure::new()
        .x_scale(x_comma_fmt())
        .y_scale(y_comma_fmt())
        .line("sales", vec![(0.0, 0.0), (2500.0, 5000.0)])
        .points("returns", vec![(5000.0, 1000.0)]);

    let (x, y) = figure.resolve_axes().expect("axes");
    assert_eq!(x.limits, (0.0, 5000.0));
    assert_eq!(y.limits, (0.0, 5000.0));
    assert_eq!(x.labels.last().map(String::as_str), Some("5,000"));
}

#[test]
fn log_axis_limits_skip_non_positive_values() {
    let figure = Figure::new()
        .y_scale(y_log10_fmt())
        .points("counts", vec![(0.0, 0.0), (1.0, 5.0), (2.0, 2000.0)]);

    let (_, y) = figure.resolve_axes().expect("axes");
    assert_eq!(y.limits, (5.0, 2000.0));
    assert_eq!(y.major, vec![10.0, 100.0, 1000.0]);
}

#[test]
fn fixed_limits_win_over_data() {
    let figure = Figure::new()
        .y_scale(y_pct_fmt_full())
        .line("share", vec![(0.0, 0.2), (1.0, 0.3)]);

    let (_, y) = figure.resolve_axes().expect("axes");
    assert_eq!(y.limits, (0.0, 1.0));
}

#[test]
fn empty_figure_falls_back_to_unit_limits() {
    let (x, y) = Figure::new().resolve_axes().expect("axes");
    assert_eq!(x.limits, (0.0, 1.0));
    assert_eq!(y.limits, (0.0, 1.0));
}

#[test]
fn scale_for_wrong_axis_is_rejected() {
    let result = Figure::new().x_scale(y_comma_fmt()).resolve_axes();
    assert!(matches!(
        result,
        Err(RenderError::AxisMismatch {
            slot: Axis::X,
            scale: Axis::Y
        })
    ));
}

#[test]
fn themes_stack_on_the_figure() {
    let figure = Figure::new().theme(figsize(8.0, 4.0)).theme(bottom_legend());
    assert_eq!(figure.current_theme().figure_size, Some((8.0, 4.0)));
    assert_eq!(figure.current_theme().pixel_size(), (800, 400));
}

#[test]
fn coordinate_key_points_follow_breaks() {
    let resolved = ContinuousScale::new(Axis::X).resolve((0.0, 5.0));
    let coord = AxisCoord::new(resolved.clone());

    assert_eq!(coord.key_points(BoldPoints(10)), resolved.major);
    let all = coord.key_points(100usize);
    assert_eq!(all.len(), resolved.major.len() + resolved.minor.len());
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(coord.range(), 0.0..5.0);
}

#[test]
fn coordinate_maps_linear_and_log_positions() {
    let linear = AxisCoord::new(ContinuousScale::new(Axis::X).resolve((0.0, 10.0)));
    assert_eq!(linear.map(&5.0, (0, 100)), 50);
    assert_eq!(linear.map(&10.0, (0, 100)), 100);

    let log = AxisCoord::new(y_log10_fmt().resolve((1.0, 1000.0)));
    assert_eq!(log.transform(), Transform::Log10);
    assert_eq!(log.map(&10.0, (0, 300)), 100);
    assert_eq!(log.map(&100.0, (0, 300)), 200);
}

#[test]
fn degenerate_coordinate_maps_to_start() {
    let coord = AxisCoord::new(ContinuousScale::new(Axis::X).resolve((2.0, 2.0)));
    assert_eq!(coord.map(&2.0, (10, 90)), 10);
}

#[test]
#[ignore = "requires system fonts for text layout"]
fn figure_renders_svg_with_axis_labels() {
    let svg = Figure::new()
        .theme(figsize(6.0, 4.0) + bottom_legend())
        .title("Weekly signups")
        .x_scale(x_comma_fmt())
        .y_scale(y_pct_fmt_full().with_title("Share"))
        .line("share", vec![(0.0, 0.1), (2000.0, 0.5), (4000.0, 0.9)])
        .render_svg()
        .expect("render");

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("100%"));
    assert!(svg.contains("4,000"));
}
