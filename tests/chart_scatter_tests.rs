use approx::assert_relative_eq;
use ezcharts::api::{Chart, ChartConfig, DEFAULT_BAR_COLOR, ScatterPlot, ScatterPoint};
use ezcharts::core::Viewport;
use ezcharts::render::{Color, LayerKind};

fn squares() -> ScatterPlot {
    ScatterPlot::new(vec![
        ScatterPoint::new(1.0, 1.0),
        ScatterPoint::new(2.0, 4.0).with_size(8.0),
        ScatterPoint::new(3.0, 9.0).with_color(Color::BLACK),
    ])
}

#[test]
fn points_fill_the_plot_corners() {
    let frame = squares().build_frame(&ChartConfig::default()).expect("frame");
    let circles = &frame.layer(LayerKind::Series).expect("series").circles;
    assert_eq!(circles.len(), 3);

    assert_relative_eq!(circles[0].cx, 50.0);
    assert_relative_eq!(circles[0].cy, 360.0);
    assert_relative_eq!(circles[2].cx, 580.0);
    assert_relative_eq!(circles[2].cy, 20.0);
}

#[test]
fn markers_are_translucent_with_white_outline() {
    let frame = squares().build_frame(&ChartConfig::default()).expect("frame");
    let circles = &frame.layer(LayerKind::Series).expect("series").circles;

    assert_eq!(circles[0].radius, 4.0);
    assert_eq!(circles[1].radius, 8.0);
    assert_eq!(circles[0].fill_color, DEFAULT_BAR_COLOR.with_alpha(0.7));
    assert_eq!(circles[2].fill_color, Color::BLACK.with_alpha(0.7));
    assert!(circles.iter().all(|circle| circle.stroke_color == Color::WHITE));
}

#[test]
fn identical_points_widen_their_domain() {
    let plot = ScatterPlot::new(vec![ScatterPoint::new(5.0, 0.0), ScatterPoint::new(5.0, 0.0)]);
    let (x_domain, y_domain) = plot.domains();
    assert_eq!(x_domain, (4.5, 5.5));
    assert_eq!(y_domain, (-1.0, 1.0));

    let frame = plot
        .build_frame(&ChartConfig::new(Viewport::new(400, 300)))
        .expect("frame");
    frame.validate().expect("valid frame");
}

#[test]
fn invalid_point_radius_is_caught_at_render_time() {
    let plot = ScatterPlot::new(vec![ScatterPoint::new(1.0, 1.0).with_size(0.0)]);
    assert!(plot.to_svg(&ChartConfig::default()).is_err());
}
