use approx::assert_relative_eq;
use ezcharts::api::{Chart, ChartConfig, PieChart, PieSlice};
use ezcharts::core::{Margin, Viewport};
use ezcharts::error::ChartError;
use ezcharts::render::{LayerKind, PathCommand};

fn square() -> ChartConfig {
    ChartConfig::new(Viewport::new(400, 400))
}

fn quarters() -> PieChart {
    PieChart::new(vec![
        PieSlice::new("a", 1.0),
        PieSlice::new("b", 1.0),
        PieSlice::new("c", 1.0),
        PieSlice::new("d", 1.0),
    ])
}

#[test]
fn equal_slices_get_equal_labels() {
    let frame = quarters().build_frame(&square()).expect("frame");
    let series = frame.layer(LayerKind::Series).expect("series");
    assert_eq!(series.paths.len(), 4);
    assert!(series.texts.iter().all(|text| text.text == "25.0%"));
}

#[test]
fn first_slice_starts_at_top_of_circle() {
    let frame = quarters().build_frame(&square()).expect("frame");
    let commands = &frame.layer(LayerKind::Series).expect("series").paths[0].commands;

    assert_eq!(commands[0], PathCommand::MoveTo { x: 200.0, y: 200.0 });
    let PathCommand::LineTo { x, y } = commands[1] else {
        panic!("expected line to the outer edge");
    };
    assert_relative_eq!(x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(y, 40.0, epsilon = 1e-9);

    let PathCommand::ArcTo {
        rx,
        large_arc,
        sweep,
        x,
        y,
        ..
    } = commands[2]
    else {
        panic!("expected outer arc");
    };
    assert_eq!(rx, 160.0);
    assert!(!large_arc);
    assert!(sweep);
    assert_relative_eq!(x, 360.0, epsilon = 1e-9);
    assert_relative_eq!(y, 200.0, epsilon = 1e-9);
}

#[test]
fn majority_slice_uses_large_arc() {
    let chart = PieChart::new(vec![PieSlice::new("big", 3.0), PieSlice::new("small", 1.0)]);
    let frame = chart.build_frame(&square()).expect("frame");
    let commands = &frame.layer(LayerKind::Series).expect("series").paths[0].commands;
    assert!(matches!(
        commands[2],
        PathCommand::ArcTo {
            large_arc: true,
            ..
        }
    ));
}

#[test]
fn labels_sit_at_seventy_percent_of_ring() {
    let chart = PieChart::new(vec![PieSlice::new("a", 1.0), PieSlice::new("b", 1.0)])
        .with_inner_radius(60.0);
    let geometry = chart.geometry(Viewport::new(400, 400));
    // first half spans the right side; its mid angle points at three o'clock
    assert_relative_eq!(geometry[0].label_x, 200.0 + 60.0 + 100.0 * 0.7, epsilon = 1e-9);
    assert_relative_eq!(geometry[0].label_y, 200.0, epsilon = 1e-9);
}

#[test]
fn donut_slices_trace_both_rings() {
    let frame = quarters()
        .with_inner_radius(60.0)
        .build_frame(&square())
        .expect("frame");
    let commands = &frame.layer(LayerKind::Series).expect("series").paths[0].commands;
    assert_eq!(commands.len(), 5);
    assert!(matches!(
        commands[3],
        PathCommand::ArcTo { rx, sweep: false, .. } if rx == 60.0
    ));
}

#[test]
fn single_full_slice_is_drawn_as_two_half_arcs() {
    let chart = PieChart::new(vec![PieSlice::new("all", 5.0)]);
    let frame = chart.build_frame(&square()).expect("frame");
    let series = frame.layer(LayerKind::Series).expect("series");
    let arcs = series.paths[0]
        .commands
        .iter()
        .filter(|command| matches!(command, PathCommand::ArcTo { .. }))
        .count();
    assert_eq!(arcs, 2);
    assert_eq!(series.texts[0].text, "100.0%");
    frame.validate().expect("valid frame");
}

#[test]
fn negligible_slices_hide_their_label() {
    let chart = PieChart::new(vec![
        PieSlice::new("most", 10_000.0),
        PieSlice::new("sliver", 1.0),
        PieSlice::new("none", 0.0),
    ]);
    let frame = chart.build_frame(&square()).expect("frame");
    let series = frame.layer(LayerKind::Series).expect("series");
    assert_eq!(series.paths.len(), 2);
    let labels: Vec<&str> = series.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["100.0%"]);
}

#[test]
fn zero_total_yields_empty_series_layer() {
    let chart = PieChart::new(vec![PieSlice::new("a", 0.0), PieSlice::new("b", 0.0)]);
    let frame = chart.build_frame(&square()).expect("frame");
    assert!(frame.is_empty());
}

#[test]
fn viewport_too_small_for_a_pie_is_rejected() {
    let config = ChartConfig::new(Viewport::new(80, 80)).with_margin(Margin::uniform(0.0));
    let err = quarters().build_frame(&config).expect_err("no room");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn inner_radius_must_fit_inside_outer() {
    let err = quarters()
        .with_inner_radius(500.0)
        .build_frame(&square())
        .expect_err("inner too large");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
