use ezcharts::api::{CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig, PlotArea};
use ezcharts::core::{Margin, TickOptions, Viewport};
use ezcharts::error::ChartError;

#[test]
fn defaults_match_component_defaults() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(600, 400));
    assert_eq!(config.margin, Margin::new(20.0, 20.0, 40.0, 50.0));
    assert!(config.show_grid);
    assert_eq!(config.x_ticks, TickOptions::new(5));
    assert_eq!(config.y_ticks, TickOptions::new(5));
}

#[test]
fn plot_area_is_viewport_minus_margins() {
    let area = ChartConfig::default().plot_area().expect("area");
    assert_eq!(
        area,
        PlotArea {
            left: 50.0,
            top: 20.0,
            width: 530.0,
            height: 340.0,
        }
    );
    assert_eq!(area.right(), 580.0);
    assert_eq!(area.bottom(), 360.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::new(Viewport::new(800, 500))
        .with_margin(Margin::uniform(10.0))
        .with_grid(false)
        .with_tick_counts(8, 4);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {CHART_CONFIG_JSON_SCHEMA_V1}")));
    let restored = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn bare_json_object_falls_back_to_defaults() {
    let config = ChartConfig::from_json_str(r#"{"viewport":{"width":900,"height":300}}"#)
        .expect("parse");
    assert_eq!(config.viewport, Viewport::new(900, 300));
    assert_eq!(config.margin, Margin::default());
    assert!(config.show_grid);

    let empty = ChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(empty, ChartConfig::default());
}

#[test]
fn zero_viewport_is_rejected() {
    let err = ChartConfig::from_json_str(r#"{"viewport":{"width":0,"height":300}}"#)
        .expect_err("zero width");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 300
        }
    ));
}

#[test]
fn margins_wider_than_viewport_are_rejected() {
    let config = ChartConfig::new(Viewport::new(60, 400));
    assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
    assert!(config.plot_area().is_err());
}

#[test]
fn zero_tick_count_is_rejected() {
    let config = ChartConfig::default().with_tick_counts(0, 5);
    assert!(matches!(config.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn malformed_json_and_unknown_schema_are_rejected() {
    assert!(matches!(
        ChartConfig::from_json_str("not json"),
        Err(ChartError::InvalidConfig(_))
    ));
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"schema_version":2,"config":{}}"#),
        Err(ChartError::InvalidConfig(_))
    ));
}
