use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Chart;
use crate::api::chart_config::ChartConfig;
use crate::api::layout_helpers::{
    draw_x_guides, draw_y_guides, headroom_domain, widen_degenerate_domain,
};
use crate::api::legend::LegendItem;
use crate::core::{DataPoint, extent, linear_scale};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, LayerKind, PathCommand, PathPrimitive, RenderFrame};

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_POINT_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

impl LineSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            stroke_width: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }
}

/// One or more polyline series over shared numeric axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    series: Vec<LineSeries>,
    show_points: bool,
    curved: bool,
}

impl LineChart {
    #[must_use]
    pub fn new(series: Vec<LineSeries>) -> Self {
        Self {
            series,
            show_points: false,
            curved: false,
        }
    }

    #[must_use]
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    /// Smooths each series with quadratic segments through point midpoints.
    #[must_use]
    pub fn with_curve(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    /// One legend entry per series, in the colors the series are drawn with.
    #[must_use]
    pub fn legend_items(&self) -> Vec<LegendItem> {
        let total = self.series.len();
        self.series
            .iter()
            .enumerate()
            .map(|(index, series)| {
                LegendItem::new(series.name.clone(), series_color(series, index, total))
            })
            .collect()
    }

    /// Domains over every point of every series; y gets 10% headroom.
    #[must_use]
    pub fn domains(&self) -> ((f64, f64), (f64, f64)) {
        let points: Vec<DataPoint> = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().copied())
            .filter(|point| point.x.is_finite() && point.y.is_finite())
            .collect();
        let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
        let (y_min, y_max) = extent(&ys);
        (
            widen_degenerate_domain(extent(&xs)),
            widen_degenerate_domain(headroom_domain(y_min, y_max)),
        )
    }
}

fn series_color(series: &LineSeries, index: usize, total: usize) -> Color {
    series
        .color
        .unwrap_or_else(|| Color::palette(index, total, 0.5))
}

/// Path commands for a projected polyline.
///
/// Curved output uses every point as a quadratic control point ending at the
/// midpoint of the following segment, then closes with a smooth segment into
/// the last point.
#[must_use]
pub fn line_path_commands(points: &[(f64, f64)], curved: bool) -> Vec<PathCommand> {
    let Some(&(x0, y0)) = points.first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(points.len() + 2);
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });

    if !curved || points.len() < 2 {
        commands.extend(
            points[1..]
                .iter()
                .map(|&(x, y)| PathCommand::LineTo { x, y }),
        );
        return commands;
    }

    for pair in points.windows(2) {
        let (cx, cy) = pair[0];
        let (nx, ny) = pair[1];
        commands.push(PathCommand::QuadTo {
            cx,
            cy,
            x: (cx + nx) / 2.0,
            y: (cy + ny) / 2.0,
        });
    }
    if let Some(&(x, y)) = points.last() {
        commands.push(PathCommand::SmoothQuadTo { x, y });
    }
    commands
}

impl Chart for LineChart {
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame> {
        let area = config.plot_area()?;
        let mut frame = RenderFrame::new(config.viewport);

        if self.series.iter().all(|series| series.points.is_empty()) {
            warn!("line chart has no data");
        }

        let (x_domain, y_domain) = self.domains();
        let x = linear_scale(x_domain, (area.left, area.right()));
        let y = linear_scale(y_domain, (area.bottom(), area.top));

        draw_y_guides(&mut frame, config, area, y_domain);
        draw_x_guides(&mut frame, config, area, x_domain);

        let total = self.series.len();
        for (index, series) in self.series.iter().enumerate() {
            let color = series_color(series, index, total);
            let stroke_width = series.stroke_width.unwrap_or(DEFAULT_LINE_WIDTH);
            let projected: Vec<(f64, f64)> = series
                .points
                .iter()
                .filter(|point| point.x.is_finite() && point.y.is_finite())
                .map(|point| (x(point.x), y(point.y)))
                .collect();
            if projected.is_empty() {
                continue;
            }

            frame.push_path(
                LayerKind::Series,
                PathPrimitive::new(line_path_commands(&projected, self.curved))
                    .with_stroke(stroke_width, color),
            );
            if self.show_points {
                for &(cx, cy) in &projected {
                    frame.push_circle(
                        LayerKind::Series,
                        CirclePrimitive::new(cx, cy, DEFAULT_POINT_RADIUS, color)
                            .with_stroke(2.0, Color::WHITE),
                    );
                }
            }
        }

        debug!(
            series = total,
            x_min = x_domain.0,
            x_max = x_domain.1,
            y_min = y_domain.0,
            y_max = y_domain.1,
            "built line chart frame"
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::line_path_commands;
    use crate::render::PathCommand;

    #[test]
    fn straight_path_moves_then_lines() {
        let commands = line_path_commands(&[(0.0, 0.0), (10.0, 5.0)], false);
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::LineTo { x: 10.0, y: 5.0 },
            ]
        );
    }

    #[test]
    fn curved_path_bends_through_midpoints() {
        let commands = line_path_commands(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)], true);
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo { x: 0.0, y: 0.0 },
                PathCommand::QuadTo {
                    cx: 0.0,
                    cy: 0.0,
                    x: 5.0,
                    y: 5.0
                },
                PathCommand::QuadTo {
                    cx: 10.0,
                    cy: 10.0,
                    x: 15.0,
                    y: 5.0
                },
                PathCommand::SmoothQuadTo { x: 20.0, y: 0.0 },
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_commands() {
        assert!(line_path_commands(&[], true).is_empty());
    }
}
