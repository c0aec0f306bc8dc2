use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Chart;
use crate::api::bar_chart::DEFAULT_BAR_COLOR;
use crate::api::chart_config::ChartConfig;
use crate::api::layout_helpers::{draw_x_guides, draw_y_guides, widen_degenerate_domain};
use crate::core::{LinearScale, extent};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, Color, LayerKind, RenderFrame};

pub const DEFAULT_MARKER_RADIUS: f64 = 4.0;
pub const DEFAULT_MARKER_OPACITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    points: Vec<ScatterPoint>,
    color: Color,
    radius: f64,
}

impl ScatterPlot {
    #[must_use]
    pub fn new(points: Vec<ScatterPoint>) -> Self {
        Self {
            points,
            color: DEFAULT_BAR_COLOR,
            radius: DEFAULT_MARKER_RADIUS,
        }
    }

    /// Color for points that do not carry their own.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Radius for points that do not carry their own size.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    #[must_use]
    pub fn domains(&self) -> ((f64, f64), (f64, f64)) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .points
            .iter()
            .filter(|point| point.x.is_finite() && point.y.is_finite())
            .map(|point| (point.x, point.y))
            .unzip();
        (
            widen_degenerate_domain(extent(&xs)),
            widen_degenerate_domain(extent(&ys)),
        )
    }
}

impl Chart for ScatterPlot {
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame> {
        let area = config.plot_area()?;
        let mut frame = RenderFrame::new(config.viewport);
        if self.points.is_empty() {
            warn!("scatter plot has no data");
        }

        let (x_domain, y_domain) = self.domains();
        let x = LinearScale::new(x_domain, (area.left, area.right()));
        let y = LinearScale::new(y_domain, (area.bottom(), area.top));

        draw_y_guides(&mut frame, config, area, y_domain);
        draw_x_guides(&mut frame, config, area, x_domain);

        let mut drawn = 0_usize;
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                continue;
            }
            let fill = point.color.unwrap_or(self.color);
            frame.push_circle(
                LayerKind::Series,
                CirclePrimitive::new(
                    x.map(point.x),
                    y.map(point.y),
                    point.size.unwrap_or(self.radius),
                    fill.with_alpha(fill.alpha * DEFAULT_MARKER_OPACITY),
                )
                .with_stroke(1.0, Color::WHITE),
            );
            drawn += 1;
        }

        debug!(points = drawn, "built scatter plot frame");
        Ok(frame)
    }
}
