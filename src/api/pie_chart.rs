use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Chart;
use crate::api::chart_config::ChartConfig;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LayerKind, PathCommand, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Gap between the pie and the viewport edge.
const PIE_EDGE_INSET_PX: f64 = 40.0;
/// Fraction of the ring thickness at which percentage labels sit.
const LABEL_RADIUS_RATIO: f64 = 0.7;
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<Color>,
}

impl PieSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Resolved angles and label placement for one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total, formatted with one decimal.
    pub percentage: String,
    pub label_x: f64,
    pub label_y: f64,
}

impl SliceGeometry {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Pie or donut chart centred in the viewport; margins are not used.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    slices: Vec<PieSlice>,
    inner_radius: f64,
    show_labels: bool,
}

impl PieChart {
    #[must_use]
    pub fn new(slices: Vec<PieSlice>) -> Self {
        Self {
            slices,
            inner_radius: 0.0,
            show_labels: true,
        }
    }

    /// A positive inner radius turns the pie into a donut.
    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    #[must_use]
    pub fn radius(viewport: Viewport) -> f64 {
        f64::from(viewport.width.min(viewport.height)) / 2.0 - PIE_EDGE_INSET_PX
    }

    /// Slice geometry clockwise from twelve o'clock.
    ///
    /// Non-finite values count as zero. Returns an empty list when the total
    /// is not a positive finite number.
    #[must_use]
    pub fn geometry(&self, viewport: Viewport) -> Vec<SliceGeometry> {
        let total: f64 = self.slices.iter().map(finite_value).sum();
        if !total.is_finite() || total <= 0.0 {
            return Vec::new();
        }

        let (cx, cy) = center(viewport);
        let radius = Self::radius(viewport);
        let label_radius = self.inner_radius + (radius - self.inner_radius) * LABEL_RADIUS_RATIO;

        let mut angle = -FRAC_PI_2;
        self.slices
            .iter()
            .map(|slice| {
                let share = finite_value(slice) / total;
                let start_angle = angle;
                let end_angle = angle + share * TAU;
                angle = end_angle;
                let mid = (start_angle + end_angle) / 2.0;
                SliceGeometry {
                    start_angle,
                    end_angle,
                    percentage: format!("{:.1}", share * 100.0),
                    label_x: cx + label_radius * mid.cos(),
                    label_y: cy + label_radius * mid.sin(),
                }
            })
            .collect()
    }

    fn slice_commands(&self, viewport: Viewport, geometry: &SliceGeometry) -> Vec<PathCommand> {
        let (cx, cy) = center(viewport);
        let radius = Self::radius(viewport);
        let inner = self.inner_radius;
        let at = |r: f64, angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());

        if geometry.sweep() >= TAU - FULL_TURN_EPSILON {
            return full_ring_commands(at, radius, inner, geometry.start_angle);
        }

        let large_arc = geometry.sweep() > PI;
        let (osx, osy) = at(radius, geometry.start_angle);
        let (oex, oey) = at(radius, geometry.end_angle);
        if inner > 0.0 {
            let (iex, iey) = at(inner, geometry.end_angle);
            let (isx, isy) = at(inner, geometry.start_angle);
            vec![
                PathCommand::MoveTo { x: osx, y: osy },
                arc(radius, large_arc, true, oex, oey),
                PathCommand::LineTo { x: iex, y: iey },
                arc(inner, large_arc, false, isx, isy),
                PathCommand::Close,
            ]
        } else {
            vec![
                PathCommand::MoveTo { x: cx, y: cy },
                PathCommand::LineTo { x: osx, y: osy },
                arc(radius, large_arc, true, oex, oey),
                PathCommand::Close,
            ]
        }
    }
}

fn finite_value(slice: &PieSlice) -> f64 {
    if slice.value.is_finite() {
        slice.value
    } else {
        0.0
    }
}

fn center(viewport: Viewport) -> (f64, f64) {
    (
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
    )
}

fn arc(r: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> PathCommand {
    PathCommand::ArcTo {
        rx: r,
        ry: r,
        large_arc,
        sweep,
        x,
        y,
    }
}

/// A whole circle as two half arcs, since one arc cannot end where it starts.
fn full_ring_commands(
    at: impl Fn(f64, f64) -> (f64, f64),
    radius: f64,
    inner: f64,
    start: f64,
) -> Vec<PathCommand> {
    let (sx, sy) = at(radius, start);
    let (hx, hy) = at(radius, start + PI);
    let mut commands = vec![
        PathCommand::MoveTo { x: sx, y: sy },
        arc(radius, false, true, hx, hy),
        arc(radius, false, true, sx, sy),
        PathCommand::Close,
    ];
    if inner > 0.0 {
        let (isx, isy) = at(inner, start);
        let (ihx, ihy) = at(inner, start + PI);
        commands.extend([
            PathCommand::MoveTo { x: isx, y: isy },
            arc(inner, false, false, ihx, ihy),
            arc(inner, false, false, isx, isy),
            PathCommand::Close,
        ]);
    }
    commands
}

impl Chart for PieChart {
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame> {
        config.validate()?;
        let viewport = config.viewport;
        let radius = Self::radius(viewport);
        if radius <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "viewport {}x{} leaves no room for a pie",
                viewport.width, viewport.height
            )));
        }
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 || self.inner_radius >= radius
        {
            return Err(ChartError::InvalidConfig(format!(
                "inner radius must be in [0, {radius})"
            )));
        }

        let mut frame = RenderFrame::new(viewport);
        let geometry = self.geometry(viewport);
        if geometry.is_empty() {
            warn!(slices = self.slices.len(), "pie chart has no positive total");
            return Ok(frame);
        }

        let total = self.slices.len();
        for (index, (slice, geometry)) in self.slices.iter().zip(&geometry).enumerate() {
            if geometry.sweep() <= 0.0 {
                continue;
            }
            let color = slice
                .color
                .unwrap_or_else(|| Color::palette(index, total, 0.6));
            frame.push_path(
                LayerKind::Series,
                PathPrimitive::new(self.slice_commands(viewport, geometry))
                    .with_fill(color)
                    .with_stroke(2.0, Color::WHITE),
            );
            if self.show_labels && geometry.percentage != "0.0" {
                frame.push_text(
                    LayerKind::Series,
                    TextPrimitive::new(
                        format!("{}%", geometry.percentage),
                        geometry.label_x,
                        geometry.label_y,
                        12.0,
                        Color::WHITE,
                        TextHAlign::Center,
                    ),
                );
            }
        }

        debug!(slices = total, radius, "built pie chart frame");
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::{PieChart, PieSlice};
    use crate::core::Viewport;

    #[test]
    fn slices_start_at_twelve_o_clock() {
        let chart = PieChart::new(vec![PieSlice::new("a", 1.0), PieSlice::new("b", 3.0)]);
        let geometry = chart.geometry(Viewport::new(400, 400));
        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry[0].start_angle, -FRAC_PI_2);
        assert_eq!(geometry[0].percentage, "25.0");
        assert_eq!(geometry[1].percentage, "75.0");
        assert!((geometry[1].end_angle - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn radius_leaves_edge_inset() {
        assert_eq!(PieChart::radius(Viewport::new(600, 400)), 160.0);
    }

    #[test]
    fn non_finite_values_take_no_share() {
        let chart = PieChart::new(vec![
            PieSlice::new("a", 1.0),
            PieSlice::new("nan", f64::NAN),
            PieSlice::new("b", 1.0),
        ]);
        let geometry = chart.geometry(Viewport::new(400, 400));
        assert_eq!(geometry[0].percentage, "50.0");
        assert_eq!(geometry[1].sweep(), 0.0);
    }

    #[test]
    fn zero_total_yields_no_geometry() {
        let chart = PieChart::new(vec![PieSlice::new("a", 0.0)]);
        assert!(chart.geometry(Viewport::default()).is_empty());
    }
}
