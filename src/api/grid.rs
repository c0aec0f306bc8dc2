use crate::api::axis::{AxisOrientation, numeric_tick_offsets};
use crate::api::chart_config::PlotArea;
use crate::core::TickOptions;
use crate::render::{Color, LayerKind, LinePrimitive, RenderFrame};

/// Light guide lines behind the series, aligned with the axis ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    area: PlotArea,
    x: Option<((f64, f64), TickOptions)>,
    y: Option<((f64, f64), TickOptions)>,
    color: Color,
    stroke_width: f64,
}

impl Grid {
    #[must_use]
    pub fn new(area: PlotArea) -> Self {
        Self {
            area,
            x: None,
            y: None,
            color: Color::rgb(0.898, 0.906, 0.922),
            stroke_width: 1.0,
        }
    }

    /// Vertical lines at the x-domain ticks.
    #[must_use]
    pub fn with_vertical(mut self, domain: (f64, f64), ticks: TickOptions) -> Self {
        self.x = Some((domain, ticks));
        self
    }

    /// Horizontal lines at the y-domain ticks.
    #[must_use]
    pub fn with_horizontal(mut self, domain: (f64, f64), ticks: TickOptions) -> Self {
        self.y = Some((domain, ticks));
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn draw(&self, frame: &mut RenderFrame) {
        let area = self.area;
        if let Some((domain, ticks)) = self.y {
            for (_, offset) in
                numeric_tick_offsets(AxisOrientation::Left, domain, area.height, ticks.count)
            {
                let y = area.top + offset;
                frame.push_line(
                    LayerKind::Grid,
                    LinePrimitive::new(area.left, y, area.right(), y, self.stroke_width, self.color),
                );
            }
        }
        if let Some((domain, ticks)) = self.x {
            for (_, offset) in
                numeric_tick_offsets(AxisOrientation::Bottom, domain, area.width, ticks.count)
            {
                let x = area.left + offset;
                frame.push_line(
                    LayerKind::Grid,
                    LinePrimitive::new(x, area.top, x, area.bottom(), self.stroke_width, self.color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::api::chart_config::PlotArea;
    use crate::core::{TickOptions, Viewport};
    use crate::render::{LayerKind, RenderFrame};

    #[test]
    fn horizontal_lines_span_plot_width() {
        let area = PlotArea {
            left: 50.0,
            top: 20.0,
            width: 530.0,
            height: 340.0,
        };
        let mut frame = RenderFrame::new(Viewport::default());
        Grid::new(area)
            .with_horizontal((0.0, 100.0), TickOptions::new(5))
            .draw(&mut frame);

        let lines = &frame.layer(LayerKind::Grid).expect("grid layer").lines;
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].y1, 360.0);
        assert_eq!(lines[5].y1, 20.0);
        assert!(lines.iter().all(|line| line.x1 == 50.0 && line.x2 == 580.0));
    }
}
