use tracing::warn;

use crate::api::axis::Axis;
use crate::api::chart_config::{ChartConfig, PlotArea};
use crate::api::grid::Grid;
use crate::render::RenderFrame;

/// Pixels of slack allowed when deciding whether a tick falls on the axis.
const AXIS_EDGE_TOLERANCE_PX: f64 = 0.5;

/// Widens a zero-width domain so scales built on it stay finite.
pub(super) fn widen_degenerate_domain(domain: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = domain;
    if lo != hi {
        return domain;
    }
    let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
    warn!(lo, hi, pad, "widening degenerate chart domain");
    (lo - pad, hi + pad)
}

/// Expands `(min, max)` outward by 10% of each bound's magnitude.
pub(super) fn headroom_domain(min: f64, max: f64) -> (f64, f64) {
    (min - min.abs() * 0.1, max + max.abs() * 0.1)
}

pub(super) fn within_axis(offset: f64, length: f64) -> bool {
    let (lo, hi) = if length >= 0.0 {
        (0.0, length)
    } else {
        (length, 0.0)
    };
    offset >= lo - AXIS_EDGE_TOLERANCE_PX && offset <= hi + AXIS_EDGE_TOLERANCE_PX
}

/// Left axis plus horizontal grid lines for a value domain.
pub(super) fn draw_y_guides(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    area: PlotArea,
    y_domain: (f64, f64),
) {
    if config.show_grid {
        Grid::new(area)
            .with_horizontal(y_domain, config.y_ticks)
            .draw(frame);
    }
    Axis::left((area.left, area.top), area.height, y_domain)
        .with_ticks(config.y_ticks)
        .draw(frame);
}

/// Bottom axis plus vertical grid lines for a numeric x domain.
pub(super) fn draw_x_guides(
    frame: &mut RenderFrame,
    config: &ChartConfig,
    area: PlotArea,
    x_domain: (f64, f64),
) {
    if config.show_grid {
        Grid::new(area)
            .with_vertical(x_domain, config.x_ticks)
            .draw(frame);
    }
    Axis::bottom((area.left, area.bottom()), area.width, x_domain)
        .with_ticks(config.x_ticks)
        .draw(frame);
}

/// Shortest decimal rendering of a tick value, printing negative zero as `0`.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
