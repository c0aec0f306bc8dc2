//! Chart composition on top of the scale engine.
//!
//! Every chart turns its data plus a [`ChartConfig`] into a deterministic
//! [`RenderFrame`]; drawing is left to a [`Renderer`].

mod area_chart;
mod axis;
mod bar_chart;
mod chart_config;
mod grid;
mod layout_helpers;
mod legend;
mod line_chart;
mod pie_chart;
mod scatter_plot;

pub use area_chart::{
    AreaBand, AreaChart, AreaSeries, DEFAULT_OVERLAP_OPACITY, DEFAULT_STACKED_OPACITY,
    area_path_commands,
};
pub use axis::{Axis, AxisOrientation, AxisStyle, AxisTick, TickLabelFormatter};
pub use bar_chart::{BarChart, BarDatum, DEFAULT_BAR_COLOR, DEFAULT_BAR_PADDING};
pub use chart_config::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig, ChartConfigJsonContractV1, PlotArea,
};
pub use grid::Grid;
pub use layout_helpers::format_tick_label;
pub use legend::{DEFAULT_LEGEND_SPACING, Legend, LegendItem, LegendOrientation};
pub use line_chart::{
    DEFAULT_LINE_WIDTH, DEFAULT_POINT_RADIUS, LineChart, LineSeries, line_path_commands,
};
pub use pie_chart::{PieChart, PieSlice, SliceGeometry};
pub use scatter_plot::{
    DEFAULT_MARKER_OPACITY, DEFAULT_MARKER_RADIUS, ScatterPlot, ScatterPoint,
};

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, SvgRenderer};

/// Contract shared by every chart builder.
pub trait Chart {
    /// Lays the chart out into absolute-pixel primitives.
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame>;

    fn render<R: Renderer>(&self, config: &ChartConfig, renderer: &mut R) -> ChartResult<()>
    where
        Self: Sized,
    {
        let frame = self.build_frame(config)?;
        renderer.render(&frame)
    }

    /// Builds the frame and serializes it as a standalone SVG document.
    fn to_svg(&self, config: &ChartConfig) -> ChartResult<String> {
        SvgRenderer::render_to_string(&self.build_frame(config)?)
    }
}
