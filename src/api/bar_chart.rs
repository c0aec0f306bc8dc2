use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Chart;
use crate::api::axis::{Axis, AxisOrientation};
use crate::api::chart_config::ChartConfig;
use crate::api::layout_helpers::{draw_y_guides, widen_degenerate_domain};
use crate::core::{LinearScale, band_scale, extent};
use crate::error::ChartResult;
use crate::render::{Color, LayerKind, RectPrimitive, RenderFrame};

pub const DEFAULT_BAR_PADDING: f64 = 0.2;
pub const DEFAULT_BAR_COLOR: Color = Color::rgb(0.231, 0.510, 0.965);

/// One labelled bar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Vertical bars over a categorical x axis.
///
/// The value axis always includes zero; bars grow up from the zero line for
/// positive values and down for negative ones.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    data: Vec<BarDatum>,
    color: Color,
    padding: f64,
}

impl BarChart {
    #[must_use]
    pub fn new(data: Vec<BarDatum>) -> Self {
        Self {
            data,
            color: DEFAULT_BAR_COLOR,
            padding: DEFAULT_BAR_PADDING,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    /// Value domain: `[min(0, 1.1 * min), max(0, 1.1 * max)]` over finite values.
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        let values: Vec<f64> = self
            .data
            .iter()
            .map(|datum| datum.value)
            .filter(|value| value.is_finite())
            .collect();
        let (min, max) = extent(&values);
        let lo = if min < 0.0 { min * 1.1 } else { 0.0 };
        let hi = if max > 0.0 { max * 1.1 } else { 0.0 };
        widen_degenerate_domain((lo, hi))
    }
}

impl Chart for BarChart {
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame> {
        let area = config.plot_area()?;
        self.color.validate()?;

        let mut frame = RenderFrame::new(config.viewport);
        if self.data.is_empty() {
            warn!("bar chart has no data");
        }

        let x = band_scale(
            self.data.iter().map(|datum| datum.label.as_str()),
            (0.0, area.width),
            self.padding,
        );
        let y_domain = self.value_domain();
        let y = LinearScale::new(y_domain, (area.bottom(), area.top));
        let zero_y = y.map(0.0);

        draw_y_guides(&mut frame, config, area, y_domain);

        let mut skipped = 0_usize;
        for datum in &self.data {
            if !datum.value.is_finite() {
                skipped += 1;
                continue;
            }
            let value_y = y.map(datum.value);
            frame.push_rect(
                LayerKind::Series,
                RectPrimitive::new(
                    area.left + x.scale(&datum.label),
                    value_y.min(zero_y),
                    x.bandwidth(),
                    (zero_y - value_y).abs(),
                    self.color,
                ),
            );
        }
        if skipped > 0 {
            warn!(skipped, "bar chart skipped non-finite values");
        }

        Axis::categorical(AxisOrientation::Bottom, (area.left, area.bottom()), x).draw(&mut frame);

        debug!(
            bars = self.data.len() - skipped,
            y_min = y_domain.0,
            y_max = y_domain.1,
            "built bar chart frame"
        );
        Ok(frame)
    }
}
