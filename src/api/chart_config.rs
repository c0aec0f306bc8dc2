use serde::{Deserialize, Serialize};

use crate::core::{Margin, TickOptions, Viewport};
use crate::error::{ChartError, ChartResult};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Shared layout configuration for every chart builder.
///
/// This type is serializable so host applications can persist chart setup
/// without inventing their own ad-hoc format. Missing fields fall back to the
/// defaults: a 600x400 viewport, margins of 20/20/40/50 (top/right/bottom/left),
/// grid enabled and five tick intervals per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default)]
    pub x_ticks: TickOptions,
    #[serde(default)]
    pub y_ticks: TickOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::default(),
            show_grid: default_show_grid(),
            x_ticks: TickOptions::default(),
            y_ticks: TickOptions::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_count: usize, y_count: usize) -> Self {
        self.x_ticks = TickOptions::new(x_count);
        self.y_ticks = TickOptions::new(y_count);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margin.is_valid() {
            return Err(ChartError::InvalidConfig(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.x_ticks.count == 0 || self.y_ticks.count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick counts must be > 0".to_owned(),
            ));
        }

        let width = f64::from(self.viewport.width) - self.margin.left - self.margin.right;
        let height = f64::from(self.viewport.height) - self.margin.top - self.margin.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no plot area: width={width}, height={height}"
            )));
        }
        Ok(())
    }

    /// Validates the config and returns the plot rectangle inside the margins.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        self.validate()?;
        Ok(PlotArea {
            left: self.margin.left,
            top: self.margin.top,
            width: f64::from(self.viewport.width) - self.margin.left - self.margin.right,
            height: f64::from(self.viewport.height) - self.margin.top - self.margin.bottom,
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<ChartConfigJsonContractV1>(input) {
            Ok(payload) => {
                if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidConfig(format!(
                        "unsupported chart config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
            Err(_) => serde_json::from_str::<Self>(input).map_err(|e| {
                ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

/// Plot rectangle in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

fn default_show_grid() -> bool {
    true
}
