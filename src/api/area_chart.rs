use std::collections::{BTreeMap, BTreeSet};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::Chart;
use crate::api::chart_config::ChartConfig;
use crate::api::layout_helpers::{draw_x_guides, draw_y_guides, widen_degenerate_domain};
use crate::api::legend::LegendItem;
use crate::core::{DataPoint, LinearScale, extent};
use crate::error::ChartResult;
use crate::render::{Color, LayerKind, PathCommand, PathPrimitive, RenderFrame};

pub const DEFAULT_OVERLAP_OPACITY: f64 = 0.3;
pub const DEFAULT_STACKED_OPACITY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub fill_opacity: Option<f64>,
}

impl AreaSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
            color: None,
            fill_opacity: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = Some(fill_opacity);
        self
    }
}

/// Upper and lower outline of one filled band, in data space.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaBand {
    pub top: Vec<DataPoint>,
    pub baseline: Vec<DataPoint>,
}

/// Filled areas, either overlapping on a zero baseline or stacked.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChart {
    series: Vec<AreaSeries>,
    stacked: bool,
}

impl AreaChart {
    #[must_use]
    pub fn new(series: Vec<AreaSeries>) -> Self {
        Self {
            series,
            stacked: false,
        }
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn series(&self) -> &[AreaSeries] {
        &self.series
    }

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

    /// Data-space bands for every series, in series order.
    ///
    /// Overlapping bands sit on `y = 0` under their own x-sorted points.
    /// Stacked bands share the sorted union of x values; series `k` sits on the
    /// running sum of series `0..k`, a missing x counting as zero. When a
    /// series repeats an x, its first value wins.
    #[must_use]
    pub fn bands(&self) -> Vec<Option<AreaBand>> {
        if self.stacked {
            self.stacked_bands()
        } else {
            self.series.iter().map(overlap_band).collect()
        }
    }

    fn stacked_bands(&self) -> Vec<Option<AreaBand>> {
        let xs: BTreeSet<OrderedFloat<f64>> = self
            .series
            .iter()
            .flat_map(|series| finite_points(&series.points))
            .map(|point| OrderedFloat(point.x))
            .collect();
        let mut running: BTreeMap<OrderedFloat<f64>, f64> =
            xs.iter().map(|&x| (x, 0.0)).collect();

        let mut bands = Vec::with_capacity(self.series.len());
        for series in &self.series {
            let mut values: BTreeMap<OrderedFloat<f64>, f64> = BTreeMap::new();
            for point in finite_points(&series.points) {
                values.entry(OrderedFloat(point.x)).or_insert(point.y);
            }
            if values.is_empty() {
                bands.push(None);
                continue;
            }

            let mut band = AreaBand {
                top: Vec::with_capacity(running.len()),
                baseline: Vec::with_capacity(running.len()),
            };
            for (x, base) in running.iter_mut() {
                let top = *base + values.get(x).copied().unwrap_or(0.0);
                band.baseline.push(DataPoint::new(x.0, *base));
                band.top.push(DataPoint::new(x.0, top));
                *base = top;
            }
            bands.push(Some(band));
        }
        bands
    }

    #[must_use]
    pub fn domains(&self) -> ((f64, f64), (f64, f64)) {
        let xs: Vec<f64> = self
            .series
            .iter()
            .flat_map(|series| finite_points(&series.points))
            .map(|point| point.x)
            .collect();

        let y_domain = if self.stacked {
            let cumulative_max = self
                .bands()
                .iter()
                .flatten()
                .flat_map(|band| band.top.iter())
                .fold(0.0_f64, |max, point| max.max(point.y));
            (0.0, cumulative_max * 1.1)
        } else {
            let ys: Vec<f64> = self
                .series
                .iter()
                .flat_map(|series| finite_points(&series.points))
                .map(|point| point.y)
                .collect();
            let (min, max) = extent(&ys);
            let lo = if min < 0.0 { min * 1.1 } else { 0.0 };
            let hi = if max > 0.0 { max * 1.1 } else { 0.0 };
            (lo, hi)
        };

        (
            widen_degenerate_domain(extent(&xs)),
            widen_degenerate_domain(y_domain),
        )
    }
}

fn series_color(series: &AreaSeries, index: usize, total: usize) -> Color {
    series
        .color
        .unwrap_or_else(|| Color::palette(index, total, 0.5))
}

fn finite_points(points: &[DataPoint]) -> impl Iterator<Item = &DataPoint> {
    points
        .iter()
        .filter(|point| point.x.is_finite() && point.y.is_finite())
}

fn overlap_band(series: &AreaSeries) -> Option<AreaBand> {
    let mut top: Vec<DataPoint> = finite_points(&series.points).copied().collect();
    top.sort_by(|a, b| a.x.total_cmp(&b.x));
    let first = top.first()?.x;
    let last = top.last()?.x;
    Some(AreaBand {
        baseline: vec![DataPoint::new(first, 0.0), DataPoint::new(last, 0.0)],
        top,
    })
}

/// Closed outline: up from the first baseline point, across the top, then back
/// along the baseline.
#[must_use]
pub fn area_path_commands(top: &[(f64, f64)], baseline: &[(f64, f64)]) -> Vec<PathCommand> {
    let Some(&(x0, y0)) = baseline.first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(top.len() + baseline.len() + 1);
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });
    commands.extend(top.iter().map(|&(x, y)| PathCommand::LineTo { x, y }));
    commands.extend(
        baseline[1..]
            .iter()
            .rev()
            .map(|&(x, y)| PathCommand::LineTo { x, y }),
    );
    commands.push(PathCommand::Close);
    commands
}

impl Chart for AreaChart {
    fn build_frame(&self, config: &ChartConfig) -> ChartResult<RenderFrame> {
        let area = config.plot_area()?;
        let mut frame = RenderFrame::new(config.viewport);
        if self.series.iter().all(|series| series.points.is_empty()) {
            warn!("area chart has no data");
        }

        let (x_domain, y_domain) = self.domains();
        let x = LinearScale::new(x_domain, (area.left, area.right()));
        let y = LinearScale::new(y_domain, (area.bottom(), area.top));
        let project = |points: &[DataPoint]| -> Vec<(f64, f64)> {
            points
                .iter()
                .map(|point| (x.map(point.x), y.map(point.y)))
                .collect()
        };

        draw_y_guides(&mut frame, config, area, y_domain);
        draw_x_guides(&mut frame, config, area, x_domain);

        let default_opacity = if self.stacked {
            DEFAULT_STACKED_OPACITY
        } else {
            DEFAULT_OVERLAP_OPACITY
        };
        let total = self.series.len();
        for (index, (series, band)) in self.series.iter().zip(self.bands()).enumerate() {
            let Some(band) = band else {
                continue;
            };
            let color = series_color(series, index, total);
            let opacity = series.fill_opacity.unwrap_or(default_opacity);
            frame.push_path(
                LayerKind::Series,
                PathPrimitive::new(area_path_commands(
                    &project(&band.top),
                    &project(&band.baseline),
                ))
                .with_fill(color.with_alpha(opacity))
                .with_stroke(2.0, color),
            );
        }

        debug!(
            series = total,
            stacked = self.stacked,
            y_max = y_domain.1,
            "built area chart frame"
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaChart, AreaSeries, area_path_commands};
    use crate::core::DataPoint;
    use crate::render::PathCommand;

    fn pts(values: &[(f64, f64)]) -> Vec<DataPoint> {
        values.iter().copied().map(DataPoint::from).collect()
    }

    #[test]
    fn stacked_bands_sit_on_running_sum() {
        let chart = AreaChart::new(vec![
            AreaSeries::new("a", pts(&[(0.0, 1.0), (1.0, 2.0)])),
            AreaSeries::new("b", pts(&[(0.0, 3.0), (2.0, 4.0)])),
        ])
        .with_stacked(true);

        let bands = chart.bands();
        let second = bands[1].as_ref().expect("second band");
        let baseline: Vec<f64> = second.baseline.iter().map(|p| p.y).collect();
        let top: Vec<f64> = second.top.iter().map(|p| p.y).collect();
        assert_eq!(baseline, vec![1.0, 2.0, 0.0]);
        assert_eq!(top, vec![4.0, 2.0, 4.0]);
    }

    #[test]
    fn overlapping_band_sorts_points_and_uses_zero_baseline() {
        let chart = AreaChart::new(vec![AreaSeries::new(
            "a",
            pts(&[(2.0, 1.0), (0.0, 3.0)]),
        )]);
        let bands = chart.bands();
        let band = bands[0].as_ref().expect("band");
        assert_eq!(band.top[0].x, 0.0);
        assert_eq!(band.baseline, pts(&[(0.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn path_walks_top_then_baseline_back() {
        let commands = area_path_commands(&[(0.0, 5.0), (10.0, 6.0)], &[(0.0, 9.0), (10.0, 9.0)]);
        assert_eq!(
            commands,
            vec![
                PathCommand::MoveTo { x: 0.0, y: 9.0 },
                PathCommand::LineTo { x: 0.0, y: 5.0 },
                PathCommand::LineTo { x: 10.0, y: 6.0 },
                PathCommand::LineTo { x: 10.0, y: 9.0 },
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn stacked_domain_covers_cumulative_maximum() {
        let chart = AreaChart::new(vec![
            AreaSeries::new("a", pts(&[(0.0, 10.0)])),
            AreaSeries::new("b", pts(&[(0.0, 10.0), (1.0, 5.0)])),
        ])
        .with_stacked(true);
        let (x_domain, y_domain) = chart.domains();
        assert_eq!(x_domain, (0.0, 1.0));
        assert!((y_domain.1 - 22.0).abs() < 1e-9);
    }
}
