use serde::{Deserialize, Serialize};

use crate::api::layout_helpers::{format_tick_label, within_axis};
use crate::core::{BandScale, TickOptions, linear_scale, nice_ticks};
use crate::render::{Color, LayerKind, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

/// Formats one numeric tick value into its label.
pub type TickLabelFormatter = fn(f64) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Horizontal axis under the plot; labels hang below the tick marks.
    Bottom,
    /// Vertical axis left of the plot; larger values sit higher.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisStyle {
    pub line_color: Color,
    pub label_color: Color,
    pub stroke_width: f64,
    pub tick_size_px: f64,
    pub font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0.42, 0.447, 0.502),
            label_color: Color::rgb(0.216, 0.255, 0.318),
            stroke_width: 1.0,
            tick_size_px: 6.0,
            font_size_px: 12.0,
        }
    }
}

/// Tick resolved to an offset along the axis, measured from its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
enum AxisSource {
    Numeric {
        domain: (f64, f64),
        ticks: TickOptions,
    },
    Categorical(BandScale),
}

/// Axis line with tick marks and labels.
///
/// `origin` is the absolute pixel position of the axis start: the left end of
/// a bottom axis or the top end of a left axis. Tick offsets are relative to
/// that point.
#[derive(Debug, Clone)]
pub struct Axis {
    orientation: AxisOrientation,
    origin: (f64, f64),
    length: f64,
    source: AxisSource,
    formatter: TickLabelFormatter,
    style: AxisStyle,
}

impl Axis {
    #[must_use]
    pub fn bottom(origin: (f64, f64), length: f64, domain: (f64, f64)) -> Self {
        Self::numeric(AxisOrientation::Bottom, origin, length, domain)
    }

    #[must_use]
    pub fn left(origin: (f64, f64), length: f64, domain: (f64, f64)) -> Self {
        Self::numeric(AxisOrientation::Left, origin, length, domain)
    }

    #[must_use]
    pub fn numeric(
        orientation: AxisOrientation,
        origin: (f64, f64),
        length: f64,
        domain: (f64, f64),
    ) -> Self {
        Self {
            orientation,
            origin,
            length,
            source: AxisSource::Numeric {
                domain,
                ticks: TickOptions::default(),
            },
            formatter: format_tick_label,
            style: AxisStyle::default(),
        }
    }

    /// Labels every key of `scale` at its band centre.
    ///
    /// The scale range is read as offsets from `origin`; the axis spans it.
    #[must_use]
    pub fn categorical(orientation: AxisOrientation, origin: (f64, f64), scale: BandScale) -> Self {
        let (r0, r1) = scale.range();
        Self {
            orientation,
            origin,
            length: r1 - r0,
            source: AxisSource::Categorical(scale),
            formatter: format_tick_label,
            style: AxisStyle::default(),
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, options: TickOptions) -> Self {
        if let AxisSource::Numeric { ticks, .. } = &mut self.source {
            *ticks = options;
        }
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: TickLabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Ticks that land on the axis, in generation order.
    #[must_use]
    pub fn ticks(&self) -> Vec<AxisTick> {
        match &self.source {
            AxisSource::Numeric { domain, ticks } => {
                numeric_tick_offsets(self.orientation, *domain, self.length, ticks.count)
                    .into_iter()
                    .map(|(value, offset)| AxisTick {
                        offset,
                        label: (self.formatter)(value),
                    })
                    .collect()
            }
            AxisSource::Categorical(scale) => {
                let r0 = scale.range().0;
                scale
                    .keys()
                    .map(|key| AxisTick {
                        offset: scale.center(key) - r0,
                        label: key.to_owned(),
                    })
                    .filter(|tick| !tick.label.is_empty())
                    .collect()
            }
        }
    }

    /// Pushes the domain line, tick marks and labels into the axis layer.
    pub fn draw(&self, frame: &mut RenderFrame) {
        let (ox, oy) = self.origin;
        let style = self.style;
        let (x2, y2) = match self.orientation {
            AxisOrientation::Bottom => (ox + self.length, oy),
            AxisOrientation::Left => (ox, oy + self.length),
        };
        let domain_line = LinePrimitive::new(ox, oy, x2, y2, style.stroke_width, style.line_color);
        frame.push_line(LayerKind::Axis, domain_line);

        for tick in self.ticks() {
            let (mark, label) = match self.orientation {
                AxisOrientation::Bottom => {
                    let x = ox + tick.offset;
                    (
                        LinePrimitive::new(
                            x,
                            oy,
                            x,
                            oy + style.tick_size_px,
                            style.stroke_width,
                            style.line_color,
                        ),
                        TextPrimitive::new(
                            tick.label,
                            x,
                            oy + 16.0,
                            style.font_size_px,
                            style.label_color,
                            TextHAlign::Center,
                        ),
                    )
                }
                AxisOrientation::Left => {
                    let y = oy + tick.offset;
                    (
                        LinePrimitive::new(
                            ox - style.tick_size_px,
                            y,
                            ox,
                            y,
                            style.stroke_width,
                            style.line_color,
                        ),
                        TextPrimitive::new(
                            tick.label,
                            ox - 8.0,
                            y + 4.0,
                            style.font_size_px,
                            style.label_color,
                            TextHAlign::Right,
                        ),
                    )
                }
            };
            frame.push_line(LayerKind::Axis, mark);
            if !label.text.is_empty() {
                frame.push_text(LayerKind::Axis, label);
            }
        }
    }
}

/// Nice tick values paired with their offset along an axis of `length` pixels.
///
/// Bottom axes map `domain.0` to offset 0; left axes map it to `length` so the
/// largest value is drawn at the top. Ticks outside the axis are dropped.
pub(super) fn numeric_tick_offsets(
    orientation: AxisOrientation,
    domain: (f64, f64),
    length: f64,
    count: usize,
) -> Vec<(f64, f64)> {
    let range = match orientation {
        AxisOrientation::Bottom => (0.0, length),
        AxisOrientation::Left => (length, 0.0),
    };
    let scale = linear_scale(domain, range);
    nice_ticks(domain.0, domain.1, count)
        .into_iter()
        .map(|value| (value, scale(value)))
        .filter(|&(_, offset)| offset.is_finite() && within_axis(offset, length))
        .collect()
}
