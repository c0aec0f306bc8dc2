use serde::{Deserialize, Serialize};

use crate::render::{Color, LayerKind, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub const DEFAULT_LEGEND_SPACING: f64 = 20.0;

const SWATCH_SIZE_PX: f64 = 12.0;
const LABEL_OFFSET_PX: f64 = 16.0;
const ITEM_WIDTH_PX: f64 = 100.0;
const ITEM_HEIGHT_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
}

impl LegendItem {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Row or column of colour swatches with labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    items: Vec<LegendItem>,
    origin: (f64, f64),
    orientation: LegendOrientation,
    spacing: f64,
    label_color: Color,
}

impl Legend {
    #[must_use]
    pub fn new(items: Vec<LegendItem>, origin: (f64, f64)) -> Self {
        Self {
            items,
            origin,
            orientation: LegendOrientation::default(),
            spacing: DEFAULT_LEGEND_SPACING,
            label_color: Color::rgb(0.216, 0.255, 0.318),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: LegendOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[LegendItem] {
        &self.items
    }

    /// Top-left corner of the item at `index`.
    #[must_use]
    pub fn item_origin(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.origin;
        let step = index as f64;
        match self.orientation {
            LegendOrientation::Horizontal => (x + step * (ITEM_WIDTH_PX + self.spacing), y),
            LegendOrientation::Vertical => (x, y + step * (ITEM_HEIGHT_PX + self.spacing)),
        }
    }

    pub fn draw(&self, frame: &mut RenderFrame) {
        for (index, item) in self.items.iter().enumerate() {
            let (x, y) = self.item_origin(index);
            frame.push_rect(
                LayerKind::Legend,
                RectPrimitive::new(x, y, SWATCH_SIZE_PX, SWATCH_SIZE_PX, item.color),
            );
            if item.label.is_empty() {
                continue;
            }
            frame.push_text(
                LayerKind::Legend,
                TextPrimitive::new(
                    item.label.clone(),
                    x + LABEL_OFFSET_PX,
                    y + SWATCH_SIZE_PX - 2.0,
                    12.0,
                    self.label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }
}
