use serde::{Deserialize, Serialize};

/// Paint-order bucket for chart primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Grid,
    Series,
    Axis,
    Legend,
}

impl LayerKind {
    /// Canonical back-to-front paint order.
    pub const CANONICAL: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Series,
        Self::Axis,
        Self::Legend,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Grid => "grid",
            Self::Series => "series",
            Self::Axis => "axis",
            Self::Legend => "legend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LayerKind;

    #[test]
    fn canonical_order_paints_grid_below_series_and_axes_on_top() {
        assert_eq!(
            LayerKind::CANONICAL,
            [
                LayerKind::Background,
                LayerKind::Grid,
                LayerKind::Series,
                LayerKind::Axis,
                LayerKind::Legend,
            ]
        );
    }
}
