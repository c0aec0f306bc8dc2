use serde::{Deserialize, Serialize};

/// Inter-band gap as a fraction of band width when none is given.
pub const DEFAULT_BAND_PADDING: f64 = 0.1;
/// Logarithm base used by [`LogScale`](crate::core::LogScale) when none is given.
pub const DEFAULT_LOG_BASE: f64 = 10.0;
/// Target number of tick intervals requested from [`nice_ticks`](crate::core::nice_ticks).
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Band scale tuning.
///
/// `padding` is the gap between adjacent bands expressed as a multiple of the
/// band width. Larger padding shrinks every band while keeping the band count
/// fixed. Values are expected in `[0, 1)`; they are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScaleOptions {
    #[serde(default = "default_band_padding")]
    pub padding: f64,
}

impl Default for BandScaleOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_BAND_PADDING,
        }
    }
}

/// Log scale tuning. `base` must be positive and not `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScaleOptions {
    #[serde(default = "default_log_base")]
    pub base: f64,
}

impl Default for LogScaleOptions {
    fn default() -> Self {
        Self {
            base: DEFAULT_LOG_BASE,
        }
    }
}

/// Tick generation tuning.
///
/// `count` is the number of intervals aimed for; the generated tick set holds
/// roughly `count + 1` values once rounded to a nice step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOptions {
    #[serde(default = "default_tick_count")]
    pub count: usize,
}

impl TickOptions {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for TickOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_COUNT)
    }
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

fn default_log_base() -> f64 {
    DEFAULT_LOG_BASE
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}
