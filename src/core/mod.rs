//! Numeric scale and tick engine.
//!
//! Everything here is pure and infallible: degenerate inputs map to documented
//! sentinels and undefined arithmetic propagates as NaN/infinity instead of
//! raising errors, so rendering code can call in without interrupting a pass.

pub mod band_scale;
pub mod extent;
pub mod log_scale;
pub mod options;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::{BandScale, band_scale};
pub use extent::extent;
pub use log_scale::{LogScale, log_scale};
pub use options::{
    BandScaleOptions, DEFAULT_BAND_PADDING, DEFAULT_LOG_BASE, DEFAULT_TICK_COUNT,
    LogScaleOptions, TickOptions,
};
pub use scale::{LinearScale, linear_scale};
pub use ticks::{nice_step, nice_ticks};
pub use types::{DataPoint, Margin, Viewport};
