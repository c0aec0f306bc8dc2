//! ezcharts: scale, tick and chart-layout engine for 2D charts.
//!
//! The crate is split into three layers:
//! - [`core`]: pure numeric mapping from data space to pixel space
//!   (linear, logarithmic and band scales, extents, nice ticks).
//! - [`render`]: backend-agnostic primitives collected into a layered
//!   [`RenderFrame`](render::RenderFrame), plus SVG and no-op renderers.
//! - [`api`]: chart builders (bar, line, scatter, area, pie) and their
//!   axes, grids and legends.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult};
