use serde::{Deserialize, Serialize};

use crate::core::options::LogScaleOptions;

/// Logarithmic map from a strictly positive domain to a continuous range.
///
/// `map(x) = r0 + (log_b(x) - log_b(d0)) * m` with
/// `m = (r1 - r0) / (log_b(d1) - log_b(d0))`.
///
/// Domain bounds and evaluated values must be strictly positive. Violations
/// are not trapped: they surface as NaN or infinities following the usual
/// logarithm semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
    log_base: f64,
    log_d0: f64,
    slope: f64,
}

impl LogScale {
    /// Creates a base-10 log scale.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::with_options(domain, range, LogScaleOptions::default())
    }

    #[must_use]
    pub fn with_options(domain: (f64, f64), range: (f64, f64), options: LogScaleOptions) -> Self {
        let (d0, d1) = domain;
        let (r0, r1) = range;
        let log_base = options.base.ln();
        let log_d0 = d0.ln() / log_base;
        let log_d1 = d1.ln() / log_base;
        Self {
            domain,
            range,
            base: options.base,
            log_base,
            log_d0,
            slope: (r1 - r0) / (log_d1 - log_d0),
        }
    }

    /// Rebuilds the scale with a different logarithm base.
    #[must_use]
    pub fn with_base(self, base: f64) -> Self {
        Self::with_options(self.domain, self.range, LogScaleOptions { base })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn base(self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn map(self, x: f64) -> f64 {
        self.range.0 + (x.ln() / self.log_base - self.log_d0) * self.slope
    }
}

/// Builds a logarithmic mapping closure for `domain -> range` in `base`.
pub fn log_scale(
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
) -> impl Fn(f64) -> f64 + Copy {
    let scale = LogScale::with_options(domain, range, LogScaleOptions { base });
    move |x| scale.map(x)
}
