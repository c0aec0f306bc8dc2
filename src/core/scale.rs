use serde::{Deserialize, Serialize};

/// Affine map from a continuous domain to a continuous range.
///
/// `map(x) = r0 + (x - d0) * m` with `m = (r1 - r0) / (d1 - d0)`. Either pair
/// may be reversed; the signed slope handles inverted axes without special
/// cases. A degenerate domain (`d0 == d1`) yields an infinite or NaN slope and
/// is passed through untouched, so callers must avoid it for meaningful output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    slope: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let (r0, r1) = range;
        Self {
            domain,
            range,
            slope: (r1 - r0) / (d1 - d0),
        }
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
    pub fn slope(self) -> f64 {
        self.slope
    }

    /// Maps a domain value into range space. Values outside the domain are not clamped.
    #[must_use]
    pub fn map(self, x: f64) -> f64 {
        self.range.0 + (x - self.domain.0) * self.slope
    }

    /// Maps a range value back into domain space.
    #[must_use]
    pub fn invert(self, y: f64) -> f64 {
        self.domain.0 + (y - self.range.0) / self.slope
    }
}

/// Builds a linear mapping closure for `domain -> range`.
pub fn linear_scale(domain: (f64, f64), range: (f64, f64)) -> impl Fn(f64) -> f64 + Copy {
    let scale = LinearScale::new(domain, range);
    move |x| scale.map(x)
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, linear_scale};

    #[test]
    fn maps_domain_midpoint_into_range() {
        let scale = linear_scale((0.0, 100.0), (0.0, 500.0));
        assert_eq!(scale(0.0), 0.0);
        assert_eq!(scale(50.0), 250.0);
        assert_eq!(scale(100.0), 500.0);
    }

    #[test]
    fn negative_domain_is_supported() {
        let scale = linear_scale((-100.0, 100.0), (0.0, 200.0));
        assert_eq!(scale(-100.0), 0.0);
        assert_eq!(scale(0.0), 100.0);
        assert_eq!(scale(100.0), 200.0);
    }

    #[test]
    fn reversed_range_inverts_output() {
        let scale = linear_scale((0.0, 100.0), (500.0, 0.0));
        assert_eq!(scale(0.0), 500.0);
        assert_eq!(scale(50.0), 250.0);
        assert_eq!(scale(100.0), 0.0);
    }

    #[test]
    fn degenerate_domain_propagates_non_finite_values() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert!(scale.slope().is_infinite());
        assert!(scale.map(5.0).is_nan());
        assert!(!scale.map(6.0).is_finite());
    }

    #[test]
    fn invert_recovers_domain_value() {
        let scale = LinearScale::new((10.0, 110.0), (400.0, 0.0));
        let recovered = scale.invert(scale.map(42.5));
        assert!((recovered - 42.5).abs() <= 1e-9);
    }
}
