use indexmap::IndexMap;
use tracing::trace;

use crate::core::options::BandScaleOptions;

/// Map from an ordered set of categorical keys to evenly spaced bands.
///
/// For `n` keys over `range = (r0, r1)`:
/// - `step = (r1 - r0) / (n + padding * (n - 1))`
/// - `bandwidth = step / (1 + padding)`
/// - `scale(key) = r0 + index(key) * step`
///
/// Every input key occupies a slot, duplicates included; lookups resolve to the
/// first occurrence. Unknown keys fall back to `r0`. With zero keys both `step`
/// and `bandwidth` are `0`.
///
/// The lookup table is built once here and only read afterwards, so a shared
/// `&BandScale` can be queried from several render passes at once.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    index: IndexMap<String, usize>,
    len: usize,
    range: (f64, f64),
    padding: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Creates a band scale with the default padding of `0.1`.
    pub fn new<I, K>(keys: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_options(keys, range, BandScaleOptions::default())
    }

    pub fn with_options<I, K>(keys: I, range: (f64, f64), options: BandScaleOptions) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut index = IndexMap::new();
        let mut len = 0_usize;
        for key in keys {
            index.entry(key.into()).or_insert(len);
            len += 1;
        }

        let (step, bandwidth) = band_geometry(len, range, options.padding);
        Self {
            index,
            len,
            range,
            padding: options.padding,
            step,
            bandwidth,
        }
    }

    /// Recomputes band geometry for a different padding, keeping the key table.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        let (step, bandwidth) = band_geometry(self.len, self.range, padding);
        self.padding = padding;
        self.step = step;
        self.bandwidth = bandwidth;
        self
    }

    /// Start coordinate of the band for `key`, or the range start when unknown.
    #[must_use]
    pub fn scale(&self, key: &str) -> f64 {
        match self.index.get(key) {
            Some(&position) => self.range.0 + position as f64 * self.step,
            None => self.range.0,
        }
    }

    /// Centre coordinate of the band for `key`.
    #[must_use]
    pub fn center(&self, key: &str) -> f64 {
        self.scale(key) + self.bandwidth / 2.0
    }

    /// Zero-based slot of `key`, if present.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Number of input keys, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

/// Builds a band scale from `keys` over `range` with the given `padding`.
pub fn band_scale<I, K>(keys: I, range: (f64, f64), padding: f64) -> BandScale
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    BandScale::with_options(keys, range, BandScaleOptions { padding })
}

fn band_geometry(len: usize, range: (f64, f64), padding: f64) -> (f64, f64) {
    if len == 0 {
        trace!("band scale built without keys");
        return (0.0, 0.0);
    }
    let (r0, r1) = range;
    let n = len as f64;
    let step = (r1 - r0) / (n + padding * (n - 1.0));
    (step, step / (1.0 + padding))
}

#[cfg(test)]
mod tests {
    use super::{BandScale, band_scale};

    #[test]
    fn bands_are_ordered_by_key_position() {
        let scale = BandScale::new(["A", "B", "C"], (0.0, 300.0));
        assert!(scale.scale("A") < scale.scale("B"));
        assert!(scale.scale("B") < scale.scale("C"));
        assert!(scale.bandwidth() > 0.0);
        assert_eq!(scale.scale("A"), 0.0);
    }

    #[test]
    fn step_and_bandwidth_follow_padding_formula() {
        let scale = band_scale(["A", "B", "C"], (0.0, 400.0), 0.5);
        assert!((scale.step() - 100.0).abs() < 1e-9);
        assert!((scale.bandwidth() - 100.0 / 1.5).abs() < 1e-9);
        assert!((scale.scale("C") - 200.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_key_falls_back_to_range_start() {
        let scale = BandScale::new(["A", "B"], (40.0, 240.0));
        assert_eq!(scale.scale("missing"), 40.0);
        assert_eq!(scale.index_of("missing"), None);
    }

    #[test]
    fn empty_keys_produce_zero_geometry() {
        let scale = BandScale::new(Vec::<String>::new(), (0.0, 100.0));
        assert!(scale.is_empty());
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.step(), 0.0);
        assert_eq!(scale.scale("A"), 0.0);
    }

    #[test]
    fn duplicate_keys_take_a_slot_and_resolve_to_first() {
        let scale = band_scale(["A", "B", "A", "C"], (0.0, 400.0), 0.0);
        assert_eq!(scale.len(), 4);
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.scale("A"), 0.0);
        assert_eq!(scale.scale("C"), 300.0);
        assert_eq!(scale.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn inverted_range_walks_backwards() {
        let scale = band_scale(["A", "B"], (100.0, 0.0), 0.0);
        assert_eq!(scale.scale("A"), 100.0);
        assert_eq!(scale.scale("B"), 50.0);
        assert!(scale.bandwidth() < 0.0);
    }

    #[test]
    fn with_padding_rebuilds_geometry_only() {
        let tight = band_scale(["A", "B"], (0.0, 100.0), 0.0);
        let padded = tight.clone().with_padding(0.5);
        assert!(padded.bandwidth() < tight.bandwidth());
        assert_eq!(padded.keys().count(), 2);
        assert_eq!(padded.padding(), 0.5);
    }
}
