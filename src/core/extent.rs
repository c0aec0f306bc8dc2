/// Returns the `(min, max)` pair bounding `values`.
///
/// An empty slice yields `(0.0, 0.0)`. NaN is not filtered: comparisons follow
/// IEEE rules, so a leading NaN sticks in both outputs while a NaN anywhere
/// else is skipped over.
#[must_use]
pub fn extent(values: &[f64]) -> (f64, f64) {
    let Some((&first, rest)) = values.split_first() else {
        return (0.0, 0.0);
    };

    let mut min = first;
    let mut max = first;
    for &value in rest {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    (min, max)
}
