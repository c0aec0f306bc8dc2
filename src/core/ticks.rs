use tracing::trace;

/// Scale applied before rounding so every tick keeps 12 fractional digits.
const TICK_ROUNDING_SCALE: f64 = 1e12;
/// Above this magnitude a scaled tick has no fractional part left to round.
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0;
/// Upper bound on emitted ticks; larger requests get a coarser step instead.
const MAX_TICKS: usize = 10_000;

/// Returns human-friendly tick values covering `[min, max]`.
///
/// The step is `{1, 2, 5, 10} * 10^k`, picked by greedy thresholds on
/// `span / count` normalised to its decade (`>= 7.5 -> 10`, `>= 3.5 -> 5`,
/// `>= 1.5 -> 2`, else `1`). Ticks run from `floor(min / step) * step` to
/// `ceil(max / step) * step` inclusive, each rounded to 12 decimals.
///
/// When `max <= min` the result is `count` copies of `min`. A zero `count`
/// or non-finite bounds yield no ticks. Requests that would exceed 10 000
/// ticks move to the next nice step until they fit, so both bounds stay
/// covered.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let span = max - min;
    if span <= 0.0 {
        trace!(min, max, count, "degenerate tick span");
        return vec![min; count];
    }
    if count == 0 {
        return Vec::new();
    }

    let mut step = nice_step(span / count as f64);
    let Some((mut first_index, mut intervals)) = interval_span(min, max, step) else {
        trace!(min, max, count, step, "tick step is not finite");
        return Vec::new();
    };
    while intervals > (MAX_TICKS - 1) as f64 {
        step = nice_step(step * 2.0);
        let Some(widened) = interval_span(min, max, step) else {
            trace!(min, max, count, step, "tick step is not finite");
            return Vec::new();
        };
        (first_index, intervals) = widened;
        trace!(min, max, count, step, "widened tick step to bound tick count");
    }
    let nice_min = first_index * step;

    (0..=intervals as usize)
        .map(|i| round_tick(nice_min + i as f64 * step))
        .collect()
}

/// First tick index and interval count for `step`.
///
/// Both nice bounds are whole multiples of the step, so the count is exact in
/// index space even when `nice_max - nice_min` drifts.
fn interval_span(min: f64, max: f64, step: f64) -> Option<(f64, f64)> {
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let first_index = (min / step).floor();
    let intervals = (max / step).ceil() - first_index;
    (first_index.is_finite() && intervals.is_finite() && intervals >= 0.0)
        .then_some((first_index, intervals))
}

/// Rounds `raw_step` to the nearest nice step using the greedy thresholds.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let multiplier = if normalized >= 7.5 {
        10.0
    } else if normalized >= 3.5 {
        5.0
    } else if normalized >= 1.5 {
        2.0
    } else {
        1.0
    };
    multiplier * magnitude
}

fn round_tick(value: f64) -> f64 {
    let scaled = value * TICK_ROUNDING_SCALE;
    if !(scaled.abs() < MAX_EXACT_SCALED) {
        return value;
    }
    scaled.round() / TICK_ROUNDING_SCALE
}
