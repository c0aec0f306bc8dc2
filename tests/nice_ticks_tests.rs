use ezcharts::core::{DEFAULT_TICK_COUNT, nice_step, nice_ticks};
use proptest::prelude::*;

#[test]
fn default_count_over_hundred_uses_step_twenty() {
    let ticks = nice_ticks(0.0, 100.0, DEFAULT_TICK_COUNT);
    assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert!(ticks.contains(&0.0) && ticks.contains(&100.0));
}

#[test]
fn fractional_steps_are_rounded_to_clean_decimals() {
    let ticks = nice_ticks(0.0, 1.0, 5);
    assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);

    let ticks = nice_ticks(0.1, 0.7, 6);
    assert_eq!(ticks, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);
}

#[test]
fn equal_bounds_repeat_min_count_times() {
    assert_eq!(nice_ticks(5.0, 5.0, 5), vec![5.0; 5]);
    assert_eq!(nice_ticks(7.0, 3.0, 3), vec![7.0; 3]);
}

#[test]
fn bounds_are_widened_outward_to_the_step() {
    let ticks = nice_ticks(3.0, 97.0, 5);
    assert_eq!(ticks.first(), Some(&0.0));
    assert_eq!(ticks.last(), Some(&100.0));
}

#[test]
fn negative_ranges_keep_ascending_order() {
    assert_eq!(
        nice_ticks(-10.0, 10.0, 4),
        vec![-10.0, -5.0, 0.0, 5.0, 10.0]
    );
}

#[test]
fn zero_count_over_a_real_span_yields_nothing() {
    assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    assert!(nice_ticks(3.0, 10.0, 0).is_empty());
}

#[test]
fn huge_counts_still_reach_both_bounds() {
    for (min, max) in [(0.0, 1.0), (-3.0, 7.0), (12.5, 13.0)] {
        let ticks = nice_ticks(min, max, 1_000_000);
        assert!(!ticks.is_empty() && ticks.len() <= 10_000);
        assert!(ticks.iter().all(|tick| tick.is_finite()));
        assert!(ticks[0] <= min);
        assert!(ticks[ticks.len() - 1] >= max);
    }
}

#[test]
fn step_thresholds_are_greedy() {
    assert_eq!(nice_step(1.4), 1.0);
    assert_eq!(nice_step(1.5), 2.0);
    assert_eq!(nice_step(3.5), 5.0);
    assert_eq!(nice_step(7.4), 5.0);
    assert_eq!(nice_step(7.5), 10.0);
    assert_eq!(nice_step(250.0), 200.0);
}

proptest! {
    #[test]
    fn ticks_cover_the_requested_interval(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        count in 1usize..20
    ) {
        let max = min + span;
        let ticks = nice_ticks(min, max, count);
        prop_assert!(ticks.len() >= 2);

        let first = ticks[0];
        let last = ticks[ticks.len() - 1];
        let slack = 1e-9 * (min.abs() + max.abs()).max(1.0);
        prop_assert!(first <= min + slack);
        prop_assert!(last >= max - slack);
    }

    #[test]
    fn ticks_are_strictly_ascending_with_constant_step(
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        count in 1usize..12
    ) {
        let ticks = nice_ticks(min, min + span, count);
        let step = nice_step(span / count as f64);
        for pair in ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= step * 1e-6);
        }
    }

    #[test]
    fn large_counts_never_cut_coverage_short(
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        count in 5_000usize..50_000
    ) {
        let max = min + span;
        let ticks = nice_ticks(min, max, count);
        prop_assert!(ticks.len() <= 10_000);
        let slack = 1e-9 * (min.abs() + max.abs()).max(1.0);
        prop_assert!(ticks[0] <= min + slack);
        prop_assert!(ticks[ticks.len() - 1] >= max - slack);
    }

    #[test]
    fn tick_count_stays_near_target(
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        count in 1usize..12
    ) {
        let ticks = nice_ticks(min, min + span, count);
        // the chosen step is never below raw_step / 1.75; each bound adds at most one interval
        prop_assert!(ticks.len() <= count * 5 / 2 + 3);
    }
}
