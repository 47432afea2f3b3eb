use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_ticks(actual: &TickSet, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(close(a, *e), "{actual:?} vs {expected:?}");
    }
}

#[test]
fn small_ranges_use_hundredth_steps() {
    for r in [1e-6, 0.001, 0.01, 0.025, 0.049, 0.05] {
        assert_eq!(tick_step(r), 0.01, "range {r}");
    }
    assert_eq!(tick_step(0.2), 0.05);
    assert_eq!(tick_step(0.5), 0.1);
    assert_eq!(tick_step(1.0), 0.05);
    assert_eq!(tick_step(7.0), 0.5);
    assert_eq!(tick_step(100.0), 10.0);
}

#[test]
fn range_under_half_uses_tenth_steps() {
    let ticks = locate_ticks(0.0, 0.47);
    assert_eq!(ticks.step, 0.1);
    assert_ticks(&ticks, &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
}

#[test]
fn too_few_ticks_forces_five() {
    let ticks = locate_ticks(0.0, 0.02);
    assert!(close(ticks.step, 0.005));
    assert_eq!(ticks.len(), MIN_TICKS);
    assert_eq!(ticks.values[0], 0.0);
    assert!(close(ticks.values[4], 0.02));
}

#[test]
fn long_tick_runs_are_halved_until_capped() {
    assert_ticks(&locate_ticks(0.0, 100.0), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_ticks(&locate_ticks(0.0, 1.0), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(locate_ticks(0.0, 2.4).len(), 7);
}

#[test]
fn ticks_are_sorted_and_capped_for_valid_ranges() {
    for min in [-3.0, -0.5, 0.0, 0.25, 1.75] {
        for range in [
            0.001, 0.03, 0.05, 0.2, 0.49, 0.5, 0.75, 1.3, 2.6, 7.9, 42.0, 1234.5,
        ] {
            let ticks = locate_ticks(min, min + range);
            assert!(!ticks.is_empty(), "{min} {range}");
            assert!(ticks.len() <= MAX_TICKS, "{min} {range}: {ticks:?}");
            assert!(
                ticks.values.windows(2).all(|w| w[0] <= w[1]),
                "{min} {range}: {ticks:?}"
            );
        }
    }
}

#[test]
fn zero_width_range_keeps_the_minimum_tick_count() {
    for v in [1.0, 7.0, -17.0, 0.0, 0.42] {
        let ticks = locate_ticks(v, v);
        assert_eq!(ticks.values, vec![0.0; MIN_TICKS], "{v}");
        assert_eq!(ticks.step, 0.0);
    }
}

#[test]
fn non_finite_ranges_yield_no_ticks() {
    assert!(locate_ticks(0.0, f64::NAN).is_empty());
    assert!(locate_ticks(0.0, f64::INFINITY).is_empty());
    assert!(locate_ticks(f64::NEG_INFINITY, 0.0).is_empty());
}

#[test]
fn labels_use_shortest_repr() {
    let ticks = locate_ticks(0.0, 100.0);
    assert_eq!(ticks.labels()[0], "0.0");
    assert_eq!(ticks.labels()[1], "20.0");
    assert_eq!(locate_ticks(0.0, 0.47).labels()[1], "0.1");
}

#[test]
fn minor_ticks_fill_and_extrapolate() {
    let minors = minor_ticks(&[0.0, 1.0, 2.0], 4, (-0.5, 2.3));
    let expected = [-0.5, -0.25, 0.25, 0.5, 0.75, 1.25, 1.5, 1.75, 2.25];
    assert_eq!(minors.len(), expected.len(), "{minors:?}");
    for (a, e) in minors.iter().zip(expected) {
        assert!(close(*a, e), "{minors:?}");
    }
}

#[test]
fn minor_ticks_need_two_majors() {
    assert!(minor_ticks(&[1.0], 4, (0.0, 2.0)).is_empty());
    assert!(minor_ticks(&[0.0, 1.0], 1, (0.0, 2.0)).is_empty());
    assert!(minor_ticks(&[1.0, 0.0], 4, (0.0, 2.0)).is_empty());
    assert!(minor_ticks(&[0.0, 1.0], 4, (f64::NEG_INFINITY, 2.0)).is_empty());
}
