use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn round_down_table_breakpoints() {
    assert!(close(round_down(1.3), 1.25));
    assert!(close(round_down(1.05), 1.0));
    assert!(close(round_down(1.25), 1.0));
    assert!(close(round_down(1.5), 1.25));
    assert!(close(round_down(1.6), 1.5));
    assert!(close(round_down(1.9), 1.75));
    assert!(close(round_down(2.0), 2.0));
    assert!(close(round_down(0.0), 0.0));
}

#[test]
fn round_down_uses_floor_for_negatives() {
    // floor(-1.3) = -2 with fractional part 0.7
    assert!(close(round_down(-1.3), -1.5));
}

#[test]
fn round_up_table_breakpoints() {
    assert!(close(round_up(1.3), 1.5));
    assert!(close(round_up(1.1), 1.25));
    assert!(close(round_up(1.2), 1.25));
    assert!(close(round_up(1.4), 1.5));
    assert!(close(round_up(1.6), 1.75));
    assert!(close(round_up(1.8), 2.0));
    assert!(close(round_up(1.0), 1.0));
    // Near-integer fractions map back to the integer part.
    assert!(close(round_up(1.04), 1.0));
}

#[test]
fn rounding_brackets_values_outside_the_table_slivers() {
    for whole in 0..5 {
        for frac in [0.1, 0.2, 0.3, 0.4, 0.6, 0.7, 0.8, 0.9] {
            let x = f64::from(whole) + frac;
            assert!(round_down(x) <= x, "round_down({x})");
            assert!(x < round_up(x), "round_up({x})");
        }
    }
}

#[test]
fn round_to_base_edge_cases() {
    assert!(close(round_to_base(0.123, 0.05), 0.1));
    assert!(close(round_to_base(0.13, 0.05), 0.15));
    assert!(close(round_to_base(1.7, 0.5), 1.5));
    assert!(close(round_to_base(0.25, 0.5), 0.0));
    assert!(close(round_to_base(0.75, 0.5), 1.0));
    assert_eq!(round_to_base(3.0, 0.0), 0.0);
    assert_eq!(round_to_base(f64::MAX, 1e-10), f64::INFINITY);
    assert!(round_to_base(f64::NAN, 0.5).is_nan());
}

#[test]
fn quantize_hundredths_is_decimal_half_even() {
    assert_eq!(quantize_hundredths(0.125), 0.12);
    assert_eq!(quantize_hundredths(0.135), 0.14);
    assert_eq!(quantize_hundredths(0.1251), 0.13);
    assert_eq!(quantize_hundredths(1.0), 1.0);
    assert_eq!(quantize_hundredths(2.999), 3.0);
    assert_eq!(quantize_hundredths(-0.456), -0.46);
    assert_eq!(quantize_hundredths(1e20), 1e20);
    assert!(quantize_hundredths(f64::NAN).is_nan());
}
