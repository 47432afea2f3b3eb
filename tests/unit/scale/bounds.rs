use super::*;
use crate::data::dataset::Dataset;

fn summary(rows: Vec<Vec<f64>>) -> Summary {
    Summary::of(&Dataset::from_rows(rows).unwrap())
}

#[test]
fn bounds_round_outwards_to_quarters() {
    let s = summary(vec![vec![1.3, 0.02], vec![2.6, 0.47]]);
    let b = axis_bounds(&s);
    assert_eq!(b.mins, vec![1.25, 0.0]);
    assert_eq!(b.maxs, vec![2.75, 0.5]);
    assert_eq!(b.axis(1), (0.0, 0.5));
    assert_eq!(b.label_values(), vec![1.25, 0.0, 2.75, 0.5]);
}

#[test]
fn quantizing_happens_before_rounding() {
    // 0.2499 quantizes to 0.25 which maps to 0.25 (not 0.5 via 0.26).
    let s = summary(vec![vec![0.0], vec![0.2499]]);
    assert_eq!(axis_bounds(&s).maxs, vec![0.25]);
}

#[test]
fn global_bounds_take_extremes() {
    let b = AxisBounds {
        mins: vec![0.25, -1.0, 0.0],
        maxs: vec![1.0, 0.5, 3.25],
    };
    assert_eq!(global_bounds(&b), (-1.0, 3.25));
}
