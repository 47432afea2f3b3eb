use super::*;

fn data(rows: Vec<Vec<f64>>) -> Dataset {
    Dataset::from_rows(rows).unwrap()
}

#[test]
fn describes_each_column() {
    let d = data(vec![
        vec![1.0, 10.0],
        vec![2.0, 40.0],
        vec![3.0, 20.0],
        vec![4.0, 30.0],
    ]);
    let s = Summary::of(&d);
    assert_eq!(s.dim(), 2);

    let c0 = s.column(0);
    assert_eq!(c0.count, 4);
    assert_eq!(c0.mean, 2.5);
    assert!((c0.std - 1.290_994_448_735_805_6).abs() < 1e-12);
    assert_eq!(c0.min, 1.0);
    assert_eq!(c0.q25, 1.75);
    assert_eq!(c0.median, 2.5);
    assert_eq!(c0.q75, 3.25);
    assert_eq!(c0.max, 4.0);

    assert_eq!(s.mins(), vec![1.0, 10.0]);
    assert_eq!(s.maxs(), vec![4.0, 40.0]);
    assert_eq!(s.columns().len(), 2);
}

#[test]
fn single_row_has_nan_std() {
    let s = Summary::of(&data(vec![vec![0.5, -1.0]]));
    assert!(s.column(0).std.is_nan());
    assert_eq!(s.column(1).median, -1.0);
    assert_eq!(s.column(1).min, s.column(1).max);
}

#[test]
fn summary_follows_the_dataset_it_was_built_from() {
    let d = data(vec![vec![1.0], vec![3.0]]);
    let scaled = d.map_values(|v| v / 3.0);
    assert_ne!(Summary::of(&d), Summary::of(&scaled));
    assert_eq!(Summary::of(&scaled).column(0).max, 1.0);
}

#[test]
fn nan_entries_are_skipped() {
    let s = Summary::of(&data(vec![
        vec![1.0, f64::NAN],
        vec![f64::NAN, 2.0],
        vec![-f64::NAN, 4.0],
        vec![3.0, 6.0],
    ]));
    let c0 = s.column(0);
    assert_eq!(c0.count, 2);
    assert_eq!(c0.min, 1.0);
    assert_eq!(c0.max, 3.0);
    assert_eq!(c0.mean, 2.0);
    assert_eq!(c0.median, 2.0);

    let c1 = s.column(1);
    assert_eq!(c1.count, 3);
    assert_eq!((c1.min, c1.max), (2.0, 6.0));
}

#[test]
fn all_nan_column_has_no_statistics() {
    let s = Summary::of(&data(vec![vec![f64::NAN, 1.0], vec![f64::NAN, 2.0]]));
    assert_eq!(s.column(0).count, 0);
    assert!(s.column(0).min.is_nan() && s.column(0).max.is_nan());
    assert_eq!(s.column(1).count, 2);
}
