use super::*;

#[test]
fn four_char_labels_grow_by_seventeen_percent() {
    let size = fit_figure_size(FigureSize::new(60.0, 60.0), &[0.0, 1.25]);
    assert_eq!(size, FigureSize::new(70.0, 70.0));
}

#[test]
fn longest_label_drives_growth() {
    // "-12.50" has six characters: factor 1.51
    let size = fit_figure_size(FigureSize::new(60.0, 40.0), &[0.5, -12.5, 3.0]);
    assert_eq!(size, FigureSize::new(91.0, 60.0));
}

#[test]
fn short_labels_and_empty_input_keep_the_base() {
    let base = FigureSize::new(13.0, 9.0);
    assert_eq!(fit_figure_size(base, &[]), base);
    // Two-decimal formatting always yields at least four characters for finite
    // values, so only non-finite labels stay at three.
    assert_eq!(fit_figure_size(base, &[f64::NAN, f64::INFINITY]), base);
}

#[test]
fn never_shrinks_and_is_stable_for_the_same_inputs() {
    let base = FigureSize::new(60.0, 60.0);
    for labels in [&[0.0, 1.0][..], &[-100.25, 7.5][..], &[1e6][..]] {
        let once = fit_figure_size(base, labels);
        assert!(once.width >= base.width && once.height >= base.height);
        assert_eq!(once, fit_figure_size(base, labels));
    }
}
