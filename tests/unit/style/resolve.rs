use std::path::Path;

use super::*;

fn out() -> &'static Path {
    Path::new("out/front.png")
}

#[test]
fn global_fallbacks() {
    let s = resolve_style(&CommonStyle::default(), ChartKind::Plot2d, out());
    assert_eq!(s.title, "front");
    assert_eq!(s.subtitle, "");
    assert!(!s.has_subtitle());
    assert_eq!(s.title_size, 157.5);
    assert_eq!(s.subtitle_size, 137.5);
    assert_eq!(s.label_size, 157.5);
    assert_eq!(s.ticks_size, 137.5);
    assert_eq!(s.label_pad, 68.75);
    assert_eq!(s.major_grid_line_width, 137.5 / 15.0);
    assert_eq!(s.minor_grid_line_width, 137.5 / 30.0);
    assert_eq!(s.ticks_pad, 68.75);
    assert_eq!(s.scatter_size, 1375.0);
    assert_eq!(s.figure_size, FigureSize::new(60.0, 60.0));
    assert_eq!(s.dpi, 10.0);
}

#[test]
fn kind_defaults_apply_below_explicit_values() {
    let s = resolve_style(&CommonStyle::default(), ChartKind::Plot3d, out());
    assert_eq!(s.ticks_size, FONT_SIZE * 0.75);
    assert_eq!(s.label_pad, FONT_SIZE * 2.0);

    let explicit = CommonStyle {
        ticks_size: Some(11.0),
        ..CommonStyle::default()
    };
    let s = resolve_style(&explicit, ChartKind::Plot3d, out());
    assert_eq!(s.ticks_size, 11.0);
    assert_eq!(s.label_pad, FONT_SIZE * 2.0);

    let s = resolve_style(&CommonStyle::default(), ChartKind::Radar, out());
    assert_eq!(s.subtitle_size, FONT_SIZE + 10.0);
    assert_eq!(s.label_pad, FONT_SIZE);
    assert_eq!(s.ticks_size, FONT_SIZE * 0.75);

    let s = resolve_style(&CommonStyle::default(), ChartKind::Parallel, out());
    assert_eq!(s.subtitle_size, FONT_SIZE + 10.0);
    assert_eq!(s.label_pad, FONT_SIZE * 0.00003);
    assert_eq!(s.ticks_size, FONT_SIZE);
}

#[test]
fn kinds_without_defaults_match_the_global_layer() {
    for kind in [ChartKind::Plot2d, ChartKind::Heatmap, ChartKind::Convergence] {
        assert_eq!(kind_defaults(kind), CommonStyle::default());
    }
    assert_eq!(
        kind_defaults(ChartKind::Bubble),
        kind_defaults(ChartKind::Plot3d)
    );
}

#[test]
fn resolution_is_idempotent() {
    let explicit = CommonStyle {
        title: Some("Pareto".into()),
        label_size: Some(3.0),
        figure_size: Some(FigureSize::new(20.0, 10.0)),
        ..CommonStyle::default()
    };
    for kind in ChartKind::ALL {
        let once = resolve_style(&explicit, kind, out());
        let twice = resolve_style(&once.to_common(), kind, Path::new("other.png"));
        assert_eq!(once, twice, "{kind}");
    }
}

#[test]
fn pixel_helpers_scale_with_dpi() {
    let mut s = resolve_style(&CommonStyle::default(), ChartKind::Plot2d, out());
    s.dpi = 72.0;
    assert_eq!(s.px(10.0), 10.0);
    assert_eq!(s.marker_radius(100.0), 5.0);
    s.dpi = 36.0;
    assert_eq!(s.px(10.0), 5.0);
    assert_eq!(s.marker_radius(-4.0), 0.0);
}
