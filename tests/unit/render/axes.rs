use std::path::Path;

use kurbo::{Point, Rect};

use super::*;
use crate::{
    scale::ticks::locate_ticks,
    style::{config::{ChartKind, CommonStyle}, resolve::resolve_style},
};

fn style() -> ResolvedStyle {
    resolve_style(&CommonStyle::default(), ChartKind::Plot2d, Path::new("t.png"))
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn linear_mapping_flips_y() {
    let area = Rect::new(10.0, 20.0, 110.0, 220.0);
    let c = Cartesian::new(area, (0.0, 10.0), (0.0, 4.0), false);
    assert!(close(c.map(0.0, 0.0), Point::new(10.0, 220.0)));
    assert!(close(c.map(10.0, 4.0), Point::new(110.0, 20.0)));
    assert!(close(c.map(5.0, 2.0), Point::new(60.0, 120.0)));
}

#[test]
fn log_mapping_spaces_decades_evenly() {
    let area = Rect::new(0.0, 0.0, 100.0, 100.0);
    let c = Cartesian::new(area, (0.0, 1.0), (1.0, 100.0), true);
    assert!(close(c.map(0.0, 1.0), Point::new(0.0, 100.0)));
    assert!(close(c.map(0.0, 10.0), Point::new(0.0, 50.0)));
    assert!(close(c.map(1.0, 100.0), Point::new(100.0, 0.0)));
}

#[test]
fn flat_ranges_map_to_the_middle() {
    let area = Rect::new(0.0, 0.0, 100.0, 50.0);
    let c = Cartesian::new(area, (3.0, 3.0), (2.0, 2.0), false);
    assert!(close(c.map(3.0, 2.0), Point::new(50.0, 25.0)));
}

#[test]
fn empty_tick_sets_draw_nothing() {
    let s = style();
    let mut canvas = FigureCanvas::new(200, 200, Rgba8::WHITE);
    let before = canvas.to_svg();
    let c = Cartesian::new(Rect::new(20.0, 20.0, 180.0, 180.0), (0.0, 1.0), (0.0, 1.0), false);
    c.x_tick_labels(&mut canvas, &TickSet::empty(), &s);
    c.y_tick_labels(&mut canvas, &TickSet::empty(), &s);
    c.vertical_grid(&mut canvas, &[], &Stroke::dashed(Rgba8::BLACK, 1.0));
    assert_eq!(canvas.to_svg(), before);
}

#[test]
fn tick_labels_and_grid_lines_per_tick() {
    let s = style();
    let mut canvas = FigureCanvas::new(400, 400, Rgba8::WHITE);
    let ticks = locate_ticks(0.0, 0.47);
    let c = Cartesian::new(Rect::new(50.0, 50.0, 350.0, 350.0), (0.0, 0.5), (0.0, 0.5), false);
    c.x_tick_labels(&mut canvas, &ticks, &s);
    c.horizontal_grid(&mut canvas, &ticks.values, &Stroke::dashed(Rgba8::BLACK, 1.0));
    let svg = canvas.to_svg();
    assert_eq!(svg.matches("<text").count(), ticks.len());
    assert!(svg.contains(">0.3</text>"));
    assert_eq!(svg.matches("stroke-dasharray").count(), ticks.len());
}

#[test]
fn titles_stack_downwards() {
    let mut s = style();
    let mut canvas = FigureCanvas::new(600, 600, Rgba8::WHITE);
    let plain = draw_titles(&mut canvas, &s, 1.0, 1.0);
    s.subtitle = "run 3".into();
    let mut canvas = FigureCanvas::new(600, 600, Rgba8::WHITE);
    let with_sub = draw_titles(&mut canvas, &s, 1.0, 1.0);
    assert!(with_sub > plain);
    assert!(canvas.to_svg().contains(">run 3</text>"));
}

#[test]
fn plot_area_never_collapses() {
    let mut s = style();
    s.label_pad = 10_000.0;
    let canvas = FigureCanvas::new(300, 300, Rgba8::WHITE);
    let area = cartesian_area(&canvas, &s, 30.0, &["1.0".into()]);
    assert!(area.width() >= 60.0 - 1e-9);
    assert!(area.height() >= 60.0 - 1e-9);
}

#[test]
fn colorbar_labels_ticks_inside_the_range() {
    let mut canvas = FigureCanvas::new(100, 200, Rgba8::WHITE);
    let ticks = vec![(0.0, "0.0".to_owned()), (0.5, "0.5".to_owned()), (2.0, "2.0".to_owned())];
    colorbar(
        &mut canvas,
        Rect::new(10.0, 10.0, 30.0, 190.0),
        Colormap::Blues,
        (0.0, 1.0),
        &ticks,
        &TextStyle::new(8.0),
    );
    let svg = canvas.to_svg();
    assert!(svg.contains(">0.5</text>"));
    assert!(!svg.contains(">2.0</text>"));
}
