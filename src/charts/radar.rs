use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use kurbo::{Point, Rect, Vec2};

use crate::{
    charts::{MINOR_SUBDIVISIONS, new_canvas, shared_range},
    data::{dataset::Dataset, summary::Summary},
    foundation::{
        core::{FigureSize, Rgba8},
        error::VizResult,
    },
    render::{
        axes::{draw_titles, sane_area},
        scene::{Stroke, TextStyle, objective_label},
    },
    scale::{
        sizer::fit_figure_size,
        ticks::{locate_ticks, minor_ticks},
    },
    style::{
        config::RadarOptions,
        resolve::{RADAR_LINE_WIDTH, ResolvedStyle},
    },
};

/// A subtitle makes the figure this much larger in both directions.
const SUBTITLE_GROWTH: f64 = 1.5;

/// Angle of spoke `i` of `dim`, counter-clockwise from the positive x axis.
pub(super) fn spoke_angle(i: usize, dim: usize) -> f64 {
    TAU * i as f64 / dim as f64
}

pub(super) fn render(
    data: &Dataset,
    opts: &RadarOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let summary = Summary::of(data);
    let (lo, hi) = shared_range(&summary, opts.min_value, opts.max_value);
    let line_width = opts.line_width.unwrap_or(RADAR_LINE_WIDTH);
    let mut size = fit_figure_size(style.figure_size, &[lo, hi]);
    if style.has_subtitle() {
        size = FigureSize::new(size.width * SUBTITLE_GROWTH, size.height * SUBTITLE_GROWTH);
    }
    let ticks = locate_ticks(lo, hi);
    let dim = data.dim();

    let mut canvas = new_canvas(style, size)?;
    let top = draw_titles(&mut canvas, style, 1.0, 1.0);

    let label_px = style.px(style.label_size);
    let outer = style.px(style.label_pad) + label_px * 1.5;
    let region = sane_area(
        Rect::new(outer, top + outer, canvas.width() - outer, canvas.height() - outer),
        canvas.width(),
        canvas.height(),
    );
    let center = region.center();
    let radius = region.width().min(region.height()) / 2.0;

    let span = hi - lo;
    let radial = |v: f64| {
        if span.abs() > f64::EPSILON {
            ((v - lo) / span).max(0.0) * radius
        } else {
            0.0
        }
    };
    let at = |angle: f64, r: f64| center + Vec2::new(angle.cos() * r, -angle.sin() * r);
    let in_range = |v: f64| v >= lo.min(hi) - 1e-9 && v <= lo.max(hi) + 1e-9;

    let grid = Stroke::solid(Rgba8::GRAY, style.px(style.major_grid_line_width));
    if opts.minor {
        let dashed = Stroke::dashed(Rgba8::GRAY, style.px(style.major_grid_line_width));
        for v in minor_ticks(&ticks.values, MINOR_SUBDIVISIONS, (lo, hi)) {
            canvas.stroke_circle(center, radial(v), &dashed);
        }
    }
    for v in ticks.iter().filter(|&v| in_range(v)) {
        canvas.stroke_circle(center, radial(v), &grid);
    }
    for i in 0..dim {
        canvas.line(center, at(spoke_angle(i, dim), radius), &grid);
    }
    canvas.stroke_circle(
        center,
        radius,
        &Stroke::solid(Rgba8::BLACK, style.px(style.minor_grid_line_width)),
    );

    let outline = Stroke::solid(Rgba8::DARK_RED, style.px(line_width));
    for row in data.rows() {
        let points: Vec<Point> = row
            .iter()
            .enumerate()
            .map(|(i, &v)| at(spoke_angle(i, dim), radial(v)))
            .collect();
        canvas.polygon(&points, &outline);
    }

    let spoke_text = TextStyle::new(label_px);
    for i in 0..dim {
        let p = at(spoke_angle(i, dim), radius + style.px(style.label_pad) + label_px * 0.5);
        canvas.text(p, &objective_label(i + 1), &spoke_text);
    }

    // Radial labels run along the first spoke, rotated onto it.
    let tick_text = TextStyle::new(style.px(style.ticks_size)).rotate(90.0);
    let offset = Vec2::new(0.0, -style.px(style.ticks_pad) * 0.5);
    for (v, label) in ticks.iter().zip(ticks.labels()) {
        if !in_range(v) {
            continue;
        }
        canvas.text(at(0.0, radial(v)) + offset, &label, &tick_text);
    }

    Ok(vec![canvas.write_png(output)?])
}
