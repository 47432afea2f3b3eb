use std::path::{Path, PathBuf};

use kurbo::Point;

use crate::{
    charts::{MINOR_SUBDIVISIONS, new_canvas, shared_range},
    data::{dataset::Dataset, summary::Summary},
    foundation::{core::Rgba8, error::VizResult},
    render::{
        axes::{Cartesian, cartesian_area, draw_titles},
        scene::{Anchor, Baseline, Stroke, TextStyle, text_width},
    },
    scale::{
        sizer::fit_figure_size,
        ticks::{locate_ticks, minor_ticks},
    },
    style::{
        config::ParallelOptions,
        resolve::{PARALLEL_LINE_WIDTH, ResolvedStyle},
    },
};

pub(super) fn render(
    data: &Dataset,
    opts: &ParallelOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let summary = Summary::of(data);
    let (lo, hi) = shared_range(&summary, opts.min_value, opts.max_value);
    let line_width = opts.line_width.unwrap_or(PARALLEL_LINE_WIDTH);
    let size = fit_figure_size(style.figure_size, &[lo, hi]);
    let ticks = locate_ticks(lo, hi);
    let dim = data.dim();

    let mut canvas = new_canvas(style, size)?;
    let top = draw_titles(&mut canvas, style, 1.0, 1.0);

    // Tick labels use the axis label size on this chart.
    let label_style = ResolvedStyle {
        ticks_size: style.label_size,
        ..style.clone()
    };
    let labels = ticks.labels();
    let mut area = cartesian_area(&canvas, &label_style, top, &labels);
    // Room for the mirrored labels on the right.
    let mirrored = labels
        .iter()
        .map(|l| text_width(l, style.px(style.label_size)))
        .fold(0.0, f64::max);
    area.x1 = (area.x1 - mirrored - style.px(style.ticks_pad)).max(area.x0 + 1.0);

    let plot = Cartesian::new(area, (1.0, dim as f64), (lo, hi), false);

    let minor = Stroke::solid(Rgba8::BLACK, style.px(style.minor_grid_line_width));
    plot.horizontal_grid(
        &mut canvas,
        &minor_ticks(&ticks.values, MINOR_SUBDIVISIONS, (lo, hi)),
        &minor,
    );
    let major = Stroke::solid(Rgba8::BLACK, style.px(style.major_grid_line_width));
    plot.horizontal_grid(&mut canvas, &ticks.values, &major);

    let positions: Vec<f64> = (1..=dim).map(|x| x as f64).collect();
    let spine = Stroke::solid(Rgba8::BLACK, style.px(line_width));
    plot.vertical_grid(&mut canvas, &positions, &spine);

    let line = Stroke::solid(Rgba8::DARK_BLUE, style.px(line_width));
    for row in data.rows() {
        let points: Vec<Point> = row
            .iter()
            .enumerate()
            .map(|(i, &v)| plot.map((i + 1) as f64, v))
            .collect();
        canvas.polyline(&points, &line);
    }

    plot.frame(&mut canvas, style.px(style.minor_grid_line_width));
    plot.y_tick_labels(&mut canvas, &ticks, &label_style);

    let pad = style.px(style.ticks_pad);
    let label_px = style.px(style.label_size);
    let right = TextStyle::new(label_px).anchor(Anchor::Start);
    for (y, label) in ticks.iter().zip(&labels) {
        if y < lo.min(hi) || y > lo.max(hi) {
            continue;
        }
        let p = plot.map(dim as f64, y);
        canvas.text(Point::new(area.x1 + pad, p.y), label, &right);
    }

    let below = TextStyle::new(label_px).baseline(Baseline::Top);
    for &x in &positions {
        let p = plot.map(x, lo);
        canvas.text(Point::new(p.x, area.y1 + pad), &format!("{x}"), &below);
    }

    plot.axis_labels(
        &mut canvas,
        &label_style,
        "Objectives",
        "Objective values",
        &labels,
    );

    Ok(vec![canvas.write_png(output)?])
}
