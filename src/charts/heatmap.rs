use std::path::{Path, PathBuf};

use kurbo::{Point, Rect};

use crate::{
    charts::{new_canvas, shared_range},
    data::{dataset::Dataset, summary::Summary},
    foundation::error::VizResult,
    render::{
        axes::{colorbar, draw_titles, sane_area},
        scene::{Anchor, Baseline, TextStyle, objective_label},
    },
    scale::{
        bounds::{axis_bounds, global_bounds},
        sizer::fit_figure_size,
        ticks::locate_ticks,
    },
    style::{colormap::Colormap, config::HeatmapOptions, resolve::ResolvedStyle},
};

const TITLE_SCALE: f64 = 0.75;
const SUBTITLE_SCALE: f64 = 0.65;
const LABEL_SCALE: f64 = 0.75;

/// Rescale every cell to `(v - lo) / (hi - lo)`; a zero-width range maps cells to 0.
pub(super) fn normalize_cells(data: &Dataset, lo: f64, hi: f64) -> Dataset {
    let range = hi - lo;
    data.map_values(|v| {
        if range.abs() > f64::EPSILON {
            (v - lo) / range
        } else {
            0.0
        }
    })
}

/// The cells to draw and their colour range, after optional normalization.
pub(super) fn prepare(data: &Dataset, opts: &HeatmapOptions) -> (Dataset, (f64, f64)) {
    let summary = Summary::of(data);
    let (lo, hi) = shared_range(&summary, opts.min_value, opts.max_value);
    if !opts.normalized {
        return (data.clone(), (lo, hi));
    }
    let normalized = normalize_cells(data, lo, hi);
    let bounds = global_bounds(&axis_bounds(&Summary::of(&normalized)));
    (normalized, bounds)
}

pub(super) fn render(
    data: &Dataset,
    opts: &HeatmapOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let (cells, (lo, hi)) = prepare(data, opts);
    tracing::debug!(lo, hi, normalized = opts.normalized, "heatmap range");
    let size = fit_figure_size(style.figure_size, &[lo, hi]);

    let mut canvas = new_canvas(style, size)?;
    let top = draw_titles(&mut canvas, style, TITLE_SCALE, SUBTITLE_SCALE);
    let (w, h) = (canvas.width(), canvas.height());

    let label_px = style.px(style.label_size * LABEL_SCALE);
    let header = label_px * 2.5;
    let matrix = sane_area(
        Rect::new(w * 0.06, top + header, w * 0.80, h * 0.96),
        w,
        h,
    );

    let cmap = Colormap::Blues;
    let (rows, cols) = (cells.len(), cells.dim());
    let cell_w = matrix.width() / cols as f64;
    let cell_h = matrix.height() / rows as f64;
    for (r, row) in cells.rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let x0 = matrix.x0 + c as f64 * cell_w;
            let y0 = matrix.y0 + r as f64 * cell_h;
            canvas.fill_rect(
                Rect::new(x0, y0, x0 + cell_w, y0 + cell_h),
                cmap.sample_scaled(v, lo, hi),
            );
        }
    }

    let header_text = TextStyle::new(label_px)
        .anchor(Anchor::Start)
        .baseline(Baseline::Bottom)
        .rotate(-45.0);
    for c in 0..cols {
        let x = matrix.x0 + (c as f64 + 0.5) * cell_w;
        canvas.text(
            Point::new(x, matrix.y0 - label_px * 0.3),
            &objective_label(c + 1),
            &header_text,
        );
    }

    let bar = Rect::new(w * 0.84, matrix.y0, w * 0.87, matrix.y1);
    let ticks = locate_ticks(lo, hi);
    let marks: Vec<(f64, String)> = ticks.iter().zip(ticks.labels()).collect();
    colorbar(
        &mut canvas,
        bar,
        cmap,
        (lo, hi),
        &marks,
        &TextStyle::new(label_px),
    );

    Ok(vec![canvas.write_png(output)?])
}
