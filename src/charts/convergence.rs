use std::path::{Path, PathBuf};

use kurbo::Point;

use crate::{
    charts::new_canvas,
    data::dataset::Dataset,
    foundation::{
        core::Rgba8,
        error::{VizError, VizResult},
    },
    render::{
        axes::{Cartesian, cartesian_area, draw_titles},
        scene::Stroke,
    },
    scale::{sizer::fit_figure_size, ticks::locate_ticks},
    style::{
        config::ConvergenceOptions,
        resolve::{CONVERGENCE_LINE_WIDTH, ResolvedStyle},
    },
};

/// Marker size (points) of the dots on the line.
const DOT_SIZE: f64 = 150.0;

/// The plotted `(x, y)` series: column 1 over column 2, or over `1..=n` for one column.
pub(super) fn series(data: &Dataset) -> Vec<(f64, f64)> {
    if data.dim() > 1 {
        data.rows().map(|r| (r[1], r[0])).collect()
    } else {
        data.column(0)
            .enumerate()
            .map(|(i, y)| ((i + 1) as f64, y))
            .collect()
    }
}

/// `([x_min, y_min], [x_max, y_max])` from explicit options or the raw extremes.
pub(super) fn limits(
    points: &[(f64, f64)],
    opts: &ConvergenceOptions,
) -> VizResult<([f64; 2], [f64; 2])> {
    let fold = |pick: fn(&(f64, f64)) -> f64| {
        points
            .iter()
            .map(pick)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    };
    let (x_lo, x_hi) = fold(|p| p.0);
    let (y_lo, y_hi) = fold(|p| p.1);

    let pair = |name: &str, given: Option<&Vec<f64>>, default: [f64; 2]| match given {
        None => Ok(default),
        Some(v) if v.len() >= 2 => Ok([v[0], v[1]]),
        Some(v) => Err(VizError::validation(format!(
            "{name} has {} entries, the chart needs 2",
            v.len()
        ))),
    };
    Ok((
        pair("min_values", opts.min_values.as_ref(), [x_lo, y_lo])?,
        pair("max_values", opts.max_values.as_ref(), [x_hi, y_hi])?,
    ))
}

pub(super) fn render(
    data: &Dataset,
    opts: &ConvergenceOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let points = series(data);
    let (mins, maxs) = limits(&points, opts)?;

    if opts.logarithmic
        && (mins[1] <= 0.0 || maxs[1] <= 0.0 || points.iter().any(|p| p.1 <= 0.0))
    {
        return Err(VizError::validation(
            "logarithmic axis needs strictly positive values",
        ));
    }

    let size = fit_figure_size(
        style.figure_size,
        &[mins[0], mins[1], maxs[0], maxs[1]],
    );
    let xticks = locate_ticks(mins[0], maxs[0]);
    let yticks = locate_ticks(mins[1], maxs[1]);

    let mut canvas = new_canvas(style, size)?;
    let top = draw_titles(&mut canvas, style, 1.0, 1.0);
    let y_labels = yticks.labels();
    let area = cartesian_area(&canvas, style, top, &y_labels);
    let plot = Cartesian::new(
        area,
        (mins[0], maxs[0]),
        (mins[1], maxs[1]),
        opts.logarithmic,
    );

    let grid = Stroke::dashed(Rgba8::BLACK, style.px(style.major_grid_line_width));
    plot.vertical_grid(&mut canvas, &xticks.values, &grid);
    plot.horizontal_grid(&mut canvas, &yticks.values, &grid);

    let line_width = opts.line_width.unwrap_or(CONVERGENCE_LINE_WIDTH);
    let pixels: Vec<Point> = points.iter().map(|&(x, y)| plot.map(x, y)).collect();
    canvas.polyline(&pixels, &Stroke::solid(Rgba8::DARK_RED, style.px(line_width)));
    let dot = style.px(DOT_SIZE * 0.25);
    for &p in &pixels {
        canvas.circle(p, dot, Rgba8::DARK_RED);
    }

    plot.frame(&mut canvas, style.px(style.minor_grid_line_width));
    plot.x_tick_labels(&mut canvas, &xticks, style);
    plot.y_tick_labels(&mut canvas, &yticks, style);
    plot.axis_labels(&mut canvas, style, "t", "Value", &y_labels);

    Ok(vec![canvas.write_png(output)?])
}
