use std::path::{Path, PathBuf};

use crate::{
    charts::{MINOR_SUBDIVISIONS, headroom, new_canvas, per_axis_bounds},
    data::{dataset::Dataset, summary::Summary},
    foundation::{core::Rgba8, error::VizResult},
    render::{
        axes::{Cartesian, cartesian_area, draw_titles},
        scene::{Stroke, objective_label},
    },
    scale::{
        sizer::fit_figure_size,
        ticks::{locate_ticks, minor_ticks},
    },
    style::{config::ScatterOptions, resolve::ResolvedStyle},
};

pub(super) fn render(
    data: &Dataset,
    opts: &ScatterOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let summary = Summary::of(data);
    let bounds = per_axis_bounds(
        &summary,
        opts.min_values.as_ref(),
        opts.max_values.as_ref(),
        2,
    )?;
    let size = fit_figure_size(style.figure_size, &bounds.label_values());

    let (x_lo, x_hi) = bounds.axis(0);
    let (y_lo, y_hi) = bounds.axis(1);
    let xticks = locate_ticks(x_lo, x_hi);
    let yticks = locate_ticks(y_lo, y_hi);
    let xlim = headroom((x_lo, x_hi));
    let ylim = headroom((y_lo, y_hi));

    let mut canvas = new_canvas(style, size)?;
    let top = draw_titles(&mut canvas, style, 1.0, 1.0);
    let y_labels = yticks.labels();
    let area = cartesian_area(&canvas, style, top, &y_labels);
    let plot = Cartesian::new(area, xlim, ylim, false);

    let minor = Stroke::dotted(Rgba8::GRAY, style.px(style.minor_grid_line_width));
    plot.vertical_grid(
        &mut canvas,
        &minor_ticks(&xticks.values, MINOR_SUBDIVISIONS, xlim),
        &minor,
    );
    plot.horizontal_grid(
        &mut canvas,
        &minor_ticks(&yticks.values, MINOR_SUBDIVISIONS, ylim),
        &minor,
    );
    let major = Stroke::dashed(Rgba8::BLACK, style.px(style.major_grid_line_width));
    plot.vertical_grid(&mut canvas, &xticks.values, &major);
    plot.horizontal_grid(&mut canvas, &yticks.values, &major);

    let radius = style.marker_radius(style.scatter_size);
    for row in data.rows() {
        canvas.circle(plot.map(row[0], row[1]), radius, Rgba8::DARK_BLUE);
    }

    plot.frame(&mut canvas, style.px(style.minor_grid_line_width));
    plot.x_tick_labels(&mut canvas, &xticks, style);
    plot.y_tick_labels(&mut canvas, &yticks, style);
    plot.axis_labels(
        &mut canvas,
        style,
        &objective_label(1),
        &objective_label(2),
        &y_labels,
    );

    Ok(vec![canvas.write_png(output)?])
}
