use std::path::{Path, PathBuf};

use crate::{
    charts::{
        per_axis_bounds,
        scatter3d::{ColorLegend, CubeScene, Marker, render_sweep},
    },
    data::{dataset::Dataset, summary::Summary},
    foundation::{
        core::Rgba8,
        error::{VizError, VizResult},
    },
    render::scene::objective_label,
    scale::sizer::fit_figure_size,
    style::{
        colormap::{ColorSpec, Colormap},
        config::BubbleOptions,
        resolve::{BUBBLE_SIZE_SCALE, ResolvedStyle},
    },
};

const COLOR_COLUMN: usize = 3;
const SIZE_COLUMN: usize = 4;

/// Point colouring after defaults: the 4th column when present, else dark blue.
pub(super) fn effective_color(opts: &BubbleOptions, dim: usize) -> ColorSpec {
    match &opts.color {
        Some(spec) => spec.clone(),
        None if dim > COLOR_COLUMN => ColorSpec::Column(COLOR_COLUMN),
        None => ColorSpec::Fixed(Rgba8::DARK_BLUE),
    }
}

pub(super) fn render(
    data: &Dataset,
    opts: &BubbleOptions,
    style: &ResolvedStyle,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let summary = Summary::of(data);
    let bounds = per_axis_bounds(
        &summary,
        opts.min_values.as_ref(),
        opts.max_values.as_ref(),
        3,
    )?;
    let size = fit_figure_size(style.figure_size, &bounds.label_values());
    let cmap = opts.cmap.unwrap_or(Colormap::GistRainbowR);

    let color = effective_color(opts, data.dim());
    let legend = match color {
        ColorSpec::Column(col) if col >= data.dim() => {
            return Err(VizError::validation(format!(
                "colour column {col} is out of range for {} columns",
                data.dim()
            )));
        }
        ColorSpec::Column(col) => {
            let c = summary.column(col);
            Some(ColorLegend {
                cmap,
                range: (c.min, c.max),
                label: objective_label(col + 1),
            })
        }
        ColorSpec::Fixed(_) => None,
    };

    let markers = data
        .rows()
        .map(|row| {
            let area = if data.dim() > SIZE_COLUMN {
                row[SIZE_COLUMN] * BUBBLE_SIZE_SCALE
            } else {
                style.scatter_size
            };
            let color = match (&color, &legend) {
                (ColorSpec::Column(col), Some(l)) => {
                    cmap.sample_scaled(row[*col], l.range.0, l.range.1)
                }
                (ColorSpec::Fixed(c), _) => *c,
                (ColorSpec::Column(_), None) => Rgba8::DARK_BLUE,
            };
            Marker {
                pos: [row[0], row[1], row[2]],
                radius: style.marker_radius(area),
                color,
            }
        })
        .collect();

    let scene = CubeScene {
        bounds: &bounds,
        markers,
        legend,
    };
    render_sweep(&scene, style, size, output)
}
