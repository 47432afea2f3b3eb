//! Chart renderers and the single entry point that dispatches to them.

use std::path::{Path, PathBuf};

use crate::{
    data::{
        dataset::{Dataset, read_dataset},
        summary::Summary,
    },
    foundation::{
        core::{FigureSize, Rgba8},
        error::{VizError, VizResult},
    },
    render::scene::FigureCanvas,
    scale::bounds::{AxisBounds, axis_bounds, global_bounds},
    style::{
        config::{ChartConfig, ChartOptions},
        resolve::{ResolvedStyle, resolve_style},
    },
};

mod bubble;
mod convergence;
mod heatmap;
mod parallel;
mod radar;
mod scatter2d;
mod scatter3d;

/// Minor grid lines split every major interval into this many parts.
const MINOR_SUBDIVISIONS: usize = 4;

/// Where a chart's rows come from. Inline data wins over a file.
#[derive(Clone, Debug, Default)]
pub struct DataSource {
    /// Rows supplied directly.
    pub data: Option<Dataset>,
    /// Whitespace-delimited file to load when no inline rows are given.
    pub input_file: Option<PathBuf>,
}

impl DataSource {
    /// Rows supplied directly.
    pub fn inline(data: Dataset) -> Self {
        Self {
            data: Some(data),
            input_file: None,
        }
    }

    /// Rows loaded from `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            data: None,
            input_file: Some(path.into()),
        }
    }

    /// Resolve the source into a dataset.
    ///
    /// Fails with [`VizError::MissingData`] when neither rows nor a file are given.
    pub fn load(self) -> VizResult<Dataset> {
        match (self.data, self.input_file) {
            (Some(data), _) => Ok(data),
            (None, Some(path)) => read_dataset(&path),
            (None, None) => Err(VizError::MissingData),
        }
    }
}

impl From<Dataset> for DataSource {
    fn from(data: Dataset) -> Self {
        Self::inline(data)
    }
}

/// Render one chart of the kind selected by `config` and write it to `output`.
///
/// Returns every written file: one for flat charts, five suffixed files
/// (`<stem>_1` to `<stem>_5`) for the camera-sweep charts.
#[tracing::instrument(skip(config, source, output), fields(kind = %config.kind(), output = %output.display()))]
pub fn render_chart(
    config: &ChartConfig,
    source: DataSource,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let data = source.load()?;
    let kind = config.kind();
    if data.dim() < kind.min_dim() {
        return Err(VizError::validation(format!(
            "{kind} chart needs at least {} columns, dataset has {}",
            kind.min_dim(),
            data.dim()
        )));
    }

    let style = resolve_style(&config.common, kind, output);
    let written = match &config.options {
        ChartOptions::Plot2d(o) => scatter2d::render(&data, o, &style, output)?,
        ChartOptions::Plot3d(o) => scatter3d::render(&data, o, &style, output)?,
        ChartOptions::Bubble(o) => bubble::render(&data, o, &style, output)?,
        ChartOptions::Parallel(o) => parallel::render(&data, o, &style, output)?,
        ChartOptions::Radar(o) => radar::render(&data, o, &style, output)?,
        ChartOptions::Heatmap(o) => heatmap::render(&data, o, &style, output)?,
        ChartOptions::Convergence(o) => convergence::render(&data, o, &style, output)?,
    };

    tracing::info!(rows = data.len(), files = written.len(), "rendered chart");
    Ok(written)
}

/// [`render_chart`] for rows stored in `input`.
pub fn render_chart_from_file(
    config: &ChartConfig,
    input: &Path,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    render_chart(config, DataSource::file(input), output)
}

fn new_canvas(style: &ResolvedStyle, size: FigureSize) -> VizResult<FigureCanvas> {
    let (w, h) = size.to_pixels(style.dpi)?;
    Ok(FigureCanvas::new(w, h, Rgba8::WHITE))
}

/// Derived per-axis bounds, replaced by explicit lists when given.
fn per_axis_bounds(
    summary: &Summary,
    min_values: Option<&Vec<f64>>,
    max_values: Option<&Vec<f64>>,
    axes: usize,
) -> VizResult<AxisBounds> {
    let mut bounds = axis_bounds(summary);
    let check = |name: &str, values: &Vec<f64>| {
        if values.len() < axes {
            return Err(VizError::validation(format!(
                "{name} has {} entries, the chart needs {axes}",
                values.len()
            )));
        }
        Ok(values.clone())
    };
    if let Some(mins) = min_values {
        bounds.mins = check("min_values", mins)?;
    }
    if let Some(maxs) = max_values {
        bounds.maxs = check("max_values", maxs)?;
    }
    Ok(bounds)
}

/// One value range for every axis: explicit values, or the extremes of the derived bounds.
fn shared_range(summary: &Summary, min_value: Option<f64>, max_value: Option<f64>) -> (f64, f64) {
    let (lo, hi) = global_bounds(&axis_bounds(summary));
    (min_value.unwrap_or(lo), max_value.unwrap_or(hi))
}

/// Axis limits with 1% headroom above the maximum.
fn headroom((lo, hi): (f64, f64)) -> (f64, f64) {
    (lo, hi + hi * 0.01)
}

#[cfg(test)]
#[path = "../../tests/unit/charts/mod.rs"]
mod tests;
