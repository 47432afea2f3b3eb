//! Render every chart that suits each input file's dimension.

use std::path::{Path, PathBuf};

use crate::{
    charts::{DataSource, render_chart},
    data::dataset::{Dataset, read_dataset},
    foundation::{core::output_stem, error::VizResult},
    style::config::{ChartConfig, ChartKind, ChartOverrides},
};

/// Chart kinds drawn for a dataset with `dim` columns.
pub fn charts_for_dimension(dim: usize) -> &'static [ChartKind] {
    match dim {
        2 => &[ChartKind::Plot2d],
        3 => &[ChartKind::Plot3d],
        _ => &[
            ChartKind::Parallel,
            ChartKind::Bubble,
            ChartKind::Radar,
            ChartKind::Heatmap,
        ],
    }
}

/// File-name suffix for each kind's output.
fn output_suffix(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Plot2d => "plot2D",
        ChartKind::Plot3d => "plot3D",
        ChartKind::Parallel => "parallel",
        ChartKind::Bubble => "bubble",
        ChartKind::Radar => "radar",
        ChartKind::Heatmap => "heat",
        ChartKind::Convergence => "convergence",
    }
}

/// Outcome of [`render_batch`].
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    /// Every written image, in render order.
    pub rendered: Vec<PathBuf>,
    /// Inputs or charts that failed, with the error text.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Whether every input rendered.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render each input to `<out_dir>/<stem>_<suffix>.png` for the kinds its dimension selects.
///
/// Files are independent: a load or render failure is logged, recorded in the report
/// and the batch moves on.
#[tracing::instrument(skip(inputs, overrides), fields(inputs = inputs.len(), out_dir = %out_dir.display()))]
pub fn render_batch(inputs: &[PathBuf], out_dir: &Path, overrides: &ChartOverrides) -> BatchReport {
    let mut report = BatchReport::default();
    for input in inputs {
        let data = match read_dataset(input) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(input = %input.display(), %err, "skipping input");
                report.failures.push((input.clone(), err.to_string()));
                continue;
            }
        };

        let stem = output_stem(input);
        for &kind in charts_for_dimension(data.dim()) {
            let output = out_dir.join(format!("{stem}_{}.png", output_suffix(kind)));
            match render_one(kind, overrides, data.clone(), &output) {
                Ok(written) => report.rendered.extend(written),
                Err(err) => {
                    tracing::warn!(input = %input.display(), %kind, %err, "chart failed");
                    report.failures.push((output, err.to_string()));
                }
            }
        }
    }
    tracing::info!(
        rendered = report.rendered.len(),
        failed = report.failures.len(),
        "batch finished"
    );
    report
}

fn render_one(
    kind: ChartKind,
    overrides: &ChartOverrides,
    data: Dataset,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let config = ChartConfig::from_overrides(kind, overrides);
    render_chart(&config, DataSource::inline(data), output)
}

#[cfg(test)]
#[path = "../tests/unit/batch.rs"]
mod tests;
