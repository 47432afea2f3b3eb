use std::{fmt, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::FigureSize,
        error::{VizError, VizResult},
    },
    style::colormap::{ColorSpec, Colormap},
};

/// The chart types paretoviz can render.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// 2D scatter of the first two objectives.
    Plot2d,
    /// 3D scatter of the first three objectives, rendered from five camera angles.
    Plot3d,
    /// Parallel coordinates, one vertical axis per objective.
    Parallel,
    /// 3D scatter with colour (4th objective) and size (5th objective) encodings.
    Bubble,
    /// Radar (spider) chart, one spoke per objective.
    Radar,
    /// Row-by-objective matrix coloured by value.
    Heatmap,
    /// Line chart of a value series over iterations.
    Convergence,
}

impl ChartKind {
    /// Every chart kind, in the order the batch driver lists them.
    pub const ALL: [Self; 7] = [
        Self::Plot2d,
        Self::Plot3d,
        Self::Parallel,
        Self::Bubble,
        Self::Radar,
        Self::Heatmap,
        Self::Convergence,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plot2d => "plot2d",
            Self::Plot3d => "plot3d",
            Self::Parallel => "parallel",
            Self::Bubble => "bubble",
            Self::Radar => "radar",
            Self::Heatmap => "heatmap",
            Self::Convergence => "convergence",
        }
    }

    /// Whether the chart is written once per camera angle.
    pub fn is_camera_sweep(self) -> bool {
        matches!(self, Self::Plot3d | Self::Bubble)
    }

    /// Smallest column count the chart can draw.
    pub fn min_dim(self) -> usize {
        match self {
            Self::Plot3d | Self::Bubble => 3,
            Self::Plot2d | Self::Parallel => 2,
            Self::Radar | Self::Heatmap | Self::Convergence => 1,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "plot2d" | "scatter2d" => Self::Plot2d,
            "plot3d" | "scatter3d" => Self::Plot3d,
            "parallel" | "parallel_coordinates" => Self::Parallel,
            "bubble" => Self::Bubble,
            "radar" => Self::Radar,
            "heatmap" | "heat" => Self::Heatmap,
            "convergence" => Self::Convergence,
            _ => return Err(VizError::unsupported_chart(s)),
        };
        Ok(kind)
    }
}

/// Visual properties shared by every chart kind. `None` means "use the default".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CommonStyle {
    /// Main title; defaults to the output file stem.
    pub title: Option<String>,
    /// Italic line under the title.
    pub subtitle: Option<String>,
    /// Title font size (points).
    pub title_size: Option<f64>,
    /// Subtitle font size (points).
    pub subtitle_size: Option<f64>,
    /// Axis label font size (points).
    pub label_size: Option<f64>,
    /// Tick label font size (points).
    pub ticks_size: Option<f64>,
    /// Gap between axis and axis label (points).
    pub label_pad: Option<f64>,
    /// Major grid line width (points).
    pub major_grid_line_width: Option<f64>,
    /// Minor grid line width (points).
    pub minor_grid_line_width: Option<f64>,
    /// Gap between axis and tick labels (points).
    pub ticks_pad: Option<f64>,
    /// Marker area (points squared).
    pub scatter_size: Option<f64>,
    /// Base figure size before label fitting.
    pub figure_size: Option<FigureSize>,
    /// Pixels per figure unit.
    pub dpi: Option<f64>,
}

impl CommonStyle {
    /// Field-wise layering: values set on `self` win, gaps are filled from `lower`.
    pub fn or(&self, lower: &Self) -> Self {
        Self {
            title: self.title.clone().or_else(|| lower.title.clone()),
            subtitle: self.subtitle.clone().or_else(|| lower.subtitle.clone()),
            title_size: self.title_size.or(lower.title_size),
            subtitle_size: self.subtitle_size.or(lower.subtitle_size),
            label_size: self.label_size.or(lower.label_size),
            ticks_size: self.ticks_size.or(lower.ticks_size),
            label_pad: self.label_pad.or(lower.label_pad),
            major_grid_line_width: self.major_grid_line_width.or(lower.major_grid_line_width),
            minor_grid_line_width: self.minor_grid_line_width.or(lower.minor_grid_line_width),
            ticks_pad: self.ticks_pad.or(lower.ticks_pad),
            scatter_size: self.scatter_size.or(lower.scatter_size),
            figure_size: self.figure_size.or(lower.figure_size),
            dpi: self.dpi.or(lower.dpi),
        }
    }
}

/// Explicit per-axis bounds for 2D and 3D scatter charts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScatterOptions {
    /// Per-axis lower bounds.
    pub min_values: Option<Vec<f64>>,
    /// Per-axis upper bounds.
    pub max_values: Option<Vec<f64>>,
}

/// Options of the parallel coordinates chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallelOptions {
    /// Shared lower bound of every axis.
    pub min_value: Option<f64>,
    /// Shared upper bound of every axis.
    pub max_value: Option<f64>,
    /// Polyline width (points).
    pub line_width: Option<f64>,
}

/// Options of the radar chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadarOptions {
    /// Radial lower bound.
    pub min_value: Option<f64>,
    /// Radial upper bound.
    pub max_value: Option<f64>,
    /// Polygon outline width (points).
    pub line_width: Option<f64>,
    /// Draw dashed minor rings between tick rings.
    pub minor: bool,
}

/// Options of the heatmap.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapOptions {
    /// Colour scale lower bound.
    pub min_value: Option<f64>,
    /// Colour scale upper bound.
    pub max_value: Option<f64>,
    /// Rescale every cell to `[0, 1]` before drawing.
    pub normalized: bool,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            min_value: None,
            max_value: None,
            normalized: true,
        }
    }
}

/// Options of the bubble chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BubbleOptions {
    /// Per-axis lower bounds.
    pub min_values: Option<Vec<f64>>,
    /// Per-axis upper bounds.
    pub max_values: Option<Vec<f64>>,
    /// Point colouring; defaults to the 4th column when present.
    pub color: Option<ColorSpec>,
    /// Colormap used when colouring by a column.
    pub cmap: Option<Colormap>,
}

/// Options of the convergence diagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvergenceOptions {
    /// `[x_min, y_min]`.
    pub min_values: Option<Vec<f64>>,
    /// `[x_max, y_max]`.
    pub max_values: Option<Vec<f64>>,
    /// Line width (points).
    pub line_width: Option<f64>,
    /// Logarithmic y axis.
    pub logarithmic: bool,
}

/// Chart-kind-specific options; the variant selects the chart kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartOptions {
    /// 2D scatter.
    Plot2d(ScatterOptions),
    /// 3D scatter.
    Plot3d(ScatterOptions),
    /// Parallel coordinates.
    Parallel(ParallelOptions),
    /// Bubble chart.
    Bubble(BubbleOptions),
    /// Radar chart.
    Radar(RadarOptions),
    /// Heatmap.
    Heatmap(HeatmapOptions),
    /// Convergence diagram.
    Convergence(ConvergenceOptions),
}

impl ChartOptions {
    /// Default options of `kind`.
    pub fn defaults(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Plot2d => Self::Plot2d(ScatterOptions::default()),
            ChartKind::Plot3d => Self::Plot3d(ScatterOptions::default()),
            ChartKind::Parallel => Self::Parallel(ParallelOptions::default()),
            ChartKind::Bubble => Self::Bubble(BubbleOptions::default()),
            ChartKind::Radar => Self::Radar(RadarOptions::default()),
            ChartKind::Heatmap => Self::Heatmap(HeatmapOptions::default()),
            ChartKind::Convergence => Self::Convergence(ConvergenceOptions::default()),
        }
    }

    /// The chart kind these options belong to.
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Plot2d(_) => ChartKind::Plot2d,
            Self::Plot3d(_) => ChartKind::Plot3d,
            Self::Parallel(_) => ChartKind::Parallel,
            Self::Bubble(_) => ChartKind::Bubble,
            Self::Radar(_) => ChartKind::Radar,
            Self::Heatmap(_) => ChartKind::Heatmap,
            Self::Convergence(_) => ChartKind::Convergence,
        }
    }
}

/// Complete (still unresolved) configuration of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Properties shared by every chart kind.
    pub common: CommonStyle,
    /// Kind-specific options.
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Default configuration for `kind`.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            common: CommonStyle::default(),
            options: ChartOptions::defaults(kind),
        }
    }

    /// Chart kind selected by the options variant.
    pub fn kind(&self) -> ChartKind {
        self.options.kind()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.common.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.common.subtitle = Some(subtitle.into());
        self
    }

    /// Set the output resolution in pixels per figure unit.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.common.dpi = Some(dpi);
        self
    }

    /// Pick the options relevant to `kind` from a flat override mapping.
    ///
    /// Options that do not apply to `kind` are ignored.
    pub fn from_overrides(kind: ChartKind, o: &ChartOverrides) -> Self {
        let options = match kind {
            ChartKind::Plot2d => ChartOptions::Plot2d(o.scatter()),
            ChartKind::Plot3d => ChartOptions::Plot3d(o.scatter()),
            ChartKind::Parallel => ChartOptions::Parallel(ParallelOptions {
                min_value: o.min_value,
                max_value: o.max_value,
                line_width: o.line_width,
            }),
            ChartKind::Bubble => ChartOptions::Bubble(BubbleOptions {
                min_values: o.min_values.clone(),
                max_values: o.max_values.clone(),
                color: o.color.clone(),
                cmap: o.cmap,
            }),
            ChartKind::Radar => ChartOptions::Radar(RadarOptions {
                min_value: o.min_value,
                max_value: o.max_value,
                line_width: o.line_width,
                minor: o.minor.unwrap_or(false),
            }),
            ChartKind::Heatmap => ChartOptions::Heatmap(HeatmapOptions {
                min_value: o.min_value,
                max_value: o.max_value,
                normalized: o.normalized.unwrap_or(true),
            }),
            ChartKind::Convergence => ChartOptions::Convergence(ConvergenceOptions {
                min_values: o.min_values.clone(),
                max_values: o.max_values.clone(),
                line_width: o.line_width,
                logarithmic: o.logarithmic.unwrap_or(false),
            }),
        };
        Self {
            common: o.common.clone(),
            options,
        }
    }
}

/// The flat option mapping accepted from configuration files and the CLI.
///
/// Every option is optional; kind-specific options are only read by the chart kinds
/// that use them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartOverrides {
    /// Shared visual properties.
    #[serde(flatten)]
    pub common: CommonStyle,
    /// Per-axis lower bounds (scatter, bubble, convergence).
    pub min_values: Option<Vec<f64>>,
    /// Per-axis upper bounds (scatter, bubble, convergence).
    pub max_values: Option<Vec<f64>>,
    /// Shared lower bound (parallel, radar, heatmap).
    pub min_value: Option<f64>,
    /// Shared upper bound (parallel, radar, heatmap).
    pub max_value: Option<f64>,
    /// Line width (parallel, radar, convergence).
    pub line_width: Option<f64>,
    /// Minor rings (radar).
    pub minor: Option<bool>,
    /// Normalize cells (heatmap).
    pub normalized: Option<bool>,
    /// Point colour or colour column (bubble).
    pub color: Option<ColorSpec>,
    /// Colormap (bubble).
    pub cmap: Option<Colormap>,
    /// Logarithmic y axis (convergence).
    pub logarithmic: Option<bool>,
}

impl ChartOverrides {
    /// Parse overrides from JSON text.
    pub fn from_json(text: &str) -> VizResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| VizError::validation(format!("invalid chart configuration: {e}")))
    }

    /// Read overrides from a JSON file.
    pub fn from_json_file(path: &Path) -> VizResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read chart configuration '{}'", path.display()))?;
        Self::from_json(&text)
    }

    fn scatter(&self) -> ScatterOptions {
        ScatterOptions {
            min_values: self.min_values.clone(),
            max_values: self.max_values.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
