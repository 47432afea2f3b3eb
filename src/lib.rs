//! paretoviz renders multi-objective solution sets (Pareto fronts) into static charts
//! and stitches rendered frames into looping animations.
//!
//! # Pipeline overview
//!
//! 1. **Load**: whitespace-delimited text file -> [`Dataset`] -> [`Summary`]
//! 2. **Resolve**: [`ChartConfig`] (explicit values) + chart-kind defaults + global
//!    fallbacks -> [`ResolvedStyle`]
//! 3. **Scale**: per-axis bounds ([`round_down`] / [`round_up`]), tick locations
//!    ([`locate_ticks`]) and the fitted figure size ([`fit_figure_size`])
//! 4. **Draw**: each chart kind builds an SVG scene that is rasterized into PNG files
//! 5. **Animate** (optional): [`Animator`] turns a list of PNG frames into a looping GIF
//!
//! Rendering is single-threaded and synchronous. Every chart owns its canvas for the
//! duration of one draw and releases it as soon as its file is written.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animate;
mod batch;
mod charts;
mod data;
mod foundation;
mod render;
mod scale;
mod style;

pub use animate::gif::{Animator, DEFAULT_ANIMATION_FILE, FRAME_INTERVAL_MS};
pub use batch::{BatchReport, charts_for_dimension, render_batch};
pub use charts::{DataSource, render_chart, render_chart_from_file};
pub use data::dataset::{Dataset, parse_dataset, read_dataset};
pub use data::summary::{ColumnSummary, Summary};
pub use foundation::core::{FigureSize, Rgba8, output_stem, suffixed_path};
pub use foundation::error::{VizError, VizResult};
pub use render::projection::{CAMERA_VIEWS, View3d};
pub use scale::bounds::{AxisBounds, axis_bounds, global_bounds};
pub use scale::round::{quantize_hundredths, round_down, round_to_base, round_up};
pub use scale::sizer::fit_figure_size;
pub use scale::ticks::{MAX_TICKS, MIN_TICKS, TickSet, locate_ticks, minor_ticks, tick_step};
pub use style::colormap::{ColorSpec, Colormap};
pub use style::config::{
    BubbleOptions, ChartConfig, ChartKind, ChartOptions, ChartOverrides, CommonStyle,
    ConvergenceOptions, HeatmapOptions, ParallelOptions, RadarOptions, ScatterOptions,
};
pub use style::resolve::{FONT_SIZE, ResolvedStyle, kind_defaults, resolve_style};
