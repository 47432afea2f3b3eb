//! Cascading resolution of chart styles.
//!
//! Every visual property is taken from the first layer that sets it:
//! explicit configuration, then the chart-kind defaults, then the global fallbacks
//! below. The global layer sets every field, so resolution cannot fail.

use std::path::Path;

use crate::{
    foundation::core::{FigureSize, output_stem},
    style::config::{ChartKind, CommonStyle},
};

/// Base font size (points) every size default is derived from.
pub const FONT_SIZE: f64 = 275.0 / 2.0;

pub(crate) const DEFAULT_FIGURE_SIZE: FigureSize = FigureSize::new(60.0, 60.0);
pub(crate) const DEFAULT_DPI: f64 = 10.0;

/// Polyline width of the parallel coordinates chart.
pub(crate) const PARALLEL_LINE_WIDTH: f64 = FONT_SIZE * 0.02;
/// Polygon outline width of the radar chart.
pub(crate) const RADAR_LINE_WIDTH: f64 = FONT_SIZE * 0.02;
/// Line width of the convergence diagram.
pub(crate) const CONVERGENCE_LINE_WIDTH: f64 = FONT_SIZE * 0.10;
/// Bubble marker areas are the 5th column times this factor.
pub(crate) const BUBBLE_SIZE_SCALE: f64 = 1000.0;

const POINTS_PER_UNIT: f64 = 72.0;

/// A style with every property concrete.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Main title.
    pub title: String,
    /// Subtitle; empty when there is none.
    pub subtitle: String,
    /// Title font size (points).
    pub title_size: f64,
    /// Subtitle font size (points).
    pub subtitle_size: f64,
    /// Axis label font size (points).
    pub label_size: f64,
    /// Tick label font size (points).
    pub ticks_size: f64,
    /// Axis label padding (points).
    pub label_pad: f64,
    /// Major grid line width (points).
    pub major_grid_line_width: f64,
    /// Minor grid line width (points).
    pub minor_grid_line_width: f64,
    /// Tick label padding (points).
    pub ticks_pad: f64,
    /// Marker area (points squared).
    pub scatter_size: f64,
    /// Base figure size before label fitting.
    pub figure_size: FigureSize,
    /// Pixels per figure unit.
    pub dpi: f64,
}

impl ResolvedStyle {
    /// Convert a length in points to pixels at this style's resolution.
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi / POINTS_PER_UNIT
    }

    /// Pixel radius of a marker with area `area` (points squared).
    pub fn marker_radius(&self, area: f64) -> f64 {
        self.px(area.max(0.0).sqrt() / 2.0)
    }

    /// Whether a subtitle line is drawn.
    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }

    /// The same values as a fully populated [`CommonStyle`].
    pub fn to_common(&self) -> CommonStyle {
        CommonStyle {
            title: Some(self.title.clone()),
            subtitle: self.has_subtitle().then(|| self.subtitle.clone()),
            title_size: Some(self.title_size),
            subtitle_size: Some(self.subtitle_size),
            label_size: Some(self.label_size),
            ticks_size: Some(self.ticks_size),
            label_pad: Some(self.label_pad),
            major_grid_line_width: Some(self.major_grid_line_width),
            minor_grid_line_width: Some(self.minor_grid_line_width),
            ticks_pad: Some(self.ticks_pad),
            scatter_size: Some(self.scatter_size),
            figure_size: Some(self.figure_size),
            dpi: Some(self.dpi),
        }
    }
}

/// Style defaults specific to `kind`; unset fields fall through to the global layer.
pub fn kind_defaults(kind: ChartKind) -> CommonStyle {
    match kind {
        ChartKind::Plot3d | ChartKind::Bubble => CommonStyle {
            ticks_size: Some(FONT_SIZE * 3.0 / 4.0),
            label_pad: Some(FONT_SIZE * 2.0),
            ..CommonStyle::default()
        },
        ChartKind::Parallel => CommonStyle {
            subtitle_size: Some(FONT_SIZE + 10.0),
            label_pad: Some(FONT_SIZE * 0.00003),
            ..CommonStyle::default()
        },
        ChartKind::Radar => CommonStyle {
            subtitle_size: Some(FONT_SIZE + 10.0),
            label_pad: Some(FONT_SIZE),
            ticks_size: Some(FONT_SIZE * 0.75),
            ..CommonStyle::default()
        },
        ChartKind::Plot2d | ChartKind::Heatmap | ChartKind::Convergence => {
            CommonStyle::default()
        }
    }
}

/// Resolve `explicit` for a chart of `kind` written to `output`.
///
/// The output path only feeds the default title.
pub fn resolve_style(explicit: &CommonStyle, kind: ChartKind, output: &Path) -> ResolvedStyle {
    let s = explicit.or(&kind_defaults(kind));
    ResolvedStyle {
        title: s.title.unwrap_or_else(|| output_stem(output)),
        subtitle: s.subtitle.unwrap_or_default(),
        title_size: s.title_size.unwrap_or(FONT_SIZE + 20.0),
        subtitle_size: s.subtitle_size.unwrap_or(FONT_SIZE),
        label_size: s.label_size.unwrap_or(FONT_SIZE + 20.0),
        ticks_size: s.ticks_size.unwrap_or(FONT_SIZE),
        label_pad: s.label_pad.unwrap_or(FONT_SIZE / 2.0),
        major_grid_line_width: s.major_grid_line_width.unwrap_or(FONT_SIZE / 15.0),
        minor_grid_line_width: s.minor_grid_line_width.unwrap_or(FONT_SIZE / 30.0),
        ticks_pad: s.ticks_pad.unwrap_or(FONT_SIZE / 2.0),
        scatter_size: s.scatter_size.unwrap_or(FONT_SIZE * 10.0),
        figure_size: s.figure_size.unwrap_or(DEFAULT_FIGURE_SIZE),
        dpi: s.dpi.unwrap_or(DEFAULT_DPI),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolve.rs"]
mod tests;
