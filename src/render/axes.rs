//! Shared chart furniture: title block, cartesian axes, grids and colour bars.

use kurbo::{Affine, Point, Rect};

use crate::{
    foundation::core::Rgba8,
    render::scene::{Anchor, Baseline, FigureCanvas, Stroke, TextStyle, text_width},
    scale::ticks::TickSet,
    style::{colormap::Colormap, resolve::ResolvedStyle},
};

const OUTER_MARGIN: f64 = 0.04;
const LINE_HEIGHT: f64 = 1.2;

/// Draw the bold monospace title and the optional italic subtitle.
///
/// Returns the y coordinate below the title block. `scale` shrinks both lines (the
/// heatmap draws them smaller).
pub(crate) fn draw_titles(
    canvas: &mut FigureCanvas,
    style: &ResolvedStyle,
    title_scale: f64,
    subtitle_scale: f64,
) -> f64 {
    let cx = canvas.width() / 2.0;
    let mut y = canvas.height() * 0.03;

    let title_px = style.px(style.title_size * title_scale);
    canvas.text(
        Point::new(cx, y),
        &style.title,
        &TextStyle::new(title_px)
            .baseline(Baseline::Top)
            .bold()
            .monospace(),
    );
    y += title_px * LINE_HEIGHT;

    if style.has_subtitle() {
        let sub_px = style.px(style.subtitle_size * subtitle_scale);
        y += sub_px * 0.3;
        canvas.text(
            Point::new(cx, y),
            &style.subtitle,
            &TextStyle::new(sub_px).baseline(Baseline::Top).italic(),
        );
        y += sub_px * LINE_HEIGHT;
    }
    y + canvas.height() * 0.02
}

/// Plot area of a cartesian chart below `top`, leaving room for tick and axis labels.
pub(crate) fn cartesian_area(
    canvas: &FigureCanvas,
    style: &ResolvedStyle,
    top: f64,
    y_tick_labels: &[String],
) -> Rect {
    let (w, h) = (canvas.width(), canvas.height());
    let ticks_px = style.px(style.ticks_size);
    let widest = y_tick_labels
        .iter()
        .map(|l| text_width(l, ticks_px))
        .fold(0.0, f64::max);
    let axis_label = style.px(style.label_size) * LINE_HEIGHT + style.px(style.label_pad);

    let left = w * OUTER_MARGIN + axis_label + widest + style.px(style.ticks_pad);
    let bottom = h * OUTER_MARGIN + axis_label + ticks_px * LINE_HEIGHT + style.px(style.ticks_pad);
    let right = w * OUTER_MARGIN * 1.5;

    sane_area(Rect::new(left, top, w - right, h - bottom), w, h)
}

/// Keep at least a fifth of the canvas for data when labels crowd it out.
pub(crate) fn sane_area(area: Rect, w: f64, h: f64) -> Rect {
    let min_w = w * 0.2;
    let min_h = h * 0.2;
    let mut area = area;
    if !(area.width() >= min_w) {
        area.x0 = (w - min_w) / 2.0;
        area.x1 = area.x0 + min_w;
    }
    if !(area.height() >= min_h) {
        area.y0 = (h - min_h) / 2.0;
        area.y1 = area.y0 + min_h;
    }
    area
}

/// A rectangular plot area with linear x and linear or logarithmic y.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cartesian {
    pub area: Rect,
    x: (f64, f64),
    y: (f64, f64),
    log_y: bool,
    to_px: Affine,
}

impl Cartesian {
    /// `y` bounds must be positive when `log_y` is set.
    pub fn new(area: Rect, x: (f64, f64), y: (f64, f64), log_y: bool) -> Self {
        let ty = |v: f64| if log_y { v.log10() } else { v };
        let (y0, y1) = (ty(y.0), ty(y.1));

        let axis = |lo: f64, hi: f64, len: f64, origin: f64| {
            let span = hi - lo;
            if span.abs() > f64::EPSILON && span.is_finite() {
                (len / span, origin - lo * len / span)
            } else {
                (0.0, origin + len / 2.0)
            }
        };
        let (sx, tx) = axis(x.0, x.1, area.width(), area.x0);
        let (sy, ty_off) = axis(y0, y1, area.height(), 0.0);

        let to_px = Affine::new([sx, 0.0, 0.0, -sy, tx, area.y1 - ty_off]);
        Self {
            area,
            x,
            y,
            log_y,
            to_px,
        }
    }

    fn y_value(&self, v: f64) -> f64 {
        if self.log_y { v.log10() } else { v }
    }

    /// Pixel position of a data point.
    pub fn map(&self, x: f64, y: f64) -> Point {
        self.to_px * Point::new(x, self.y_value(y))
    }

    fn in_x(&self, v: f64) -> bool {
        let (lo, hi) = ordered(self.x);
        v >= lo - 1e-9 && v <= hi + 1e-9
    }

    fn in_y(&self, v: f64) -> bool {
        let (lo, hi) = ordered(self.y);
        v >= lo - 1e-9 && v <= hi + 1e-9
    }

    /// Vertical grid lines at `xs` within the x range.
    pub fn vertical_grid(&self, canvas: &mut FigureCanvas, xs: &[f64], stroke: &Stroke) {
        for &x in xs.iter().filter(|&&x| self.in_x(x)) {
            let px = self.map(x, self.y.0).x;
            canvas.line(
                Point::new(px, self.area.y0),
                Point::new(px, self.area.y1),
                stroke,
            );
        }
    }

    /// Horizontal grid lines at `ys` within the y range.
    pub fn horizontal_grid(&self, canvas: &mut FigureCanvas, ys: &[f64], stroke: &Stroke) {
        for &y in ys.iter().filter(|&&y| self.in_y(y)) {
            if self.log_y && !(y > 0.0) {
                continue;
            }
            let py = self.map(self.x.0, y).y;
            canvas.line(
                Point::new(self.area.x0, py),
                Point::new(self.area.x1, py),
                stroke,
            );
        }
    }

    pub fn frame(&self, canvas: &mut FigureCanvas, width: f64) {
        canvas.stroke_rect(self.area, &Stroke::solid(Rgba8::BLACK, width));
    }

    /// Tick marks and labels under the x axis; nothing for an empty tick set.
    pub fn x_tick_labels(&self, canvas: &mut FigureCanvas, ticks: &TickSet, style: &ResolvedStyle) {
        let pad = style.px(style.ticks_pad);
        let text = TextStyle::new(style.px(style.ticks_size)).baseline(Baseline::Top);
        let mark = Stroke::solid(Rgba8::BLACK, style.px(style.minor_grid_line_width));
        for (x, label) in ticks.iter().zip(ticks.labels()) {
            if !self.in_x(x) {
                continue;
            }
            let px = self.map(x, self.y.0).x;
            let base = Point::new(px, self.area.y1);
            canvas.line(base, Point::new(px, self.area.y1 + pad * 0.5), &mark);
            canvas.text(Point::new(px, self.area.y1 + pad), &label, &text);
        }
    }

    /// Tick marks and labels left of the y axis; nothing for an empty tick set.
    pub fn y_tick_labels(&self, canvas: &mut FigureCanvas, ticks: &TickSet, style: &ResolvedStyle) {
        let pad = style.px(style.ticks_pad);
        let text = TextStyle::new(style.px(style.ticks_size)).anchor(Anchor::End);
        let mark = Stroke::solid(Rgba8::BLACK, style.px(style.minor_grid_line_width));
        for (y, label) in ticks.iter().zip(ticks.labels()) {
            if !self.in_y(y) || (self.log_y && !(y > 0.0)) {
                continue;
            }
            let py = self.map(self.x.0, y).y;
            canvas.line(
                Point::new(self.area.x0 - pad * 0.5, py),
                Point::new(self.area.x0, py),
                &mark,
            );
            canvas.text(Point::new(self.area.x0 - pad, py), &label, &text);
        }
    }

    /// Axis titles below the x tick labels and left of the y tick labels.
    pub fn axis_labels(
        &self,
        canvas: &mut FigureCanvas,
        style: &ResolvedStyle,
        x_label: &str,
        y_label: &str,
        y_tick_labels: &[String],
    ) {
        let label = TextStyle::new(style.px(style.label_size));
        let ticks_px = style.px(style.ticks_size);
        let y_tick_width = y_tick_labels
            .iter()
            .map(|l| text_width(l, ticks_px))
            .fold(0.0, f64::max);
        let gap = style.px(style.ticks_pad) + style.px(style.label_pad);

        let x_at = Point::new(
            self.area.center().x,
            self.area.y1 + gap + ticks_px * LINE_HEIGHT,
        );
        canvas.text(x_at, x_label, &label.baseline(Baseline::Top));

        let y_at = Point::new(self.area.x0 - gap - y_tick_width, self.area.center().y);
        canvas.text(
            y_at,
            y_label,
            &label.baseline(Baseline::Bottom).rotate(-90.0),
        );
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A vertical colour bar in `rect` for `cmap` over `[lo, hi]`, with labelled ticks.
pub(crate) fn colorbar(
    canvas: &mut FigureCanvas,
    rect: Rect,
    cmap: Colormap,
    (lo, hi): (f64, f64),
    ticks: &[(f64, String)],
    text: &TextStyle,
) {
    const STRIPS: usize = 64;
    let strip_h = rect.height() / STRIPS as f64;
    for i in 0..STRIPS {
        let t = (i as f64 + 0.5) / STRIPS as f64;
        let y1 = rect.y1 - i as f64 * strip_h;
        canvas.fill_rect(
            Rect::new(rect.x0, y1 - strip_h - 0.5, rect.x1, y1),
            cmap.sample(t),
        );
    }
    canvas.stroke_rect(rect, &Stroke::solid(Rgba8::BLACK, 1.0));

    let span = hi - lo;
    let text = text.anchor(Anchor::Start);
    for (value, label) in ticks {
        let t = if span.abs() > f64::EPSILON {
            (value - lo) / span
        } else {
            0.0
        };
        if !(-1e-9..=1.0 + 1e-9).contains(&t) {
            continue;
        }
        let y = rect.y1 - t * rect.height();
        canvas.line(
            Point::new(rect.x1, y),
            Point::new(rect.x1 + rect.width() * 0.3, y),
            &Stroke::solid(Rgba8::BLACK, 1.0),
        );
        canvas.text(Point::new(rect.x1 + rect.width() * 0.5, y), label, &text);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/axes.rs"]
mod tests;
