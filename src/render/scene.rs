use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use kurbo::{Point, Rect};

use crate::{
    foundation::{core::Rgba8, error::VizResult},
    render::raster,
};

/// Stroke pattern of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dash {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Stroke {
    pub color: Rgba8,
    pub width: f64,
    pub dash: Dash,
}

impl Stroke {
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Dash::Solid,
        }
    }

    pub fn dashed(color: Rgba8, width: f64) -> Self {
        Self {
            dash: Dash::Dashed,
            ..Self::solid(color, width)
        }
    }

    pub fn dotted(color: Rgba8, width: f64) -> Self {
        Self {
            dash: Dash::Dotted,
            ..Self::solid(color, width)
        }
    }

    fn attrs(&self) -> String {
        let w = self.width.max(0.1);
        let mut out = format!(
            r#" fill="none" stroke="{}" stroke-width="{}""#,
            self.color.to_hex(),
            num(w)
        );
        if self.color.a != 255 {
            let _ = write!(out, r#" stroke-opacity="{}""#, num(self.color.opacity()));
        }
        match self.dash {
            Dash::Solid => {}
            Dash::Dashed => {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{} {}""#,
                    num(w * 3.7),
                    num(w * 1.6)
                );
            }
            Dash::Dotted => {
                let _ = write!(out, r#" stroke-dasharray="{} {}""#, num(w), num(w * 1.65));
            }
        }
        out
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    Middle,
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TextStyle {
    pub size: f64,
    pub color: Rgba8,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    /// Clockwise rotation in degrees around the anchor point.
    pub rotate: f64,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            color: Rgba8::BLACK,
            anchor: Anchor::Middle,
            baseline: Baseline::Middle,
            bold: false,
            italic: false,
            monospace: false,
            rotate: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }
}

/// Rough advance width of `text` at `size` pixels, for layout before rasterization.
pub(crate) fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.6
}

/// `f` with a subscript objective number: `objective_label(1) == "f₁"`.
pub(crate) fn objective_label(index: usize) -> String {
    const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    let mut label = String::from("f");
    for digit in index.to_string().bytes() {
        label.push(SUBSCRIPTS[usize::from(digit - b'0')]);
    }
    label
}

/// A chart being drawn, kept as an SVG document until it is written.
///
/// Writing consumes the canvas so every chart releases its drawing state as soon as
/// its file exists.
#[derive(Debug)]
pub(crate) struct FigureCanvas {
    width: u32,
    height: u32,
    body: String,
}

impl FigureCanvas {
    pub fn new(width: u32, height: u32, background: Rgba8) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.fill_rect(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            background,
        );
        canvas
    }

    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn line(&mut self, a: Point, b: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(a.x),
            num(a.y),
            num(b.x),
            num(b.y),
            stroke.attrs()
        );
    }

    pub fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" stroke-linejoin="round"{}/>"#,
            point_list(points),
            stroke.attrs()
        );
    }

    /// Closed outline through `points`.
    pub fn polygon(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" stroke-linejoin="round"{}/>"#,
            point_list(points),
            stroke.attrs()
        );
    }

    pub fn fill_polygon(&mut self, points: &[Point], fill: Rgba8) {
        if points.len() < 3 {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}"{}/>"#,
            point_list(points),
            fill_attrs(fill)
        );
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f64, stroke: &Stroke) {
        if !(radius > 0.0) {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(radius),
            stroke.attrs()
        );
    }

    pub fn circle(&mut self, center: Point, radius: f64, fill: Rgba8) {
        if !(radius > 0.0) {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(radius),
            fill_attrs(fill)
        );
    }

    pub fn fill_rect(&mut self, rect: Rect, fill: Rgba8) {
        let rect = rect.abs();
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" shape-rendering="crispEdges"{}/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            fill_attrs(fill)
        );
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let rect = rect.abs();
        let _ = writeln!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            stroke.attrs()
        );
    }

    pub fn text(&mut self, at: Point, text: &str, style: &TextStyle) {
        if text.is_empty() || !(style.size > 0.0) {
            return;
        }
        let anchor = match style.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let baseline = match style.baseline {
            Baseline::Top => "hanging",
            Baseline::Middle => "central",
            Baseline::Bottom => "alphabetic",
        };
        let family = if style.monospace {
            "monospace"
        } else {
            "sans-serif"
        };

        let mut attrs = format!(
            r#"x="{}" y="{}" font-size="{}" font-family="{family}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="{}""#,
            num(at.x),
            num(at.y),
            num(style.size),
            style.color.to_hex()
        );
        if style.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if style.italic {
            attrs.push_str(r#" font-style="italic""#);
        }
        if style.rotate != 0.0 {
            let _ = write!(
                attrs,
                r#" transform="rotate({} {} {})""#,
                num(style.rotate),
                num(at.x),
                num(at.y)
            );
        }
        let _ = writeln!(self.body, "<text {attrs}>{}</text>", escape_xml(text));
    }

    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
{}</svg>
"#,
            self.body,
            w = self.width,
            h = self.height
        )
    }

    /// Rasterize and write the canvas as a PNG, returning the written path.
    pub fn write_png(self, path: &Path) -> VizResult<PathBuf> {
        raster::write_svg_png(&self.to_svg(), self.width, self.height, path)?;
        Ok(path.to_path_buf())
    }
}

fn fill_attrs(fill: Rgba8) -> String {
    if fill.a == 255 {
        format!(r#" fill="{}""#, fill.to_hex())
    } else {
        format!(
            r#" fill="{}" fill-opacity="{}""#,
            fill.to_hex(),
            num(fill.opacity())
        )
    }
}

fn point_list(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", num(p.x), num(p.y));
    }
    out
}

/// Coordinates are written with two decimals; non-finite values collapse to 0.
fn num(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.2}")
    } else {
        "0".to_owned()
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
