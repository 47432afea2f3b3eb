//! 3D scatter charts, drawn once per camera view.

use std::path::{Path, PathBuf};

use kurbo::{Point, Rect, Vec2};

use crate::{
    charts::{headroom, new_canvas, per_axis_bounds},
    data::{dataset::Dataset, summary::Summary},
    foundation::{
        core::{FigureSize, Rgba8, suffixed_path},
        error::VizResult,
    },
    render::{
        axes::{colorbar, draw_titles},
        projection::{CAMERA_VIEWS, Projector, View3d, normalize},
        scene::{Baseline, FigureCanvas, Stroke, TextStyle, objective_label},
    },
    scale::{
        bounds::AxisBounds,
        sizer::fit_figure_size,
        ticks::{TickSet, locate_ticks},
    },
    style::{colormap::Colormap, config::ScatterOptions, resolve::ResolvedStyle},
};

const PANE: Rgba8 = Rgba8::opaque(242, 242, 242);
/// Cube half-extent as a fraction of the smaller half-dimension of the plot region.
const CUBE_SCALE: f64 = 1.0 / 2.4;
const COLORBAR_RESERVE: f64 = 0.18;

/// One point of a 3D chart.
#[derive(Clone, Copy, Debug)]
pub(super) struct Marker {
    pub pos: [f64; 3],
    pub radius: f64,
    pub color: Rgba8,
}

/// Colour scale legend drawn right of the cube.
#[derive(Clone, Debug)]
pub(super) struct ColorLegend {
    pub cmap: Colormap,
    pub range: (f64, f64),
    pub label: String,
}

/// Scene content shared by every view of one chart.
pub(super) struct CubeScene<'a> {
    pub bounds: &'a AxisBounds,
    pub markers: Vec<Marker>,
    pub legend: Option<ColorLegend>,
}

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
        3,
    )?;
    let size = fit_figure_size(style.figure_size, &bounds.label_values());

    let radius = style.marker_radius(style.scatter_size);
    let markers = data
        .rows()
        .map(|row| Marker {
            pos: [row[0], row[1], row[2]],
            radius,
            color: Rgba8::TAB_BLUE,
        })
        .collect();

    let scene = CubeScene {
        bounds: &bounds,
        markers,
        legend: None,
    };
    render_sweep(&scene, style, size, output)
}

/// Write one file per camera view: `<stem>_1` to `<stem>_5`.
pub(super) fn render_sweep(
    scene: &CubeScene<'_>,
    style: &ResolvedStyle,
    size: FigureSize,
    output: &Path,
) -> VizResult<Vec<PathBuf>> {
    let ticks: [TickSet; 3] = std::array::from_fn(|a| {
        let (lo, hi) = scene.bounds.axis(a);
        locate_ticks(lo, hi)
    });

    let mut written = Vec::with_capacity(CAMERA_VIEWS.len());
    for (i, view) in CAMERA_VIEWS.into_iter().enumerate() {
        let mut canvas = new_canvas(style, size)?;
        draw_view(&mut canvas, scene, &ticks, style, view);
        let path = suffixed_path(output, i + 1);
        tracing::debug!(elev = view.elev, azim = view.azim, path = %path.display(), "camera view");
        written.push(canvas.write_png(&path)?);
    }
    Ok(written)
}

fn draw_view(
    canvas: &mut FigureCanvas,
    scene: &CubeScene<'_>,
    ticks: &[TickSet; 3],
    style: &ResolvedStyle,
    view: View3d,
) {
    let top = draw_titles(canvas, style, 1.0, 1.0);
    let reserve = if scene.legend.is_some() {
        canvas.width() * COLORBAR_RESERVE
    } else {
        0.0
    };
    let region = Rect::new(0.0, top, canvas.width() - reserve, canvas.height());
    let half = region.width().min(region.height()) / 2.0;
    let proj = Projector::new(view, region.center(), half * CUBE_SCALE);

    let lims: [(f64, f64); 3] = std::array::from_fn(|a| headroom(scene.bounds.axis(a)));
    let eye = proj.eye();
    // Back panes sit on the side facing away from the camera.
    let back: [f64; 3] = std::array::from_fn(|a| if eye[a] > 0.0 { -1.0 } else { 1.0 });

    let grid = Stroke::dashed(Rgba8::BLACK, style.px(style.major_grid_line_width));
    for a in 0..3 {
        let (b, c) = ((a + 1) % 3, (a + 2) % 3);
        let corner = |u: f64, v: f64| {
            let mut p = [0.0; 3];
            p[a] = back[a];
            p[b] = u;
            p[c] = v;
            proj.project(p)
        };
        let pane = [
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ];
        canvas.fill_polygon(&pane, PANE);

        for t in ticks[b].iter().filter(|&t| within(t, lims[b])) {
            let u = normalize(t, lims[b].0, lims[b].1);
            canvas.line(corner(u, -1.0), corner(u, 1.0), &grid);
        }
        for t in ticks[c].iter().filter(|&t| within(t, lims[c])) {
            let v = normalize(t, lims[c].0, lims[c].1);
            canvas.line(corner(-1.0, v), corner(1.0, v), &grid);
        }
    }

    let mut order: Vec<&Marker> = scene.markers.iter().collect();
    let cube = |m: &Marker| -> [f64; 3] {
        std::array::from_fn(|a| normalize(m.pos[a], lims[a].0, lims[a].1))
    };
    order.sort_by(|l, r| proj.depth(cube(*l)).total_cmp(&proj.depth(cube(*r))));
    for m in order {
        canvas.circle(proj.project(cube(m)), m.radius, m.color);
    }

    draw_axes(canvas, &proj, ticks, &lims, back, style);

    if let Some(legend) = &scene.legend {
        let x0 = canvas.width() - reserve + canvas.width() * 0.03;
        let bar = Rect::new(
            x0,
            region.y0 + region.height() * 0.2,
            x0 + canvas.width() * 0.03,
            region.y0 + region.height() * 0.8,
        );
        let (lo, hi) = legend.range;
        let marks: Vec<(f64, String)> = (0..10)
            .map(|i| {
                let v = lo + (hi - lo) * i as f64 / 9.0;
                (v, format!("{v:.2}"))
            })
            .collect();
        let text = TextStyle::new(style.px(style.label_size * 0.75));
        colorbar(canvas, bar, legend.cmap, legend.range, &marks, &text);
        canvas.text(
            Point::new(bar.center().x, bar.y0 - style.px(style.label_pad * 0.5)),
            &legend.label,
            &TextStyle::new(style.px(style.label_size)).baseline(Baseline::Bottom),
        );
    }
}

/// Tick labels and axis titles on one visible edge per axis.
fn draw_axes(
    canvas: &mut FigureCanvas,
    proj: &Projector,
    ticks: &[TickSet; 3],
    lims: &[(f64, f64); 3],
    back: [f64; 3],
    style: &ResolvedStyle,
) {
    let front = back.map(|s| -s);
    // z runs along whichever vertical edge is leftmost on screen.
    let z_edge = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
        .into_iter()
        .min_by(|l, r| {
            let lx = proj.project([l.0, l.1, 0.0]).x;
            let rx = proj.project([r.0, r.1, 0.0]).x;
            lx.total_cmp(&rx)
        })
        .unwrap_or((-1.0, -1.0));

    let edges: [[f64; 3]; 3] = [
        [0.0, front[1], back[2]],
        [front[0], 0.0, back[2]],
        [z_edge.0, z_edge.1, 0.0],
    ];

    let center = proj.project([0.0; 3]);
    let ticks_px = style.px(style.ticks_size);
    let tick_gap = style.px(style.ticks_pad) + ticks_px * 0.8;
    let tick_text = TextStyle::new(ticks_px);
    let label_text = TextStyle::new(style.px(style.label_size));
    let axis_line = Stroke::solid(Rgba8::BLACK, style.px(style.minor_grid_line_width));

    for a in 0..3 {
        let at = |v: f64| {
            let mut p = edges[a];
            p[a] = v;
            proj.project(p)
        };
        canvas.line(at(-1.0), at(1.0), &axis_line);

        let mid = at(0.0);
        let out = outward(mid - center);
        for (t, label) in ticks[a].iter().zip(ticks[a].labels()) {
            if !within(t, lims[a]) {
                continue;
            }
            let p = at(normalize(t, lims[a].0, lims[a].1));
            canvas.text(p + out * tick_gap, &label, &tick_text);
        }

        let label_at = mid + out * (tick_gap + ticks_px * 1.5 + style.px(style.label_pad));
        canvas.text(label_at, &objective_label(a + 1), &label_text);
    }
}

fn outward(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > f64::EPSILON {
        v / len
    } else {
        Vec2::new(0.0, 1.0)
    }
}

fn within(v: f64, (lo, hi): (f64, f64)) -> bool {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    v >= lo - 1e-9 && v <= hi + 1e-9
}
