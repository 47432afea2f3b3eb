//! Orthographic projection of the normalized data cube for the 3D charts.

use kurbo::{Point, Vec2};

/// A camera orientation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View3d {
    /// Elevation above the x-y plane.
    pub elev: f64,
    /// Azimuth around the z axis.
    pub azim: f64,
}

impl View3d {
    /// A view from `(elev, azim)` degrees.
    pub const fn new(elev: f64, azim: f64) -> Self {
        Self { elev, azim }
    }
}

/// The fixed camera sweep of the 3D charts; view `i` is written to `<stem>_<i+1>`.
pub const CAMERA_VIEWS: [View3d; 5] = [
    View3d::new(30.0, 45.0),
    View3d::new(45.0, -45.0),
    View3d::new(45.0, 135.0),
    View3d::new(30.0, 30.0),
    View3d::new(30.0, 60.0),
];

/// Maps points of the cube `[-1, 1]^3` to screen space for one view.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projector {
    right: [f64; 3],
    up: [f64; 3],
    eye: [f64; 3],
    center: Point,
    scale: f64,
}

impl Projector {
    /// Project around `center`, with a cube half-extent of `scale` pixels.
    pub fn new(view: View3d, center: Point, scale: f64) -> Self {
        let (se, ce) = view.elev.to_radians().sin_cos();
        let (sa, ca) = view.azim.to_radians().sin_cos();
        Self {
            right: [-sa, ca, 0.0],
            up: [-se * ca, -se * sa, ce],
            eye: [ce * ca, ce * sa, se],
            center,
            scale,
        }
    }

    /// Screen position of a cube point; screen y grows downwards.
    pub fn project(&self, p: [f64; 3]) -> Point {
        let x = dot(self.right, p);
        let y = dot(self.up, p);
        self.center + Vec2::new(x * self.scale, -y * self.scale)
    }

    /// Distance towards the viewer; larger is nearer.
    pub fn depth(&self, p: [f64; 3]) -> f64 {
        dot(self.eye, p)
    }

    /// Direction towards the viewer.
    pub fn eye(&self) -> [f64; 3] {
        self.eye
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Map `v` from `[lo, hi]` to `[-1, 1]`; a zero-width range maps to the middle.
pub(crate) fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.abs() > f64::EPSILON {
        2.0 * (v - lo) / span - 1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/projection.rs"]
mod tests;
