use std::str::FromStr;

use crate::foundation::{
    core::Rgba8,
    error::{VizError, VizResult},
};

/// Continuous colour scales used by the heatmap and bubble charts.
///
/// Configuration files accept the same names as [`str::parse`], in any case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Colormap {
    /// White to dark blue; the heatmap scale.
    Blues,
    /// White to black.
    Greys,
    /// Perceptually uniform purple-green-yellow.
    Viridis,
    /// Red through yellow, green, cyan, blue to magenta.
    GistRainbow,
    /// Reversed [`Colormap::GistRainbow`]; the bubble chart scale.
    GistRainbowR,
}

const BLUES: &[(f64, Rgba8)] = &[
    (0.0, Rgba8::opaque(0xf7, 0xfb, 0xff)),
    (0.125, Rgba8::opaque(0xde, 0xeb, 0xf7)),
    (0.25, Rgba8::opaque(0xc6, 0xdb, 0xef)),
    (0.375, Rgba8::opaque(0x9e, 0xca, 0xe1)),
    (0.5, Rgba8::opaque(0x6b, 0xae, 0xd6)),
    (0.625, Rgba8::opaque(0x42, 0x92, 0xc6)),
    (0.75, Rgba8::opaque(0x21, 0x71, 0xb5)),
    (0.875, Rgba8::opaque(0x08, 0x51, 0x9c)),
    (1.0, Rgba8::opaque(0x08, 0x30, 0x6b)),
];

const GREYS: &[(f64, Rgba8)] = &[(0.0, Rgba8::WHITE), (1.0, Rgba8::BLACK)];

const VIRIDIS: &[(f64, Rgba8)] = &[
    (0.0, Rgba8::opaque(0x44, 0x01, 0x54)),
    (0.111, Rgba8::opaque(0x48, 0x28, 0x78)),
    (0.222, Rgba8::opaque(0x3e, 0x49, 0x89)),
    (0.333, Rgba8::opaque(0x31, 0x68, 0x8e)),
    (0.444, Rgba8::opaque(0x26, 0x82, 0x8e)),
    (0.556, Rgba8::opaque(0x1f, 0x9e, 0x89)),
    (0.667, Rgba8::opaque(0x35, 0xb7, 0x79)),
    (0.778, Rgba8::opaque(0x6e, 0xce, 0x58)),
    (0.889, Rgba8::opaque(0xb5, 0xde, 0x2b)),
    (1.0, Rgba8::opaque(0xfd, 0xe7, 0x25)),
];

const GIST_RAINBOW: &[(f64, Rgba8)] = &[
    (0.0, Rgba8::opaque(255, 0, 41)),
    (0.03, Rgba8::opaque(255, 0, 0)),
    (0.215, Rgba8::opaque(255, 255, 0)),
    (0.4, Rgba8::opaque(0, 255, 0)),
    (0.586, Rgba8::opaque(0, 255, 255)),
    (0.77, Rgba8::opaque(0, 0, 255)),
    (0.954, Rgba8::opaque(255, 0, 255)),
    (1.0, Rgba8::opaque(255, 0, 191)),
];

impl Colormap {
    fn stops(self) -> &'static [(f64, Rgba8)] {
        match self {
            Self::Blues => BLUES,
            Self::Greys => GREYS,
            Self::Viridis => VIRIDIS,
            Self::GistRainbow | Self::GistRainbowR => GIST_RAINBOW,
        }
    }

    /// Colour at position `t` in `[0, 1]` (clamped; NaN maps to the low end).
    pub fn sample(self, t: f64) -> Rgba8 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = match self {
            Self::GistRainbowR => 1.0 - t,
            _ => t,
        };

        let stops = self.stops();
        for pair in stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let local = if span > 0.0 { (t - p0) / span } else { 0.0 };
                return c0.lerp(c1, local);
            }
        }
        stops[stops.len() - 1].1
    }

    /// Colour of `value` on a `[lo, hi]` scale; a zero-width scale maps to the low end.
    pub fn sample_scaled(self, value: f64, lo: f64, hi: f64) -> Rgba8 {
        let span = hi - lo;
        let t = if span.abs() > f64::EPSILON {
            (value - lo) / span
        } else {
            0.0
        };
        self.sample(t)
    }
}

impl FromStr for Colormap {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmap = match s.trim().to_ascii_lowercase().as_str() {
            "blues" => Self::Blues,
            "greys" | "grays" => Self::Greys,
            "viridis" => Self::Viridis,
            "gist_rainbow" => Self::GistRainbow,
            "gist_rainbow_r" => Self::GistRainbowR,
            _ => return Err(VizError::validation(format!("unknown colormap '{s}'"))),
        };
        Ok(cmap)
    }
}

impl TryFrom<String> for Colormap {
    type Error = VizError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// How bubble chart points are coloured.
///
/// In configuration files a string selects a fixed colour and an integer selects a
/// zero-based data column.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub enum ColorSpec {
    /// One colour for every point.
    Fixed(Rgba8),
    /// Colour each point by the value in this column, through the colormap.
    Column(usize),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Column(usize),
    Name(String),
}

impl TryFrom<ColorRepr> for ColorSpec {
    type Error = VizError;

    fn try_from(repr: ColorRepr) -> VizResult<Self> {
        match repr {
            ColorRepr::Column(c) => Ok(Self::Column(c)),
            ColorRepr::Name(name) => Rgba8::parse(&name).map(Self::Fixed),
        }
    }
}

impl From<ColorSpec> for ColorRepr {
    fn from(spec: ColorSpec) -> Self {
        match spec {
            ColorSpec::Fixed(c) => Self::Name(c.to_hex()),
            ColorSpec::Column(c) => Self::Column(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/colormap.rs"]
mod tests;
