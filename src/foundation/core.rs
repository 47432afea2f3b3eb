use std::path::{Path, PathBuf};

use crate::foundation::error::{VizError, VizResult};

/// Figure dimensions in figure units (the unit of `figure_size`, scaled to pixels by `dpi`).
///
/// Serialized as a `[width, height]` pair.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct FigureSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl FigureSize {
    /// Build a size from a `(width, height)` pair.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions of this figure at `dpi` pixels per figure unit.
    pub fn to_pixels(self, dpi: f64) -> VizResult<(u32, u32)> {
        fn px(v: f64) -> VizResult<u32> {
            if !v.is_finite() || v < 1.0 {
                return Err(VizError::render(format!("invalid canvas extent {v}")));
            }
            Ok(v.round() as u32)
        }

        let w = px(self.width * dpi)?;
        let h = px(self.height * dpi)?;

        // Avoid pathological allocations from a runaway figure size.
        const MAX_DIM: u32 = 16_384;
        if w > MAX_DIM || h > MAX_DIM {
            return Err(VizError::render(format!(
                "canvas too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }
        Ok((w, h))
    }
}

impl From<(f64, f64)> for FigureSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

impl From<FigureSize> for (f64, f64) {
    fn from(size: FigureSize) -> Self {
        (size.width, size.height)
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// `black`.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// `white`.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// `gray`.
    pub const GRAY: Self = Self::opaque(128, 128, 128);
    /// `darkblue`, the scatter and polyline colour.
    pub const DARK_BLUE: Self = Self::opaque(0, 0, 139);
    /// `darkred`, the radar and convergence line colour.
    pub const DARK_RED: Self = Self::opaque(139, 0, 0);
    /// Default 3D scatter colour (`#1f77b4`).
    pub const TAB_BLUE: Self = Self::opaque(31, 119, 180);

    /// An opaque colour.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a colour name (`darkblue`, `black`, ...) or a `#rrggbb` / `#rrggbbaa` hex code.
    pub fn parse(s: &str) -> VizResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| VizError::validation(format!("invalid hex colour '{s}'")));
        }
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            "darkblue" => Self::DARK_BLUE,
            "darkred" => Self::DARK_RED,
            "blue" => Self::opaque(0, 0, 255),
            "red" => Self::opaque(255, 0, 0),
            "green" => Self::opaque(0, 128, 0),
            "orange" => Self::opaque(255, 165, 0),
            "purple" => Self::opaque(128, 0, 128),
            _ => return Err(VizError::validation(format!("unknown colour '{s}'"))),
        };
        Ok(named)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }

    /// SVG paint string (`#rrggbb`); alpha is emitted separately as an opacity.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a `[0, 1]` opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Linear interpolation between two colours, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// File name of `path` without directory and extension; used as the default chart title.
pub fn output_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `out/front.png` + 3 -> `out/front_3.png`, the naming of camera-sweep outputs.
pub fn suffixed_path(path: &Path, index: usize) -> PathBuf {
    let stem = output_stem(path);
    let name = match path.extension() {
        Some(ext) => format!("{stem}_{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index}"),
    };
    path.with_file_name(name)
}

/// Create the parent directory of an output file if needed.
pub(crate) fn ensure_parent_dir(path: &Path) -> VizResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
