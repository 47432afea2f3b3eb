//! Looping GIF animation of rendered charts.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{
    Delay, Frame, RgbaImage,
    codecs::gif::{GifEncoder, Repeat},
};

use crate::{
    charts::render_chart_from_file,
    foundation::{
        core::{Rgba8, ensure_parent_dir},
        error::{VizError, VizResult},
    },
    style::config::{ChartConfig, ChartKind, ChartOverrides},
};

/// Output used when no animation file is named.
pub const DEFAULT_ANIMATION_FILE: &str = "animation.gif";
/// Time each frame stays on screen.
pub const FRAME_INTERVAL_MS: u32 = 500;

/// Palette quantization speed: 1 is slowest and best, 30 fastest.
const GIF_SPEED: i32 = 10;

/// Collects rendered chart images and writes them as one looping animation.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
}

impl Animator {
    /// An animator with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// An animator over existing image files, in frame order.
    pub fn with_files(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            output: None,
        }
    }

    /// Frame images in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Replace the frame list.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        self.files = files;
    }

    /// Where [`Animator::animate`] writes when no path is passed.
    pub fn output_file(&self) -> &Path {
        self.output
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_ANIMATION_FILE))
    }

    /// Set the default output file.
    pub fn set_output_file(&mut self, path: impl Into<PathBuf>) {
        self.output = Some(path.into());
    }

    /// Render one chart of `chart_kind` per input and use the written images as frames.
    ///
    /// Input number `k` (1-based) is written to `<input>_<k>.png`; camera-sweep charts
    /// contribute all five views. An unknown chart kind is logged and nothing is
    /// rendered. Returns the number of frames collected.
    #[tracing::instrument(skip(self, inputs, overrides), fields(inputs = inputs.len()))]
    pub fn plot_to_animate(
        &mut self,
        inputs: &[PathBuf],
        overrides: &ChartOverrides,
        chart_kind: &str,
    ) -> VizResult<usize> {
        self.files.clear();
        let kind = match chart_kind.parse::<ChartKind>() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::error!(%err, "skipping animation request");
                return Ok(0);
            }
        };

        let config = ChartConfig::from_overrides(kind, overrides);
        for (k, input) in inputs.iter().enumerate() {
            let output = PathBuf::from(format!("{}_{}.png", input.display(), k + 1));
            let written = render_chart_from_file(&config, input, &output)?;
            self.files.extend(written);
        }
        Ok(self.files.len())
    }

    /// Write every frame into a looping GIF, `FRAME_INTERVAL_MS` apart.
    ///
    /// Frames are drawn onto a white canvas the size of the first frame. Fails when
    /// there are no frames or a frame cannot be decoded. Returns the written path.
    #[tracing::instrument(skip(self), fields(frames = self.files.len()))]
    pub fn animate(&self, output: Option<&Path>) -> VizResult<PathBuf> {
        let output = output.unwrap_or_else(|| self.output_file()).to_path_buf();
        let Some(first) = self.files.first() else {
            return Err(VizError::animation("no frames to animate"));
        };

        let first = load_frame(first)?;
        let (width, height) = first.dimensions();

        ensure_parent_dir(&output)?;
        let file = std::fs::File::create(&output)
            .with_context(|| format!("create animation '{}'", output.display()))?;
        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| VizError::animation(format!("configure gif: {e}")))?;

        let delay = Delay::from_numer_denom_ms(FRAME_INTERVAL_MS, 1);
        for (i, path) in self.files.iter().enumerate() {
            let image = if i == 0 {
                first.clone()
            } else {
                load_frame(path)?
            };
            let canvas = fit_to_canvas(&image, width, height);
            encoder
                .encode_frame(Frame::from_parts(canvas, 0, 0, delay))
                .map_err(|e| {
                    VizError::animation(format!("encode frame '{}': {e}", path.display()))
                })?;
        }

        tracing::info!(path = %output.display(), width, height, "wrote animation");
        Ok(output)
    }
}

fn load_frame(path: &Path) -> VizResult<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| VizError::animation(format!("decode frame '{}': {e}", path.display())))?;
    Ok(img.to_rgba8())
}

/// `image` drawn at the top-left of a white `width` x `height` canvas, cropped to it.
fn fit_to_canvas(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let Rgba8 { r, g, b, a } = Rgba8::WHITE;
    let mut canvas = RgbaImage::from_pixel(width, height, image::Rgba([r, g, b, a]));
    image::imageops::overlay(&mut canvas, image, 0, 0);
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/animate/gif.rs"]
mod tests;
