use std::path::Path;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::foundation::{
    core::ensure_parent_dir,
    error::{VizError, VizResult},
};

/// System fonts, loaded on first use and shared by every chart.
fn fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Parse an SVG document into a render tree.
pub(crate) fn parse_svg(svg: &str) -> VizResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse chart scene")?;
    Ok(tree)
}

/// Rasterize an SVG document into straight RGBA8 pixels of `width` x `height`.
pub(crate) fn rasterize_svg(svg: &str, width: u32, height: u32) -> VizResult<image::RgbaImage> {
    let tree = parse_svg(svg)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| VizError::render(format!("failed to allocate {width}x{height} pixmap")))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| VizError::render("pixmap size does not match the canvas"))
}

/// Rasterize an SVG document and write it as a PNG file.
pub(crate) fn write_svg_png(svg: &str, width: u32, height: u32, path: &Path) -> VizResult<()> {
    let img = rasterize_svg(svg, width, height)?;
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), width, height, "wrote chart");
    Ok(())
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
