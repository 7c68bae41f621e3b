//! PNG export of the rendered canvas.

use anyhow::Context as _;
use chrono::Local;
use egui::ColorImage;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Default file name for the save dialog, date-stamped.
pub fn default_file_name() -> String {
    format!("envelope-{}.png", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Write the canvas pixel buffer to `path` as a PNG.
pub fn export_to_png(path: &Path, pixels: &ColorImage) -> anyhow::Result<()> {
    let [width, height] = pixels.size;
    let width = u32::try_from(width).context("canvas width exceeds u32")?;
    let height = u32::try_from(height).context("canvas height exceeds u32")?;
    let mut out = RgbaImage::new(width, height);
    for (pixel, color) in out.pixels_mut().zip(&pixels.pixels) {
        *pixel = Rgba(color.to_srgba_unmultiplied());
    }
    out.save(path)
        .with_context(|| format!("writing PNG to {}", path.display()))?;
    Ok(())
}
