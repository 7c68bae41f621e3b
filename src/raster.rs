//! Minimal pixel primitives over an [`egui::ColorImage`] buffer.
//!
//! The envelope canvas is a small fixed-size bitmap, so drawing goes straight
//! into the pixel vector; no anti-aliasing, no scene graph.

use crate::util::{safe_usize_to_f32, saturating_f32_to_i32};
use egui::{Color32, ColorImage, Pos2};

/// Fill the whole buffer with one color.
pub fn clear(image: &mut ColorImage, color: Color32) {
    image.pixels.fill(color);
}

/// Set a single pixel; coordinates outside the buffer are ignored.
pub fn put(image: &mut ColorImage, x: i32, y: i32, color: Color32) {
    let [width, height] = image.size;
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x.unsigned_abs() as usize, y.unsigned_abs() as usize);
    if x >= width || y >= height {
        return;
    }
    image.pixels[y * width + x] = color;
}

/// Vertical line spanning the full height, `width` pixels wide, centered on `x`.
pub fn vline(image: &mut ColorImage, x: f32, width: u32, color: Color32) {
    let height = saturating_f32_to_i32(safe_usize_to_f32(image.size[1]));
    let w = i32::try_from(width.max(1)).unwrap_or(1);
    let start = saturating_f32_to_i32(x) - w / 2;
    for col in start..start + w {
        for row in 0..height {
            put(image, col, row, color);
        }
    }
}

/// Horizontal line spanning the full width, `width` pixels wide, centered on `y`.
pub fn hline(image: &mut ColorImage, y: f32, width: u32, color: Color32) {
    let img_width = saturating_f32_to_i32(safe_usize_to_f32(image.size[0]));
    let w = i32::try_from(width.max(1)).unwrap_or(1);
    let start = saturating_f32_to_i32(y) - w / 2;
    for row in start..start + w {
        for col in 0..img_width {
            put(image, col, row, color);
        }
    }
}

/// One-pixel Bresenham segment between two canvas positions.
pub fn segment(image: &mut ColorImage, a: Pos2, b: Pos2, color: Color32) {
    let (mut x0, mut y0) = (saturating_f32_to_i32(a.x), saturating_f32_to_i32(a.y));
    let (x1, y1) = (saturating_f32_to_i32(b.x), saturating_f32_to_i32(b.y));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put(image, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Filled diamond (four-point polygon) with the given half-extent, centered on
/// `center`.
pub fn fill_diamond(image: &mut ColorImage, center: Pos2, half: f32, color: Color32) {
    let cx = saturating_f32_to_i32(center.x);
    let cy = saturating_f32_to_i32(center.y);
    let half = saturating_f32_to_i32(half).max(0);
    for dy in -half..=half {
        let reach = half - dy.abs();
        for dx in -reach..=reach {
            put(image, cx + dx, cy + dy, color);
        }
    }
}
