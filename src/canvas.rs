//! Software renderer for the envelope canvas.
//!
//! The canvas is a fixed 400×200 `ColorImage` drawn with the primitives in
//! [`crate::raster`] and uploaded to a texture after every change. The static
//! background (grid + reference sine) is cached as a pixel snapshot so drag
//! frames only blit and redraw the overlay (polyline + markers).

use crate::envelope::{ControlPoint, HIT_HALF_EXTENT};
use crate::raster;
use crate::types::ReferenceLine;
use crate::util::safe_usize_to_f32;
use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions, pos2};

pub const CANVAS_WIDTH: usize = 400;
pub const CANVAS_HEIGHT: usize = 200;

/// Gridline spacing: 127 logical amplitude units span half the canvas height,
/// one gridline per 50-unit step.
#[allow(clippy::cast_precision_loss)]
pub const GRID_SIZE: f32 = CANVAS_HEIGHT as f32 / 2.0 * 50.0 / 127.0;

/// Every 4th gridline is emphasized.
const EMPHASIS_STEP: f32 = GRID_SIZE * 4.0;

/// Reference sine: `y = -A·sin((π/79)·period·x) + h/2` with `A = 2·grid`.
pub fn curve_y(x: f32, period: f32) -> f32 {
    let amplitude = GRID_SIZE * 2.0;
    let angular = std::f32::consts::PI / 79.0 * period;
    #[allow(clippy::cast_precision_loss)]
    let half = CANVAS_HEIGHT as f32 / 2.0;
    (-amplitude).mul_add((angular * x).sin(), half)
}

/// Pixel snapshot of the canvas taken after the grid and curve were drawn,
/// before any overlay. Must be recaptured whenever the background changes.
#[derive(Default)]
pub struct BackgroundCache {
    snapshot: Option<ColorImage>,
}

impl BackgroundCache {
    pub const fn is_valid(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    pub fn capture(&mut self, pixels: &ColorImage) {
        self.snapshot = Some(pixels.clone());
    }

    /// Reinstate the captured buffer verbatim. Returns false when nothing was
    /// captured (or the size changed), in which case the caller must rebuild.
    pub fn blit(&self, pixels: &mut ColorImage) -> bool {
        match &self.snapshot {
            Some(saved) if saved.size == pixels.size => {
                pixels.pixels.copy_from_slice(&saved.pixels);
                true
            }
            _ => false,
        }
    }
}

pub struct EnvelopeCanvas {
    pixels: ColorImage,
    texture: TextureHandle,
    cache: BackgroundCache,
    foreground: Color32,
    curve_accent: Color32,
    polyline_accent: Color32,
}

impl EnvelopeCanvas {
    pub fn new(ctx: &Context, curve_accent: Color32, polyline_accent: Color32) -> Self {
        let pixels = ColorImage::new(
            [CANVAS_WIDTH, CANVAS_HEIGHT],
            vec![Color32::TRANSPARENT; CANVAS_WIDTH * CANVAS_HEIGHT],
        );
        let texture = ctx.load_texture("envelope_canvas", pixels.clone(), TextureOptions::NEAREST);
        Self {
            pixels,
            texture,
            cache: BackgroundCache::default(),
            foreground: Color32::GRAY,
            curve_accent,
            polyline_accent,
        }
    }

    pub const fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub const fn pixels(&self) -> &ColorImage {
        &self.pixels
    }

    pub const fn background_valid(&self) -> bool {
        self.cache.is_valid()
    }

    /// Update the theme foreground color; the cached background becomes stale.
    pub fn set_foreground(&mut self, color: Color32) {
        if self.foreground != color {
            self.foreground = color;
            self.cache.invalidate();
        }
    }

    fn width_f(&self) -> f32 {
        safe_usize_to_f32(self.pixels.size[0])
    }

    fn height_f(&self) -> f32 {
        safe_usize_to_f32(self.pixels.size[1])
    }

    /// Gridlines plus the emphasized horizontal reference line.
    pub fn draw_grid(&mut self, reference: ReferenceLine) {
        let (width, height) = (self.width_f(), self.height_f());
        let fg = self.foreground;

        let mut x = GRID_SIZE;
        while x <= width {
            raster::vline(&mut self.pixels, x, 1, fg);
            x += GRID_SIZE;
        }
        let mut x = EMPHASIS_STEP;
        while x <= width {
            raster::vline(&mut self.pixels, x, 2, fg);
            x += EMPHASIS_STEP;
        }

        let mut y = (height / 2.0) % GRID_SIZE;
        while y <= height {
            raster::hline(&mut self.pixels, y, 1, fg);
            y += GRID_SIZE;
        }
        raster::hline(&mut self.pixels, height * reference.fraction(), 2, fg);
    }

    /// Full background repaint: clear, grid, then the reference sine sampled
    /// at every integer x. Invalidates the snapshot; callers recapture once
    /// the background is current again.
    pub fn draw_curve(&mut self, period: f32) {
        self.cache.invalidate();
        raster::clear(&mut self.pixels, Color32::TRANSPARENT);
        self.draw_grid(ReferenceLine::Center);

        let mut prev = pos2(0.0, curve_y(0.0, period));
        let width = self.pixels.size[0];
        for x in 1..width {
            let x = safe_usize_to_f32(x);
            let next = pos2(x, curve_y(x, period));
            raster::segment(&mut self.pixels, prev, next, self.curve_accent);
            prev = next;
        }
    }

    /// Connecting polyline plus a diamond marker on every point. Fixed points
    /// are rendered like any other; they are only exempt from hit-testing.
    pub fn draw_markers(&mut self, points: &[ControlPoint]) {
        for pair in points.windows(2) {
            raster::segment(&mut self.pixels, pair[0].pos, pair[1].pos, self.polyline_accent);
        }
        for point in points {
            raster::fill_diamond(&mut self.pixels, point.pos, HIT_HALF_EXTENT, self.foreground);
        }
    }

    /// Cold-start repaint: background, snapshot, overlay, texture.
    pub fn rebuild(&mut self, period: f32, points: &[ControlPoint]) {
        self.draw_curve(period);
        self.cache.capture(&self.pixels);
        self.draw_markers(points);
        self.refresh_texture();
    }

    /// Drag-frame repaint: blit the cached background and redraw the overlay.
    /// Falls back to a full rebuild if the cache is stale.
    pub fn redraw_overlay(&mut self, period: f32, points: &[ControlPoint]) {
        if self.cache.blit(&mut self.pixels) {
            self.draw_markers(points);
            self.refresh_texture();
        } else {
            self.rebuild(period, points);
        }
    }

    fn refresh_texture(&mut self) {
        self.texture.set(self.pixels.clone(), TextureOptions::NEAREST);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeState;

    fn canvas() -> EnvelopeCanvas {
        let ctx = Context::default();
        EnvelopeCanvas::new(
            &ctx,
            Color32::from_rgb(0, 255, 0),
            Color32::from_rgb(255, 255, 0),
        )
    }

    #[test]
    fn grid_size_maps_amplitude_to_half_height() {
        assert!((GRID_SIZE - 39.370_08).abs() < 1e-4);
    }

    #[test]
    fn curve_starts_on_the_center_line() {
        assert!((curve_y(0.0, 1.0) - 100.0).abs() < 1e-5);
        // Period 0 degenerates to a flat center line.
        assert!((curve_y(123.0, 0.0) - 100.0).abs() < 1e-5);
    }

    #[test]
    fn curve_peaks_at_a_quarter_period() {
        // For period 1 the argument reaches π/2 at x = 39.5.
        let peak = curve_y(39.5, 1.0);
        assert!((peak - (100.0 - 2.0 * GRID_SIZE)).abs() < 1e-4);
        // And returns to the center line at x = 79 (argument π).
        assert!((curve_y(79.0, 1.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn snapshot_roundtrip_restores_exact_pixels() {
        let mut canvas = canvas();
        canvas.set_foreground(Color32::WHITE);
        canvas.draw_curve(1.0);
        let pre_overlay = canvas.pixels().pixels.clone();

        let mut cache = BackgroundCache::default();
        cache.capture(canvas.pixels());

        let state = EnvelopeState::new(400.0, 200.0, GRID_SIZE);
        for _ in 0..3 {
            canvas.draw_markers(state.points());
        }
        assert_ne!(canvas.pixels().pixels, pre_overlay);

        assert!(cache.blit(&mut canvas.pixels));
        assert_eq!(canvas.pixels().pixels, pre_overlay);
    }

    #[test]
    fn blit_fails_without_a_capture() {
        let cache = BackgroundCache::default();
        let mut buffer = ColorImage::new([4, 4], vec![Color32::BLACK; 16]);
        assert!(!cache.is_valid());
        assert!(!cache.blit(&mut buffer));
    }

    #[test]
    fn foreground_change_invalidates_the_background() {
        let mut canvas = canvas();
        canvas.set_foreground(Color32::WHITE);
        let state = EnvelopeState::new(400.0, 200.0, GRID_SIZE);
        canvas.rebuild(1.0, state.points());
        assert!(canvas.background_valid());
        canvas.set_foreground(Color32::BLACK);
        assert!(!canvas.background_valid());
    }

    #[test]
    fn redraw_overlay_rebuilds_when_stale() {
        let mut canvas = canvas();
        canvas.set_foreground(Color32::WHITE);
        let state = EnvelopeState::new(400.0, 200.0, GRID_SIZE);
        // No capture yet: must fall back to a full rebuild.
        canvas.redraw_overlay(1.0, state.points());
        assert!(canvas.background_valid());
    }

    #[test]
    fn rebuild_draws_markers_over_the_background() {
        let mut canvas = canvas();
        canvas.set_foreground(Color32::WHITE);
        let state = EnvelopeState::new(400.0, 200.0, GRID_SIZE);
        canvas.rebuild(1.0, state.points());
        // Marker diamond center of an interior point is foreground-colored.
        let p = state.points()[1].pos;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = (p.y.round() as usize) * CANVAS_WIDTH + p.x.round() as usize;
        assert_eq!(canvas.pixels().pixels[idx], Color32::WHITE);
    }
}
