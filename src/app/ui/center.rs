//! Central canvas: texture display plus pointer-event synthesis.
//!
//! The interaction state machine consumes discrete pointer events, so this
//! glue diffs egui's per-frame pointer state (hover, primary button, rect
//! entry/exit) into Enter/Move/Down/Up/Leave samples in canvas coordinates.
//! egui keeps reporting drag positions while the primary button is held, even
//! outside the widget rect, which supplies the pointer-capture behavior.

use super::super::MmlEnvApp;
use crate::canvas::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::envelope::{PointerKind, PointerSample};
use crate::util::safe_usize_to_f32;
use egui::{PointerButton, Sense, pos2};

impl MmlEnvApp {
    pub(crate) fn ui_central_canvas(&mut self, ui: &mut egui::Ui) {
        let scale = self.config.display_scale_factor();
        let base = egui::vec2(
            safe_usize_to_f32(CANVAS_WIDTH),
            safe_usize_to_f32(CANVAS_HEIGHT),
        );
        let image = egui::Image::new((self.canvas.texture().id(), base * scale));
        let response = ui.add(image.sense(Sense::click_and_drag()));
        let rect = response.rect;

        let to_canvas =
            |pos: egui::Pos2| pos2((pos.x - rect.min.x) / scale, (pos.y - rect.min.y) / scale);

        let primary_down = ui
            .ctx()
            .input(|i| i.pointer.button_down(PointerButton::Primary));
        let over = response.hovered();
        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
            .map(to_canvas);

        // Only the primary button feeds the machine; secondary/middle input
        // produces no samples at all.
        let mut events: Vec<PointerSample> = Vec::new();
        let sample = |kind, pos| PointerSample {
            kind,
            primary: true,
            pos,
        };
        if let Some(pos) = pointer_pos {
            if over && !self.pointer_was_over {
                events.push(sample(PointerKind::Enter, pos));
            }
            events.push(sample(PointerKind::Move, pos));
            if primary_down && !self.primary_was_down && over {
                events.push(sample(PointerKind::Down, pos));
            }
            self.last_pointer = pos;
        }
        if !primary_down && self.primary_was_down && (over || self.envelope.is_dragging()) {
            events.push(sample(
                PointerKind::Up,
                pointer_pos.unwrap_or(self.last_pointer),
            ));
        }
        if !over && self.pointer_was_over {
            events.push(sample(
                PointerKind::Leave,
                pointer_pos.unwrap_or(self.last_pointer),
            ));
        }
        self.pointer_was_over = over;
        self.primary_was_down = primary_down;

        let mut cursor = None;
        let mut redraw_overlay = false;
        for ev in events {
            let fx = self.envelope.handle_pointer(ev);
            if fx.cursor.is_some() {
                cursor = fx.cursor;
            }
            redraw_overlay |= fx.redraw_overlay;
        }

        if redraw_overlay {
            let period = self.period_f();
            self.canvas.redraw_overlay(period, self.envelope.points());
        }
        if let Some(icon) = cursor {
            ui.ctx().set_cursor_icon(icon);
        }
    }
}
