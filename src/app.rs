//! Main egui/eframe application state and UI orchestration.

use crate::canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, EnvelopeCanvas, GRID_SIZE};
use crate::config::AppConfig;
use crate::envelope::EnvelopeState;
use crate::export;
use crate::types::Waveform;
use crate::util::safe_usize_to_f32;
use egui::Context;
use egui_file_dialog::{DialogState, FileDialog};
use std::path::PathBuf;

mod clipboard;
mod ui;

/// Tone volume/width prelude shown around the waveform code in the MML panel.
const TONE_PRELUDE: &str = "@V100";
const TONE_TAIL: &str = "@W50 @E1,0,60,30,1 @E2,0,30,0,127";

pub struct MmlEnvApp {
    config: AppConfig,
    canvas: EnvelopeCanvas,
    envelope: EnvelopeState,
    waveform: Waveform,
    period: u16,
    // Previous-frame pointer facts, used to synthesize enter/leave/down/up.
    pointer_was_over: bool,
    primary_was_down: bool,
    last_pointer: egui::Pos2,
    save_dialog: Option<FileDialog>,
    last_export_dir: Option<PathBuf>,
    last_status: Option<String>,
}

impl MmlEnvApp {
    pub fn new(ctx: &Context) -> Self {
        let config = AppConfig::load();
        let canvas = EnvelopeCanvas::new(
            ctx,
            config.curve_accent.color32(),
            config.polyline_accent.color32(),
        );
        let envelope = EnvelopeState::new(
            safe_usize_to_f32(CANVAS_WIDTH),
            safe_usize_to_f32(CANVAS_HEIGHT),
            GRID_SIZE,
        );
        Self {
            config,
            canvas,
            envelope,
            waveform: Waveform::Pulse,
            period: 1,
            pointer_was_over: false,
            primary_was_down: false,
            last_pointer: egui::Pos2::ZERO,
            save_dialog: None,
            last_export_dir: None,
            last_status: None,
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.last_status = Some(text.into());
    }

    /// The tone definition shown in the panel and copied to the clipboard.
    fn tone_text(&self) -> String {
        format!("{TONE_PRELUDE} {}{TONE_TAIL}", self.waveform.code())
    }

    fn period_f(&self) -> f32 {
        f32::from(self.period)
    }

    /// Re-resolve the theme foreground and rebuild the canvas when the
    /// background (grid + curve + colors) went stale. Covers the first frame
    /// and every dark/light switch.
    fn sync_canvas(&mut self, ctx: &Context) {
        let fg = ctx.style().visuals.text_color();
        self.canvas.set_foreground(fg);
        if !self.canvas.background_valid() {
            let period = self.period_f();
            self.canvas.rebuild(period, self.envelope.points());
        }
    }

    fn start_export_dialog(&mut self) {
        let mut dialog = FileDialog::new()
            .title("Export PNG")
            .default_file_name(&export::default_file_name())
            .add_save_extension("*.png", "png")
            .default_save_extension("*.png");
        if let Some(dir) = self.last_export_dir.as_deref() {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog.save_file();
        self.save_dialog = Some(dialog);
    }

    fn poll_export_dialog(&mut self, ctx: &Context) {
        let mut close_dialog = false;
        if let Some(dialog) = self.save_dialog.as_mut() {
            dialog.update(ctx);
            if let Some(path) = dialog.take_picked() {
                match export::export_to_png(&path, self.canvas.pixels()) {
                    Ok(()) => self.set_status(format!("PNG saved to {}", path.display())),
                    Err(e) => self.set_status(format!("PNG export failed: {e}")),
                }
                self.last_export_dir = path.parent().map(PathBuf::from);
                close_dialog = true;
            } else {
                match dialog.state() {
                    DialogState::Cancelled => {
                        self.set_status("Export canceled.");
                        close_dialog = true;
                    }
                    DialogState::Closed => close_dialog = true,
                    _ => {}
                }
            }
        }
        if close_dialog {
            self.save_dialog = None;
        }
    }
}

impl eframe::App for MmlEnvApp {
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.sync_canvas(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::SidePanel::right("side")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.ui_side(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central_canvas(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.last_status.as_deref().unwrap_or(""));
        });

        self.poll_export_dialog(ctx);
    }
}
