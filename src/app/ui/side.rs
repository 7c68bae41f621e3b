//! Side panel: waveform selector, curve period, tone MML readout.

use super::super::MmlEnvApp;
use crate::types::Waveform;
use egui::RichText;

impl MmlEnvApp {
    pub(crate) fn ui_side(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        egui::ComboBox::from_label("Waveform")
            .selected_text(self.waveform.label())
            .show_ui(ui, |ui| {
                for wf in Waveform::ALL {
                    ui.selectable_value(&mut self.waveform, wf, wf.label());
                }
            });

        ui.separator();

        // The slider's inline value is the label mirroring the period.
        let response = ui.add(egui::Slider::new(&mut self.period, 0..=100).text("period"));
        if response.changed() {
            let period = self.period_f();
            self.canvas.rebuild(period, self.envelope.points());
        }

        ui.separator();
        self.ui_tone_panel(ui);
    }

    fn ui_tone_panel(&self, ui: &mut egui::Ui) {
        ui.label("Tone MML");
        let tone = self.tone_text();
        if tone.is_empty() {
            ui.label("(none)");
        } else {
            ui.label(RichText::new(tone).monospace());
        }
    }
}
