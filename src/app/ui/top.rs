use super::super::MmlEnvApp;

impl MmlEnvApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // egui's built-in theme toggle; the canvas foreground follows it.
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            if ui
                .button("Copy MML")
                .on_hover_text("Copy the tone definition as plain text")
                .clicked()
            {
                self.copy_tone_text();
            }
            if ui
                .button("Copy as HTML")
                .on_hover_text("Copy the tone definition as an HTML snippet")
                .clicked()
            {
                self.copy_tone_html();
            }
            ui.separator();

            if ui
                .add_enabled(self.save_dialog.is_none(), egui::Button::new("Export PNG…"))
                .on_hover_text("Save the rendered canvas as a PNG")
                .clicked()
            {
                self.start_export_dialog();
            }
        });
    }
}
