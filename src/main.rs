mod app;
mod canvas;
mod config;
mod envelope;
mod export;
mod raster;
mod types;
mod util;

use app::MmlEnvApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 540.0])
            .with_min_inner_size([860.0, 460.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mmlenv — MML Envelope Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(MmlEnvApp::new(&cc.egui_ctx)))),
    )
}
