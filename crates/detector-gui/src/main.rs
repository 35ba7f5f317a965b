//! Phishing URL Detector GUI — eframe/egui desktop application.

mod app;
mod ui;

use app::DetectorApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Phishing URL Detector")
            .with_inner_size([780.0, 560.0])
            .with_min_inner_size([620.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Phishing URL Detector",
        options,
        Box::new(|cc| {
            ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(DetectorApp::new()))
        }),
    )
}
