//! Left panel: model file picker and status.

use eframe::egui;

use crate::app::DetectorApp;

pub fn draw_sidebar(ctx: &egui::Context, app: &mut DetectorApp) {
    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.heading("PHISHING DETECTOR");
                ui.label("v0.1.0");
                ui.separator();

                // Model file picker
                ui.label("MODEL");
                if ui.button("Select Model...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("ONNX Model", &["onnx"])
                        .pick_file()
                    {
                        app.load_model(path);
                    }
                }
                if let Some(p) = &app.model_path {
                    ui.small(
                        p.file_name()
                            .map(|f| f.to_string_lossy().to_string())
                            .unwrap_or_else(|| "?".into()),
                    );
                }

                match (&app.model_error, app.model_ready()) {
                    (Some(err), _) => {
                        ui.colored_label(super::theme::COLOR_WARNING, err);
                    }
                    (None, true) => {
                        ui.colored_label(super::theme::COLOR_SAFE, "Model loaded");
                    }
                    (None, false) => {
                        ui.small("No model loaded");
                    }
                }

                ui.add_space(4.0);
                ui.separator();

                ui.label("ABOUT");
                ui.small(
                    "Classifies a URL as safe or phishing with a pre-trained \
                     model over 30 heuristic signals. Only lexical signals are \
                     computed; no page is fetched.",
                );
            });
        });
}
