//! Main panel: URL input, verdict panel, feature detail table.

use eframe::egui;

use detector_core::inference::Verdict;
use detector_core::report::UrlReport;

use crate::app::{AnalyzeState, DetectorApp};
use crate::ui::theme;

pub fn draw_analyze_view(ctx: &egui::Context, app: &mut DetectorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.heading("Phishing URL Detector");
        ui.label("Enter a URL below to check whether it is legitimate or potentially phishing.");
        ui.add_space(8.0);

        // Input row
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut app.url_input)
                .hint_text("https://example.com")
                .desired_width(ui.available_width() - 120.0);
            ui.add(input);

            let can_analyze = app.model_ready() && app.state != AnalyzeState::Analyzing;
            ui.add_enabled_ui(can_analyze, |ui| {
                if ui.button("Analyze URL").clicked() {
                    app.start_analysis();
                }
            });
        });

        if !app.model_ready() {
            ui.colored_label(
                theme::COLOR_WARNING,
                "Select a model file in the sidebar to begin.",
            );
        }

        if let Some(warning) = &app.warning {
            ui.colored_label(theme::COLOR_WARNING, warning);
        }

        if let Some(err) = &app.error_message {
            ui.colored_label(theme::COLOR_WARNING, format!("Error analyzing URL: {err}"));
            ui.small("Please check if the URL is valid and try again.");
        }

        ui.add_space(8.0);

        match app.state {
            AnalyzeState::Idle => {}
            AnalyzeState::Analyzing => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing URL...");
                });
            }
            AnalyzeState::Complete => {
                if let Some(report) = &app.report {
                    draw_result(ui, report);
                }
            }
        }
    });
}

fn draw_result(ui: &mut egui::Ui, report: &UrlReport) {
    let (color, headline) = match report.verdict {
        Some(Verdict::Safe) => (theme::COLOR_SAFE, "This URL appears to be safe"),
        _ => (theme::COLOR_PHISHING, "This URL appears to be phishing"),
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, color))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(color, egui::RichText::new(headline).heading());
                ui.label(format!(
                    "Confidence: {:.2}%",
                    report.confidence.unwrap_or(0.0)
                ));
            });
        });

    ui.add_space(8.0);

    if let Some(features) = &report.features {
        egui::CollapsingHeader::new("Technical Details")
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        egui::Grid::new("feature_grid")
                            .striped(true)
                            .min_col_width(60.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                ui.strong("Feature");
                                ui.strong("Value");
                                ui.end_row();

                                for (name, value) in features.named() {
                                    ui.label(name);
                                    ui.monospace(value.to_string());
                                    ui.end_row();
                                }
                            });
                    });
            });
    }
}
