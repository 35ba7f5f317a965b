//! Application state and analysis management.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use detector_core::analyze::{analyze_url, validate_url};
use detector_core::inference::PhishingModel;
use detector_core::report::UrlReport;

/// Application state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeState {
    Idle,
    Analyzing,
    Complete,
}

pub struct DetectorApp {
    // Model, loaded once and reused read-only
    pub model_path: Option<PathBuf>,
    pub model: Option<Arc<PhishingModel>>,
    pub model_error: Option<String>,

    // Request state
    pub url_input: String,
    pub state: AnalyzeState,
    pub report: Option<UrlReport>,
    pub warning: Option<String>,
    pub error_message: Option<String>,

    // Communication
    result_rx: Option<mpsc::Receiver<AnalyzeOutcome>>,
}

enum AnalyzeOutcome {
    Success(UrlReport),
    Error(String),
}

impl DetectorApp {
    pub fn new() -> Self {
        Self {
            model_path: None,
            model: None,
            model_error: None,
            url_input: String::new(),
            state: AnalyzeState::Idle,
            report: None,
            warning: None,
            error_message: None,
            result_rx: None,
        }
    }

    /// Load (or replace) the model artifact. Failure keeps analysis disabled
    /// until a loadable artifact is selected.
    pub fn load_model(&mut self, path: PathBuf) {
        match PhishingModel::load(&path) {
            Ok(model) => {
                self.model = Some(Arc::new(model));
                self.model_error = None;
            }
            Err(e) => {
                self.model = None;
                self.model_error = Some(format!("{e:#}"));
            }
        }
        self.model_path = Some(path);
    }

    pub fn model_ready(&self) -> bool {
        self.model.is_some()
    }

    pub fn start_analysis(&mut self) {
        self.warning = None;
        self.error_message = None;

        let Some(model) = self.model.clone() else {
            self.warning = Some("No model loaded".into());
            return;
        };
        // Validate here so the user gets the specific message before any
        // extraction is attempted.
        if let Err(e) = validate_url(&self.url_input) {
            self.warning = Some(e.to_string());
            return;
        }

        self.report = None;
        self.state = AnalyzeState::Analyzing;

        let url = self.url_input.clone();
        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        std::thread::spawn(move || match analyze_url(&model, &url) {
            Ok(report) => {
                let _ = tx.send(AnalyzeOutcome::Success(report));
            }
            Err(e) => {
                let _ = tx.send(AnalyzeOutcome::Error(format!("{e:#}")));
            }
        });
    }

    /// Poll for completion — called each frame.
    pub fn poll(&mut self) {
        if let Some(rx) = &self.result_rx {
            if let Ok(outcome) = rx.try_recv() {
                match outcome {
                    AnalyzeOutcome::Success(report) => {
                        self.report = Some(report);
                        self.state = AnalyzeState::Complete;
                    }
                    AnalyzeOutcome::Error(msg) => {
                        self.error_message = Some(msg);
                        self.state = AnalyzeState::Idle;
                    }
                }
                self.result_rx = None;
            }
        }
    }
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        // Request repaint while analyzing for spinner updates
        if self.state == AnalyzeState::Analyzing {
            ctx.request_repaint();
        }

        crate::ui::sidebar::draw_sidebar(ctx, self);
        crate::ui::analyze_view::draw_analyze_view(ctx, self);
    }
}
