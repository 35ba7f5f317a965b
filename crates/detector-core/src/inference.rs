//! ONNX model loading and inference via the `ort` crate.
//!
//! The artifact is loaded once and reused read-only across requests. Expected
//! graph interface: input `input` of shape (1, 30) f32, output `probabilities`
//! of shape (1, 2) f32 with class order [phishing, safe] (the exported
//! model's class labels were [-1, 1]).

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::TensorRef;
use serde::Serialize;

use crate::features::FeatureVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Phishing,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Safe => write!(f, "safe"),
            Verdict::Phishing => write!(f, "phishing"),
        }
    }
}

/// Outcome of one classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub verdict: Verdict,
    /// Probability of the predicted class, as a percentage.
    pub confidence: f32,
    pub phishing_probability: f32,
    pub safe_probability: f32,
}

#[derive(Debug)]
pub struct PhishingModel {
    session: Mutex<Session>,
}

impl PhishingModel {
    /// Load an ONNX model from the given path.
    pub fn load(model_path: &Path) -> Result<Self> {
        let session = Session::builder()?
            .with_intra_threads(1)?
            .commit_from_file(model_path)
            .with_context(|| format!("cannot load model from {}", model_path.display()))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }

    /// Run probability estimation on a single feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let input = features.to_tensor();
        let input_tensor = TensorRef::from_array_view(&input)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("lock error: {e}"))?;
        let outputs = session.run(ort::inputs!["input" => input_tensor])?;

        let probs = outputs["probabilities"].try_extract_array::<f32>()?;
        let mut iter = probs.iter().copied();
        let phishing = iter.next().context("empty probability output")?;
        let safe = iter
            .next()
            .context("probability output has fewer than 2 classes")?;

        Ok(interpret_probabilities(phishing, safe))
    }
}

/// Map the two class probabilities to a verdict. Argmax, with ties going to
/// the first class (phishing), matching the exported model's class order.
pub fn interpret_probabilities(phishing: f32, safe: f32) -> Prediction {
    let verdict = if safe > phishing {
        Verdict::Safe
    } else {
        Verdict::Phishing
    };
    let confidence = match verdict {
        Verdict::Safe => safe * 100.0,
        Verdict::Phishing => phishing * 100.0,
    };

    Prediction {
        verdict,
        confidence,
        phishing_probability: phishing,
        safe_probability: safe,
    }
}
