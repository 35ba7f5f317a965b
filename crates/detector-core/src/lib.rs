//! detector-core — shared library for phishing URL detection.
//!
//! Provides lexical feature extraction, ONNX inference, request validation
//! and orchestration, and result reporting used by both the CLI and GUI
//! frontends.

pub mod analyze;
pub mod features;
pub mod inference;
pub mod report;
