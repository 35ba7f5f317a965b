//! Phishing URL Detector CLI - classifies URLs using an ONNX model.
//!
//! Usage:
//!   phishing-detector https://example.com
//!   phishing-detector https://example.com http://192.168.0.1/login --model model.onnx
//!   phishing-detector https://example.com --format json --details

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use detector_core::analyze::{run_batch, AnalyzeProgress};
use detector_core::inference::PhishingModel;
use detector_core::report::{print_results, OutputFormat};

#[derive(Parser)]
#[command(name = "phishing-detector")]
#[command(about = "ONNX-based phishing URL detector")]
struct Cli {
    /// URLs to analyze
    #[arg(required = true)]
    urls: Vec<String>,

    /// Path to the ONNX model file
    #[arg(short, long, default_value = "model.onnx")]
    model: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Include the per-feature breakdown in text output
    #[arg(short, long)]
    details: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eprintln!("[*] Loading model from {}...", cli.model.display());
    let model = Arc::new(PhishingModel::load(&cli.model)?);

    let progress = Arc::new(AnalyzeProgress::new());

    eprintln!("[*] Analyzing {} URL(s)...", cli.urls.len());
    let results = run_batch(&model, &cli.urls, &progress);

    let analyzed = progress.analyzed_urls.load(Ordering::Relaxed);
    eprintln!("[*] Analyzed {analyzed} URL(s)");

    print_results(&results, cli.format, cli.details);

    Ok(())
}
