//! Request validation and analysis orchestration for both CLI and GUI use.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;
use thiserror::Error;

use crate::features::extract_features;
use crate::inference::{PhishingModel, Verdict};
use crate::report::UrlReport;

/// Input rejected before any extraction is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a URL")]
    EmptyUrl,
    #[error("URL must start with http:// or https://")]
    MissingScheme,
}

/// Reject empty input and input without a recognized scheme prefix. No
/// further well-formedness check happens here.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::MissingScheme);
    }
    Ok(())
}

/// Atomic progress tracking — no Mutex contention with the GUI thread.
pub struct AnalyzeProgress {
    pub total_urls: AtomicUsize,
    pub analyzed_urls: AtomicUsize,
    pub phishing_count: AtomicUsize,
    pub error_count: AtomicUsize,
    pub cancel: AtomicBool,
}

impl AnalyzeProgress {
    pub fn new() -> Self {
        Self {
            total_urls: AtomicUsize::new(0),
            analyzed_urls: AtomicUsize::new(0),
            phishing_count: AtomicUsize::new(0),
            error_count: AtomicUsize::new(0),
            cancel: AtomicBool::new(false),
        }
    }
}

impl Default for AnalyzeProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a single URL: validate, extract, predict. Any failure along the
/// way is the caller's to report; nothing is retried.
pub fn analyze_url(model: &PhishingModel, url: &str) -> Result<UrlReport> {
    validate_url(url)?;
    let features = extract_features(url)?;
    let prediction = model.predict(&features)?;
    Ok(UrlReport::classified(url, prediction, features))
}

/// Analyze a batch of URLs in parallel, reporting per-URL failures inline.
/// Results come back in input order. Blocking — call from a background
/// thread when a UI is attached.
pub fn run_batch(
    model: &Arc<PhishingModel>,
    urls: &[String],
    progress: &Arc<AnalyzeProgress>,
) -> Vec<UrlReport> {
    progress.total_urls.store(urls.len(), Ordering::Relaxed);

    urls.par_iter()
        .filter_map(|url| {
            if progress.cancel.load(Ordering::Relaxed) {
                return None;
            }

            let report = match analyze_url(model, url) {
                Ok(report) => {
                    if report.verdict == Some(Verdict::Phishing) {
                        progress.phishing_count.fetch_add(1, Ordering::Relaxed);
                    }
                    report
                }
                Err(e) => {
                    progress.error_count.fetch_add(1, Ordering::Relaxed);
                    UrlReport::failed(url, format!("{e:#}"))
                }
            };

            progress.analyzed_urls.fetch_add(1, Ordering::Relaxed);
            Some(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_rejected() {
        assert_eq!(validate_url(""), Err(ValidationError::EmptyUrl));
        assert_eq!(validate_url("   "), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn missing_scheme_rejected() {
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(ValidationError::MissingScheme)
        );
        assert_eq!(
            validate_url("example.com"),
            Err(ValidationError::MissingScheme)
        );
    }

    #[test]
    fn http_and_https_accepted() {
        assert_eq!(validate_url("http://example.com"), Ok(()));
        assert_eq!(validate_url("https://example.com"), Ok(()));
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::EmptyUrl.to_string(), "please enter a URL");
        assert!(ValidationError::MissingScheme
            .to_string()
            .contains("http://"));
    }

    #[test]
    fn progress_starts_at_zero() {
        let progress = AnalyzeProgress::new();
        assert_eq!(progress.total_urls.load(Ordering::Relaxed), 0);
        assert_eq!(progress.analyzed_urls.load(Ordering::Relaxed), 0);
        assert!(!progress.cancel.load(Ordering::Relaxed));
    }
}
