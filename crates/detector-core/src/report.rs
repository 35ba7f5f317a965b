//! Output formatting for analysis results.

use serde::Serialize;

use crate::features::FeatureVector;
use crate::inference::{Prediction, Verdict};

/// Per-URL analysis outcome. Either the verdict fields or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct UrlReport {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phishing_probability: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_probability: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlReport {
    pub fn classified(url: &str, prediction: Prediction, features: FeatureVector) -> Self {
        Self {
            url: url.to_string(),
            verdict: Some(prediction.verdict),
            confidence: Some(prediction.confidence),
            phishing_probability: Some(prediction.phishing_probability),
            safe_probability: Some(prediction.safe_probability),
            features: Some(features),
            error: None,
        }
    }

    pub fn failed(url: &str, error: String) -> Self {
        Self {
            url: url.to_string(),
            verdict: None,
            confidence: None,
            phishing_probability: None,
            safe_probability: None,
            features: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

pub fn print_results(results: &[UrlReport], format: OutputFormat, details: bool) {
    match format {
        OutputFormat::Text => print_text(results, details),
        OutputFormat::Json => print_json(results),
    }
}

fn print_text(results: &[UrlReport], details: bool) {
    println!("\n{}", "=".repeat(70));
    println!("ANALYSIS RESULTS");
    println!("{}", "=".repeat(70));
    println!();

    for r in results {
        match (&r.verdict, &r.error) {
            (Some(Verdict::Safe), _) => {
                println!(
                    "  [SAFE  {:6.2}%] {}",
                    r.confidence.unwrap_or(0.0),
                    r.url
                );
            }
            (Some(Verdict::Phishing), _) => {
                println!(
                    "  [PHISH {:6.2}%] {}",
                    r.confidence.unwrap_or(0.0),
                    r.url
                );
            }
            (None, Some(err)) => {
                println!("  [ERR         ] {} -- {}", r.url, err);
            }
            (None, None) => {
                println!("  [ERR         ] {} -- unknown", r.url);
            }
        }

        if details {
            if let Some(features) = &r.features {
                for (name, value) in features.named() {
                    println!("      {name:<28} {value:>2}");
                }
                println!();
            }
        }
    }

    let (safe, phishing, errors) = tally(results);
    println!("\nSUMMARY:");
    println!("  Total URLs analyzed: {}", results.len());
    println!("  Safe:                {safe}");
    println!("  Phishing:            {phishing}");
    println!("  Errors:              {errors}");
    println!("{}", "=".repeat(70));
}

fn print_json(results: &[UrlReport]) {
    let (safe, phishing, errors) = tally(results);
    let output = serde_json::json!({
        "results": results,
        "summary": {
            "total": results.len(),
            "safe": safe,
            "phishing": phishing,
            "errors": errors,
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

fn tally(results: &[UrlReport]) -> (usize, usize, usize) {
    let safe = results
        .iter()
        .filter(|r| r.verdict == Some(Verdict::Safe))
        .count();
    let phishing = results
        .iter()
        .filter(|r| r.verdict == Some(Verdict::Phishing))
        .count();
    let errors = results.iter().filter(|r| r.error.is_some()).count();
    (safe, phishing, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{extract_features, FEATURE_NAMES};
    use crate::inference::interpret_probabilities;

    fn sample_report() -> UrlReport {
        let features = extract_features("https://example.com").unwrap();
        let prediction = interpret_probabilities(0.12, 0.88);
        UrlReport::classified("https://example.com", prediction, features)
    }

    #[test]
    fn classified_report_serializes_verdict_fields() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["verdict"], "safe");
        assert!((json["confidence"].as_f64().unwrap() - 88.0).abs() < 1e-3);
        assert_eq!(
            json["features"]["values"].as_array().unwrap().len(),
            FEATURE_NAMES.len()
        );
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failed_report_serializes_error_only() {
        let report = UrlReport::failed("http://", "cannot parse URL: http://".into());
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["url"], "http://");
        assert!(json.get("verdict").is_none());
        assert!(json.get("features").is_none());
        assert_eq!(json["error"], "cannot parse URL: http://");
    }

    #[test]
    fn tally_splits_safe_phishing_and_errors() {
        let phishing = {
            let features = extract_features("http://192.168.0.1/login").unwrap();
            UrlReport::classified(
                "http://192.168.0.1/login",
                interpret_probabilities(0.91, 0.09),
                features,
            )
        };
        let failed = UrlReport::failed("http://", "cannot parse".into());
        let results = vec![sample_report(), phishing, failed];

        assert_eq!(tally(&results), (1, 1, 1));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
