//! Lexical feature extraction for phishing URL detection.
//!
//! Each URL → fixed vector of 30 signals, ordered to match the model's
//! training-time feature order. Values follow the phishing-website dataset
//! convention: -1 (phishing-indicating), 0 (neutral/unknown), 1
//! (legitimate-indicating).
//!
//! Twelve signals are derived from the URL string alone and computed here.
//! The remaining slots cover page-content and third-party signals (WHOIS age,
//! DNS records, traffic rank, anchor targets, ...) that would require network
//! I/O; they are filled with the neutral value 0 so the vector shape and
//! ordering stay intact.

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::Serialize;
use url::{Host, Url};

pub const NUM_FEATURES: usize = 30;

/// Display names, in model feature order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Using IP",
    "URL Length",
    "Shortened URL",
    "At Symbol",
    "Double Slash Redirect",
    "Prefix Suffix",
    "Sub Domains",
    "HTTPS",
    "Domain Registration Length",
    "Favicon",
    "Non Standard Port",
    "HTTPS in Domain",
    "Request URL",
    "URL of Anchor",
    "Links in Script",
    "Server Form Handler",
    "Info Email",
    "Abnormal URL",
    "Website Forwarding",
    "Status Bar Customization",
    "Disabled Right Click",
    "Popup Window",
    "IFrame",
    "Age of Domain",
    "DNS Record",
    "Web Traffic",
    "Page Rank",
    "Google Index",
    "Links Pointing",
    "Statistical Report",
];

/// Hosts of known URL shortening services.
const SHORTENERS: &[&str] = &[
    "bit.ly", "goo.gl", "tinyurl.com", "t.co", "ow.ly", "is.gd", "buff.ly",
    "adf.ly", "bit.do", "cutt.ly", "shorte.st", "rb.gy", "tiny.cc", "lnkd.in",
    "db.tt", "qr.ae", "rebrand.ly", "soo.gd", "s2r.co", "clicky.me",
];

/// Ordered 30-signal vector for a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    values: [i8; NUM_FEATURES],
}

impl FeatureVector {
    pub fn values(&self) -> &[i8; NUM_FEATURES] {
        &self.values
    }

    /// Pair each value with its display name, in model order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, i8)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Convert to a single-row (1, 30) tensor for inference.
    pub fn to_tensor(&self) -> Array2<f32> {
        Array2::from_shape_fn((1, NUM_FEATURES), |(_, j)| self.values[j] as f32)
    }
}

/// Extract the feature vector for a URL that has already passed scheme
/// validation. Parse failures are per-request errors, not panics.
pub fn extract_features(raw_url: &str) -> Result<FeatureVector> {
    let url = Url::parse(raw_url).with_context(|| format!("cannot parse URL: {raw_url}"))?;
    let host = url.host_str().unwrap_or("");

    let mut values = [0i8; NUM_FEATURES];
    values[0] = using_ip(&url);
    values[1] = url_length(raw_url);
    values[2] = shortening_service(host);
    values[3] = at_symbol(raw_url);
    values[4] = double_slash_redirect(raw_url);
    values[5] = prefix_suffix(host);
    values[6] = sub_domains(host);
    values[7] = https_scheme(&url);
    values[10] = non_standard_port(&url);
    values[11] = https_in_domain(host);
    values[16] = info_email(raw_url);
    values[17] = abnormal_url(host);

    Ok(FeatureVector { values })
}

/// IP-literal hosts (dotted quad or IPv6) are a strong phishing signal.
fn using_ip(url: &Url) -> i8 {
    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => -1,
        _ => 1,
    }
}

/// Length buckets: < 54 legitimate, 54..=75 suspicious, > 75 phishing.
fn url_length(raw_url: &str) -> i8 {
    match raw_url.len() {
        0..=53 => 1,
        54..=75 => 0,
        _ => -1,
    }
}

fn shortening_service(host: &str) -> i8 {
    let host = host.strip_prefix("www.").unwrap_or(host);
    if SHORTENERS.contains(&host) {
        -1
    } else {
        1
    }
}

fn at_symbol(raw_url: &str) -> i8 {
    if raw_url.contains('@') {
        -1
    } else {
        1
    }
}

/// A `//` after position 7 (past the `https://` prefix) signals an embedded
/// redirect target.
fn double_slash_redirect(raw_url: &str) -> i8 {
    match raw_url.rfind("//") {
        Some(pos) if pos > 7 => -1,
        _ => 1,
    }
}

fn prefix_suffix(host: &str) -> i8 {
    if host.contains('-') {
        -1
    } else {
        1
    }
}

/// Dot count with any `www.` prefix stripped: 1 legitimate, 2 suspicious,
/// more phishing.
fn sub_domains(host: &str) -> i8 {
    let host = host.strip_prefix("www.").unwrap_or(host);
    match host.matches('.').count() {
        0 | 1 => 1,
        2 => 0,
        _ => -1,
    }
}

fn https_scheme(url: &Url) -> i8 {
    if url.scheme() == "https" {
        1
    } else {
        -1
    }
}

/// `Url::port` is `None` for the scheme default, so any explicit port here is
/// non-standard.
fn non_standard_port(url: &Url) -> i8 {
    if url.port().is_some() {
        -1
    } else {
        1
    }
}

/// An `http`/`https` token inside the host itself, e.g. `https-paypal.com`.
fn https_in_domain(host: &str) -> i8 {
    if host.contains("http") {
        -1
    } else {
        1
    }
}

fn info_email(raw_url: &str) -> i8 {
    if raw_url.contains("mailto:") || raw_url.contains("mail(") {
        -1
    } else {
        1
    }
}

/// Lexical stand-in for the WHOIS identity check: a URL with no host at all
/// is abnormal.
fn abnormal_url(host: &str) -> i8 {
    if host.is_empty() {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> FeatureVector {
        extract_features(url).unwrap()
    }

    #[test]
    fn vector_has_exactly_30_values() {
        let fv = extract("https://example.com");
        assert_eq!(fv.values().len(), NUM_FEATURES);
        assert_eq!(FEATURE_NAMES.len(), NUM_FEATURES);
        assert_eq!(fv.named().count(), NUM_FEATURES);
    }

    #[test]
    fn values_stay_in_range() {
        let fv = extract("http://admin@https-login.bit.ly:8080//evil.example.com/a/long/path");
        assert!(fv.values().iter().all(|v| (-1..=1).contains(v)));
    }

    #[test]
    fn tensor_is_single_row() {
        let fv = extract("https://example.com");
        let tensor = fv.to_tensor();
        assert_eq!(tensor.shape(), &[1, NUM_FEATURES]);
        // HTTPS slot, model order index 7
        assert_eq!(tensor[[0, 7]], 1.0);
    }

    #[test]
    fn ip_literal_host_flagged() {
        assert_eq!(extract("http://192.168.10.5/login").values()[0], -1);
        assert_eq!(extract("http://[2001:db8::1]/login").values()[0], -1);
        assert_eq!(extract("https://example.com").values()[0], 1);
    }

    #[test]
    fn url_length_buckets() {
        assert_eq!(extract("https://example.com").values()[1], 1);
        let medium = format!("https://example.com/{}", "a".repeat(40));
        assert_eq!(extract(&medium).values()[1], 0);
        let long = format!("https://example.com/{}", "a".repeat(80));
        assert_eq!(extract(&long).values()[1], -1);
    }

    #[test]
    fn shortener_host_flagged() {
        assert_eq!(extract("https://bit.ly/3xyz").values()[2], -1);
        assert_eq!(extract("https://www.tinyurl.com/abc").values()[2], -1);
        assert_eq!(extract("https://example.com").values()[2], 1);
    }

    #[test]
    fn at_symbol_flagged() {
        assert_eq!(extract("http://user@example.com").values()[3], -1);
        assert_eq!(extract("http://example.com").values()[3], 1);
    }

    #[test]
    fn double_slash_redirect_flagged() {
        assert_eq!(extract("http://example.com//https://evil.com").values()[4], -1);
        // The scheme's own `//` is not a redirect
        assert_eq!(extract("https://example.com/path").values()[4], 1);
    }

    #[test]
    fn dashed_domain_flagged() {
        assert_eq!(extract("https://secure-paypal.com").values()[5], -1);
        assert_eq!(extract("https://paypal.com").values()[5], 1);
    }

    #[test]
    fn subdomain_counts() {
        assert_eq!(extract("https://example.com").values()[6], 1);
        assert_eq!(extract("https://www.example.com").values()[6], 1);
        assert_eq!(extract("https://login.example.com").values()[6], 1);
        assert_eq!(extract("https://a.login.example.com").values()[6], 0);
        assert_eq!(extract("https://x.a.login.example.com").values()[6], -1);
    }

    #[test]
    fn https_scheme_flagged() {
        assert_eq!(extract("https://example.com").values()[7], 1);
        assert_eq!(extract("http://example.com").values()[7], -1);
    }

    #[test]
    fn explicit_port_flagged() {
        assert_eq!(extract("http://example.com:8080").values()[10], -1);
        assert_eq!(extract("http://example.com").values()[10], 1);
        // Scheme default port normalizes away
        assert_eq!(extract("http://example.com:80/").values()[10], 1);
    }

    #[test]
    fn https_token_in_domain_flagged() {
        assert_eq!(extract("http://https-paypal.com").values()[11], -1);
        assert_eq!(extract("https://example.com").values()[11], 1);
    }

    #[test]
    fn mail_reference_flagged() {
        assert_eq!(extract("http://example.com/?next=mailto:x@y.z").values()[16], -1);
        assert_eq!(extract("http://example.com").values()[16], 1);
    }

    #[test]
    fn network_dependent_slots_are_neutral() {
        let fv = extract("https://example.com");
        // Page-content and third-party slots, e.g. Favicon (9), DNS
        // Record (24), Statistical Report (29)
        for idx in [8, 9, 12, 13, 14, 15, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29] {
            assert_eq!(fv.values()[idx], 0, "slot {idx} should be neutral");
        }
    }

    #[test]
    fn unparseable_url_is_an_error() {
        assert!(extract_features("http://").is_err());
        assert!(extract_features("not a url").is_err());
    }

    #[test]
    fn extraction_is_deterministic() {
        let a = extract("https://login.example-bank.com/verify");
        let b = extract("https://login.example-bank.com/verify");
        assert_eq!(a, b);
    }
}
